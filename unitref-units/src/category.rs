//! Measurement categories
//!
//! The set of categories is closed. Each one names a dimension whose units
//! are mutually convertible; units of different categories never are.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// Identifier of a measurement category, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Length,
    Temperature,
    Area,
    Volume,
    Weight,
    Time,
    Speed,
    Energy,
    Power,
    Pressure,
    Force,
    Data,
    Angle,
    Fuel,
}

impl CategoryId {
    /// Every category, in catalog order
    pub const ALL: [CategoryId; 14] = [
        CategoryId::Length,
        CategoryId::Temperature,
        CategoryId::Area,
        CategoryId::Volume,
        CategoryId::Weight,
        CategoryId::Time,
        CategoryId::Speed,
        CategoryId::Energy,
        CategoryId::Power,
        CategoryId::Pressure,
        CategoryId::Force,
        CategoryId::Data,
        CategoryId::Angle,
        CategoryId::Fuel,
    ];

    /// Stable identifier, as used in URL paths
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Length => "length",
            CategoryId::Temperature => "temperature",
            CategoryId::Area => "area",
            CategoryId::Volume => "volume",
            CategoryId::Weight => "weight",
            CategoryId::Time => "time",
            CategoryId::Speed => "speed",
            CategoryId::Energy => "energy",
            CategoryId::Power => "power",
            CategoryId::Pressure => "pressure",
            CategoryId::Force => "force",
            CategoryId::Data => "data",
            CategoryId::Angle => "angle",
            CategoryId::Fuel => "fuel",
        }
    }

    /// Look up a category by its identifier. Matching is exact.
    pub fn parse(id: &str) -> Option<CategoryId> {
        CategoryId::ALL.into_iter().find(|c| c.as_str() == id)
    }

    /// The identifier with its first letter capitalized ("Length")
    pub fn title(&self) -> String {
        let id = self.as_str();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for CategoryId {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Presentation grouping of categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Common,
    Engineering,
    Other,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Common, Group::Engineering, Group::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Common => "common",
            Group::Engineering => "engineering",
            Group::Other => "other",
        }
    }

    pub fn parse(id: &str) -> Option<Group> {
        Group::ALL.into_iter().find(|g| g.as_str() == id)
    }

    /// Heading used when listing the group's converters
    pub fn label(&self) -> &'static str {
        match self {
            Group::Common => "Common Converters",
            Group::Engineering => "Engineering Converters",
            Group::Other => "Other Converters",
        }
    }
}

/// Display information for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: CategoryId,
    pub label: &'static str,
    pub icon: &'static str,
    pub group: Group,
}

impl CategoryInfo {
    pub const fn new(id: CategoryId, label: &'static str, icon: &'static str, group: Group) -> Self {
        CategoryInfo { id, label, icon, group }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for id in CategoryId::ALL {
            assert_eq!(CategoryId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(CategoryId::parse("mass"), None);
        assert_eq!(CategoryId::parse("Length"), None);
        assert!("".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_title() {
        assert_eq!(CategoryId::Length.title(), "Length");
        assert_eq!(CategoryId::Data.title(), "Data");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CategoryId::Temperature), "temperature");
    }

    #[test]
    fn test_group_labels() {
        assert_eq!(Group::parse("engineering"), Some(Group::Engineering));
        assert_eq!(Group::Other.label(), "Other Converters");
    }
}
