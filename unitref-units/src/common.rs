//! Curated list of frequently requested conversions

use serde::Serialize;
use crate::category::CategoryId;
use crate::units::Catalog;
use crate::Unit;

/// A popular (from, to) pair offered as a quick pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonConversion {
    pub from: &'static str,
    pub to: &'static str,
    pub category: CategoryId,
}

impl CommonConversion {
    const fn new(from: &'static str, to: &'static str, category: CategoryId) -> Self {
        CommonConversion { from, to, category }
    }

    /// Resolve both unit ids against the catalog
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<(&'a Unit, &'a Unit)> {
        let from = catalog.unit(self.category, self.from)?;
        let to = catalog.unit(self.category, self.to)?;
        Some((from, to))
    }

    /// Site path of the conversion page
    pub fn path(&self) -> String {
        format!("/{}/{}-to-{}", self.category, self.from, self.to)
    }
}

use CategoryId::{Angle, Area, Data, Energy, Length, Speed, Temperature, Volume, Weight};

pub(crate) static COMMON_CONVERSIONS: [CommonConversion; 32] = [
    CommonConversion::new("centimeter", "inch", Length),
    CommonConversion::new("inch", "centimeter", Length),
    CommonConversion::new("kilogram", "pound", Weight),
    CommonConversion::new("pound", "kilogram", Weight),
    CommonConversion::new("celsius", "fahrenheit", Temperature),
    CommonConversion::new("fahrenheit", "celsius", Temperature),
    CommonConversion::new("millimeter", "inch", Length),
    CommonConversion::new("inch", "millimeter", Length),
    CommonConversion::new("meter", "foot", Length),
    CommonConversion::new("foot", "meter", Length),
    CommonConversion::new("kilometer", "mile", Length),
    CommonConversion::new("mile", "kilometer", Length),
    CommonConversion::new("centimeter", "foot", Length),
    CommonConversion::new("foot", "centimeter", Length),
    CommonConversion::new("gram", "ounce", Weight),
    CommonConversion::new("ounce", "gram", Weight),
    CommonConversion::new("inch", "foot", Length),
    CommonConversion::new("foot", "inch", Length),
    CommonConversion::new("liter", "gallon", Volume),
    CommonConversion::new("gallon", "liter", Volume),
    CommonConversion::new("pound", "ounce", Weight),
    CommonConversion::new("ounce", "pound", Weight),
    CommonConversion::new("acre", "sqfoot", Area),
    CommonConversion::new("sqfoot", "acre", Area),
    CommonConversion::new("kph", "mph", Speed),
    CommonConversion::new("mph", "kph", Speed),
    CommonConversion::new("kilocalorie", "joule", Energy),
    CommonConversion::new("joule", "kilocalorie", Energy),
    CommonConversion::new("megabyte", "gigabyte", Data),
    CommonConversion::new("gigabyte", "megabyte", Data),
    CommonConversion::new("degree", "radian", Angle),
    CommonConversion::new("radian", "degree", Angle),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CATALOG;

    #[test]
    fn test_every_common_conversion_resolves() {
        for common in CATALOG.common_conversions() {
            assert!(
                common.resolve(&CATALOG).is_some(),
                "{} -> {} in {}",
                common.from,
                common.to,
                common.category
            );
        }
    }

    #[test]
    fn test_common_conversions_come_in_pairs() {
        let list = CATALOG.common_conversions();
        assert_eq!(list.len(), 32);
        for pair in list.chunks(2) {
            assert_eq!(pair[0].from, pair[1].to);
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn test_path() {
        assert_eq!(COMMON_CONVERSIONS[0].path(), "/length/centimeter-to-inch");
    }
}
