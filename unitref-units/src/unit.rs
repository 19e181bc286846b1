//! Unit representation

use std::fmt;
use serde::Serialize;
use crate::Transform;

/// A unit of measurement within one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Stable identifier, unique within the category (e.g. "kilometer")
    pub id: &'static str,
    /// Display name (e.g. "Kilometer")
    pub name: &'static str,
    /// Display symbol (e.g. "km")
    pub symbol: &'static str,
    /// Mapping onto the category's base unit
    #[serde(skip)]
    pub(crate) transform: Transform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_use: Option<&'static str>,
}

impl Unit {
    /// Create a unit with no descriptive text
    pub const fn new(
        id: &'static str,
        name: &'static str,
        symbol: &'static str,
        transform: Transform,
    ) -> Self {
        Unit {
            id,
            name,
            symbol,
            transform,
            definition: None,
            history: None,
            current_use: None,
        }
    }

    /// Attach definition, history and current-use text
    pub const fn describe(
        mut self,
        definition: &'static str,
        history: &'static str,
        current_use: &'static str,
    ) -> Self {
        self.definition = Some(definition);
        self.history = Some(history);
        self.current_use = Some(current_use);
        self
    }

    pub fn has_description(&self) -> bool {
        self.definition.is_some()
    }

    /// True when conversions to and from this unit are pure scaling
    pub fn is_linear(&self) -> bool {
        self.transform.is_linear()
    }

    pub(crate) fn to_base(&self, value: f64) -> f64 {
        self.transform.to_base(value)
    }

    pub(crate) fn from_base(&self, value: f64) -> f64 {
        self.transform.from_base(value)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("meter", "Meter", "m", Transform::Identity)
    }

    fn kilometer() -> Unit {
        Unit::new("kilometer", "Kilometer", "km", Transform::scale(1000.0))
    }

    #[test]
    fn test_base_round_trip() {
        let km = kilometer();
        assert_eq!(km.to_base(5.0), 5000.0);
        assert_eq!(km.from_base(5000.0), 5.0);
        assert_eq!(meter().to_base(7.5), 7.5);
        assert!(km.is_linear());
    }

    #[test]
    fn test_describe() {
        let m = meter();
        assert!(!m.has_description());

        let m = m.describe("def", "hist", "use");
        assert!(m.has_description());
        assert_eq!(m.history, Some("hist"));
        assert_eq!(m.current_use, Some("use"));
    }

    #[test]
    fn test_display_is_symbol() {
        assert_eq!(kilometer().to_string(), "km");
    }
}
