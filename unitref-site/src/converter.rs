//! Interactive converter state

use serde::Serialize;
use unitref_core::parse_value;
use unitref_units::{convert, format_number, CategoryId, CommonConversion, Unit, CATALOG};

/// Placeholder shown while the input is empty
pub const EMPTY_RESULT: &str = "—";

const DEFAULT_INPUT: &str = "1";

/// State of the converter widget: a category, two of its units and the
/// text typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitConverter {
    category: CategoryId,
    from: &'static Unit,
    to: &'static Unit,
    input: String,
}

impl UnitConverter {
    pub fn new() -> Self {
        Self::for_category(CategoryId::Length)
    }

    /// Converter preset to the first two units of a category
    pub fn for_category(category: CategoryId) -> Self {
        let units = CATALOG.units(category);
        UnitConverter {
            category,
            from: &units[0],
            to: &units[1],
            input: DEFAULT_INPUT.to_string(),
        }
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn from_unit(&self) -> &'static Unit {
        self.from
    }

    pub fn to_unit(&self) -> &'static Unit {
        self.to
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Units offered by both pickers
    pub fn units(&self) -> &'static [Unit] {
        CATALOG.units(self.category)
    }

    /// Switch category. Resets both units and the input.
    pub fn set_category(&mut self, category: CategoryId) {
        *self = Self::for_category(category);
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Select the source unit by id. Unknown ids leave the state unchanged.
    pub fn select_from(&mut self, id: &str) -> bool {
        match CATALOG.unit(self.category, id) {
            Some(unit) => {
                self.from = unit;
                true
            }
            None => false,
        }
    }

    /// Select the target unit by id. Unknown ids leave the state unchanged.
    pub fn select_to(&mut self, id: &str) -> bool {
        match CATALOG.unit(self.category, id) {
            Some(unit) => {
                self.to = unit;
                true
            }
            None => false,
        }
    }

    /// Jump to a curated conversion with the input reset
    pub fn select_common(&mut self, common: &CommonConversion) -> bool {
        let Some((from, to)) = common.resolve(&CATALOG) else {
            return false;
        };
        self.category = common.category;
        self.from = from;
        self.to = to;
        self.input = DEFAULT_INPUT.to_string();
        true
    }

    /// Converted value. Input that does not parse counts as 0.
    pub fn result(&self) -> f64 {
        parse_value(&self.input)
            .map(|value| convert(value, self.from, self.to))
            .unwrap_or(0.0)
    }

    /// Formatted result, or a dash while the input is empty
    pub fn display(&self) -> String {
        if self.input.is_empty() {
            EMPTY_RESULT.to_string()
        } else {
            format_number(self.result())
        }
    }

    /// One-line summary such as "1 m = 100 cm"
    pub fn formula(&self) -> String {
        format!(
            "{} {} = {} {}",
            self.input, self.from.symbol, self.display(), self.to.symbol
        )
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let converter = UnitConverter::new();
        assert_eq!(converter.category(), CategoryId::Length);
        assert_eq!(converter.from_unit().id, "meter");
        assert_eq!(converter.to_unit().id, "kilometer");
        assert_eq!(converter.input(), "1");
        assert_eq!(converter.display(), "0.001");
    }

    #[test]
    fn test_set_category_resets() {
        let mut converter = UnitConverter::new();
        converter.set_input("25");
        converter.set_category(CategoryId::Temperature);
        assert_eq!(converter.from_unit().id, "celsius");
        assert_eq!(converter.to_unit().id, "fahrenheit");
        assert_eq!(converter.input(), "1");
        assert_eq!(converter.display(), "33.8");
    }

    #[test]
    fn test_swap() {
        let mut converter = UnitConverter::new();
        converter.swap();
        assert_eq!(converter.from_unit().id, "kilometer");
        assert_eq!(converter.to_unit().id, "meter");
        assert_eq!(converter.display(), "1,000");
    }

    #[test]
    fn test_select_units() {
        let mut converter = UnitConverter::new();
        assert!(converter.select_from("centimeter"));
        assert!(converter.select_to("inch"));
        converter.set_input("100");
        assert_eq!(converter.display(), "39.3701");

        assert!(!converter.select_to("kilogram"));
        assert_eq!(converter.to_unit().id, "inch");
    }

    #[test]
    fn test_select_common() {
        let mut converter = UnitConverter::new();
        converter.set_input("7");
        let common = CATALOG.common_conversions()[4];
        assert!(converter.select_common(&common));
        assert_eq!(converter.category(), CategoryId::Temperature);
        assert_eq!(converter.from_unit().id, "celsius");
        assert_eq!(converter.input(), "1");
    }

    #[test]
    fn test_select_common_unresolved_is_ignored() {
        let mut converter = UnitConverter::new();
        let bogus = CommonConversion {
            from: "furlong",
            to: "meter",
            category: CategoryId::Length,
        };
        assert!(!converter.select_common(&bogus));
        assert_eq!(converter, UnitConverter::new());
    }

    #[test]
    fn test_empty_and_invalid_input() {
        let mut converter = UnitConverter::new();
        converter.set_input("");
        assert_eq!(converter.display(), EMPTY_RESULT);

        converter.set_input("abc");
        assert_eq!(converter.result(), 0.0);
        assert_eq!(converter.display(), "0");
    }

    #[test]
    fn test_formula() {
        let mut converter = UnitConverter::new();
        converter.select_to("centimeter");
        assert_eq!(converter.formula(), "1 m = 100 cm");
    }
}
