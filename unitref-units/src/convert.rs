//! Unit-to-unit conversion, conversion tables and factors

use serde::Serialize;
use crate::format::format_number;
use crate::Unit;

/// Inputs of the reference table, in display order
pub const TABLE_INPUTS: [f64; 11] = [0.01, 0.1, 1.0, 2.0, 3.0, 5.0, 10.0, 20.0, 50.0, 100.0, 1000.0];

/// One row of a conversion table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub from: f64,
    pub to: String,
}

/// Convert a value between two units of the same category.
///
/// The value passes through the category's base unit. Both units must come
/// from the same category; mixing categories yields a meaningless number.
pub fn convert(value: f64, from: &Unit, to: &Unit) -> f64 {
    to.from_base(from.to_base(value))
}

/// Reference table of formatted results for [`TABLE_INPUTS`]
pub fn generate_conversion_table(from: &Unit, to: &Unit) -> Vec<TableRow> {
    TABLE_INPUTS
        .iter()
        .map(|&input| TableRow {
            from: input,
            to: format_number(convert(input, from, to)),
        })
        .collect()
}

/// Formatted result of converting one `from` unit
pub fn conversion_factor(from: &Unit, to: &Unit) -> String {
    format_number(convert(1.0, from, to))
}
