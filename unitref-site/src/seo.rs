//! Search-engine metadata for each page

use serde::Serialize;
use unitref_units::{CategoryInfo, Unit};
use crate::route::{category_path, conversion_path};

/// Title, description and keywords of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub canonical_path: String,
    pub keywords: String,
}

impl SeoMeta {
    pub fn home() -> Self {
        SeoMeta {
            title: "Unit Converter - Free Online Conversion Tool for All Units".to_string(),
            description: "Convert length, temperature, area, volume, weight, time, speed, energy, and more. Free online unit converter with instant, accurate calculations.".to_string(),
            canonical_path: "/".to_string(),
            keywords: "unit converter, online converter, length converter, temperature converter, weight converter, volume converter, area converter, time converter".to_string(),
        }
    }

    pub fn category(info: &CategoryInfo) -> Self {
        let label = info.label;
        let lower = label.to_lowercase();
        SeoMeta {
            title: format!("{label} Converter - Free Online {label} Unit Conversion"),
            description: format!(
                "Convert {lower} units instantly. Free online {lower} converter for all {lower} measurements with accurate calculations."
            ),
            canonical_path: category_path(info.id),
            keywords: format!(
                "{lower} converter, {lower} units, convert {lower}, {lower} conversion calculator"
            ),
        }
    }

    pub fn conversion(info: &CategoryInfo, from: &Unit, to: &Unit) -> Self {
        SeoMeta {
            title: format!(
                "Convert {} to {} | {} to {} Converter",
                from.name, to.name, from.symbol, to.symbol
            ),
            description: format!(
                "Convert {} ({}) to {} ({}) instantly. Free online {} converter with accurate results and conversion tables.",
                from.name,
                from.symbol,
                to.name,
                to.symbol,
                info.label.to_lowercase()
            ),
            canonical_path: conversion_path(info.id, from, to),
            keywords: format!(
                "{} to {}, {} to {}, {} converter, unit conversion, {} converter",
                from.name, to.name, from.symbol, to.symbol, info.id, from.name
            ),
        }
    }

    /// Absolute canonical URL under the given origin
    pub fn canonical_url(&self, origin: &str) -> String {
        format!("{}{}", origin, self.canonical_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitref_units::{CategoryId, CATALOG};

    #[test]
    fn test_home() {
        let seo = SeoMeta::home();
        assert_eq!(seo.canonical_path, "/");
        assert!(seo.title.starts_with("Unit Converter"));
    }

    #[test]
    fn test_category() {
        let seo = SeoMeta::category(CATALOG.info(CategoryId::Data));
        assert_eq!(seo.title, "Data Storage Converter - Free Online Data Storage Unit Conversion");
        assert_eq!(seo.canonical_path, "/data");
        assert!(seo.keywords.starts_with("data storage converter, data storage units"));
    }

    #[test]
    fn test_conversion() {
        let info = CATALOG.info(CategoryId::Length);
        let cm = CATALOG.unit(CategoryId::Length, "centimeter").unwrap();
        let inch = CATALOG.unit(CategoryId::Length, "inch").unwrap();
        let seo = SeoMeta::conversion(info, cm, inch);

        assert_eq!(seo.title, "Convert Centimeter to Inch | cm to in Converter");
        assert_eq!(
            seo.description,
            "Convert Centimeter (cm) to Inch (in) instantly. Free online length converter with accurate results and conversion tables."
        );
        assert_eq!(seo.canonical_path, "/length/centimeter-to-inch");
        assert_eq!(
            seo.keywords,
            "Centimeter to Inch, cm to in, length converter, unit conversion, Centimeter converter"
        );
        assert_eq!(
            seo.canonical_url("https://unitref.example"),
            "https://unitref.example/length/centimeter-to-inch"
        );
    }
}
