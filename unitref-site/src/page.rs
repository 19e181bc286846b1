//! Page models
//!
//! Each page is assembled from the catalog alone. Rendering to markdown
//! lives in `render`.

use serde::Serialize;
use serde_json::Value;
use unitref_units::{
    conversion_factor, convert, format_number, generate_conversion_table, CategoryId,
    CategoryInfo, Group, TableRow, Unit, CATALOG,
};
use crate::converter::UnitConverter;
use crate::route::{category_path, conversion_path, Route};
use crate::schema;
use crate::seo::SeoMeta;
use crate::SiteConfig;

/// Units paired on a category page's popular list
const POPULAR_UNITS: usize = 6;
const MAX_POPULAR: usize = 20;
/// Other units linked from a conversion page
const RELATED_UNITS: usize = 8;
const MAX_RELATED: usize = 16;
/// Input of the worked example on a conversion page
const EXAMPLE_VALUE: f64 = 15.0;

/// A hyperlink within the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Link { label: label.into(), path: path.into(), title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    pub link: Link,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub group: Group,
    pub label: &'static str,
    pub entries: Vec<SidebarEntry>,
}

/// Category navigation shown beside every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub groups: Vec<SidebarGroup>,
}

impl Sidebar {
    pub fn new(active: Option<CategoryId>) -> Self {
        let groups = Group::ALL
            .into_iter()
            .map(|group| SidebarGroup {
                group,
                label: group.label(),
                entries: CATALOG
                    .by_group(group)
                    .into_iter()
                    .map(|info| SidebarEntry {
                        link: Link::new(info.label, category_path(info.id)),
                        active: active == Some(info.id),
                    })
                    .collect(),
            })
            .collect();
        Sidebar { groups }
    }
}

/// Landing page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub converter: UnitConverter,
    pub categories: Vec<Link>,
    pub common: Vec<Link>,
    pub sidebar: Sidebar,
    pub seo: SeoMeta,
    pub schema: Vec<Value>,
}

impl HomePage {
    pub fn build(config: &SiteConfig) -> Self {
        let categories = CATALOG
            .categories()
            .iter()
            .map(|info| Link::new(format!("{} {}", info.icon, info.label), category_path(info.id)))
            .collect();

        let common = CATALOG
            .common_conversions()
            .iter()
            .filter_map(|common| {
                let (from, to) = common.resolve(&CATALOG)?;
                Some(
                    Link::new(format!("{} → {}", from.symbol, to.symbol), common.path())
                        .with_title(format!("Convert {} to {}", from.name, to.name)),
                )
            })
            .collect();

        HomePage {
            converter: UnitConverter::new(),
            categories,
            common,
            sidebar: Sidebar::new(None),
            seo: SeoMeta::home(),
            schema: vec![schema::website(config.origin())],
        }
    }
}

/// Landing page of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPage {
    pub info: CategoryInfo,
    pub breadcrumbs: Vec<Link>,
    pub heading: String,
    pub converter: UnitConverter,
    pub popular_heading: String,
    pub popular: Vec<Link>,
    pub complete_heading: String,
    pub complete: Vec<Link>,
    pub total_note: String,
    pub sidebar: Sidebar,
    pub seo: SeoMeta,
    pub schema: Vec<Value>,
}

impl CategoryPage {
    pub fn build(config: &SiteConfig, category: CategoryId) -> Self {
        let info = CATALOG.info(category);
        let units = CATALOG.units(category);
        let title = category.title();

        let main = &units[..units.len().min(POPULAR_UNITS)];
        let popular = ordered_pairs(main)
            .take(MAX_POPULAR)
            .map(|(from, to)| {
                Link::new(format!("{} → {}", from.symbol, to.symbol), conversion_path(category, from, to))
                    .with_title(format!("Convert {} to {}", from.name, to.name))
            })
            .collect();

        let complete: Vec<Link> = ordered_pairs(units)
            .map(|(from, to)| {
                Link::new(format!("{} to {}", from.symbol, to.symbol), conversion_path(category, from, to))
                    .with_title(format!(
                        "Convert {} to {} - {} Conversion",
                        from.name, to.name, info.label
                    ))
            })
            .collect();

        CategoryPage {
            info: info.clone(),
            breadcrumbs: vec![
                Link::new("Home", "/"),
                Link::new(format!("{} Conversion", title), category_path(category)),
            ],
            heading: format!("{} {} Converter", info.icon, info.label),
            converter: UnitConverter::for_category(category),
            popular_heading: format!("Popular {} Conversions", title),
            popular,
            complete_heading: format!("Complete List of {} Unit Conversions", info.label),
            total_note: format!(
                "Total: {} {} conversions available",
                complete.len(),
                info.label.to_lowercase()
            ),
            complete,
            sidebar: Sidebar::new(Some(category)),
            seo: SeoMeta::category(info),
            schema: vec![schema::category(config.origin(), info)],
        }
    }
}

/// Descriptive text of a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitDescription {
    pub name: &'static str,
    pub definition: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_use: Option<&'static str>,
}

impl UnitDescription {
    fn of(unit: &'static Unit) -> Option<Self> {
        Some(UnitDescription {
            name: unit.name,
            definition: unit.definition?,
            history: unit.history,
            current_use: unit.current_use,
        })
    }
}

/// Factor, reverse factor and a worked example
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HowTo {
    pub heading: String,
    pub factor: String,
    pub reverse_factor: String,
    pub example_result: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkList {
    pub heading: String,
    pub links: Vec<Link>,
}

/// Page for one ordered pair of units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionPage {
    pub category: CategoryId,
    pub from: &'static Unit,
    pub to: &'static Unit,
    pub breadcrumbs: Vec<Link>,
    pub heading: String,
    /// Lead-in sentence, completed by the `reverse` link
    pub intro: String,
    pub reverse: Link,
    pub converter: UnitConverter,
    pub descriptions: Vec<UnitDescription>,
    pub table_heading: String,
    pub table_columns: [String; 2],
    pub table: Vec<TableRow>,
    pub how_to: HowTo,
    pub other_units: Vec<LinkList>,
    pub related: LinkList,
    pub sidebar: Sidebar,
    pub seo: SeoMeta,
    pub schema: Vec<Value>,
}

impl ConversionPage {
    pub fn build(config: &SiteConfig, category: CategoryId, from: &'static Unit, to: &'static Unit) -> Self {
        let info = CATALOG.info(category);
        let title = category.title();
        let factor = conversion_factor(from, to);
        let reverse_factor = conversion_factor(to, from);
        let example_result = format_number(convert(EXAMPLE_VALUE, from, to));

        let mut converter = UnitConverter::for_category(category);
        converter.select_from(from.id);
        converter.select_to(to.id);

        let how_to = HowTo {
            heading: format!("How to Convert {} to {}", from.name, to.name),
            lines: vec![
                format!("1 {} = {} {}", from.symbol, factor, to.symbol),
                format!("1 {} = {} {}", to.symbol, reverse_factor, from.symbol),
                format!("Example: convert {} {} to {}:", EXAMPLE_VALUE, from.symbol, to.symbol),
                format!(
                    "{} {} = {} × {} {} = {} {}",
                    EXAMPLE_VALUE, from.symbol, EXAMPLE_VALUE, factor, to.symbol, example_result, to.symbol
                ),
            ],
            factor,
            reverse_factor,
            example_result,
        };

        ConversionPage {
            category,
            from,
            to,
            breadcrumbs: vec![
                Link::new("Home", "/"),
                Link::new(format!("{} Conversion", title), category_path(category)),
                Link::new(
                    format!("Convert {} to {}", from.symbol, to.symbol),
                    conversion_path(category, from, to),
                ),
            ],
            heading: format!("Convert {} to {}", from.name, to.name),
            intro: format!(
                "Please provide values below to convert {} [{}] to {} [{}], or",
                from.name.to_lowercase(),
                from.symbol,
                to.name.to_lowercase(),
                to.symbol
            ),
            reverse: Link::new("vice versa", conversion_path(category, to, from)),
            converter,
            descriptions: [from, to].into_iter().filter_map(UnitDescription::of).collect(),
            table_heading: format!("{} to {} Conversion Table", from.name, to.name),
            table_columns: [
                format!("{} [{}]", from.name, from.symbol),
                format!("{} [{}]", to.name, to.symbol),
            ],
            table: generate_conversion_table(from, to),
            how_to,
            other_units: vec![
                other_units(category, from, to),
                other_units(category, to, from),
            ],
            related: LinkList {
                heading: format!("Popular {} Conversions", title),
                links: related_conversions(category, from, to),
            },
            sidebar: Sidebar::new(Some(category)),
            seo: SeoMeta::conversion(info, from, to),
            schema: schema::conversion(config.origin(), info, from, to),
        }
    }
}

/// Any page of the site
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    Home(HomePage),
    Category(CategoryPage),
    Conversion(ConversionPage),
}

impl Page {
    pub fn build(config: &SiteConfig, route: &Route) -> Self {
        match route {
            Route::Home => Page::Home(HomePage::build(config)),
            Route::Category(id) => Page::Category(CategoryPage::build(config, *id)),
            Route::Conversion { category, from, to } => {
                Page::Conversion(ConversionPage::build(config, *category, *from, *to))
            }
        }
    }

    pub fn seo(&self) -> &SeoMeta {
        match self {
            Page::Home(p) => &p.seo,
            Page::Category(p) => &p.seo,
            Page::Conversion(p) => &p.seo,
        }
    }

    pub fn schema(&self) -> &[Value] {
        match self {
            Page::Home(p) => &p.schema,
            Page::Category(p) => &p.schema,
            Page::Conversion(p) => &p.schema,
        }
    }

    pub fn sidebar(&self) -> &Sidebar {
        match self {
            Page::Home(p) => &p.sidebar,
            Page::Category(p) => &p.sidebar,
            Page::Conversion(p) => &p.sidebar,
        }
    }
}

/// Every ordered pair of distinct units, row by row
fn ordered_pairs(units: &'static [Unit]) -> impl Iterator<Item = (&'static Unit, &'static Unit)> {
    units.iter().flat_map(move |from| {
        units
            .iter()
            .filter(move |to| to.id != from.id)
            .map(move |to| (from, to))
    })
}

/// Links from `unit` to every other unit of the category except `exclude`
fn other_units(category: CategoryId, unit: &'static Unit, exclude: &'static Unit) -> LinkList {
    let links = CATALOG
        .units(category)
        .iter()
        .filter(|u| u.id != unit.id && u.id != exclude.id)
        .map(|u| {
            Link::new(format!("{} to {}", unit.name, u.name), conversion_path(category, unit, u))
                .with_title(format!("Convert {} to {}", unit.name, u.name))
        })
        .collect();
    LinkList {
        heading: format!("Convert {} to Other {} Units", unit.name, category.title()),
        links,
    }
}

/// Pairs through the first few other units: from→u then u→to for each
fn related_conversions(category: CategoryId, from: &'static Unit, to: &'static Unit) -> Vec<Link> {
    CATALOG
        .units(category)
        .iter()
        .filter(|u| u.id != from.id && u.id != to.id)
        .take(RELATED_UNITS)
        .flat_map(|u| [(from, u), (u, to)])
        .take(MAX_RELATED)
        .map(|(a, b)| {
            Link::new(format!("{} to {}", a.symbol, b.symbol), conversion_path(category, a, b))
                .with_title(format!("Convert {} to {}", a.name, b.name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::new("https://unitref.example")
    }

    fn conversion_page(category: CategoryId, from: &str, to: &str) -> ConversionPage {
        ConversionPage::build(
            &config(),
            category,
            CATALOG.unit(category, from).unwrap(),
            CATALOG.unit(category, to).unwrap(),
        )
    }

    #[test]
    fn test_sidebar_groups() {
        let sidebar = Sidebar::new(Some(CategoryId::Speed));
        let labels: Vec<_> = sidebar.groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, ["Common Converters", "Engineering Converters", "Other Converters"]);
        assert_eq!(sidebar.groups[0].entries.len(), 6);

        let active: Vec<_> = sidebar
            .groups
            .iter()
            .flat_map(|g| &g.entries)
            .filter(|e| e.active)
            .map(|e| e.link.path.as_str())
            .collect();
        assert_eq!(active, ["/speed"]);
    }

    #[test]
    fn test_home_page() {
        let page = HomePage::build(&config());
        assert_eq!(page.categories.len(), 14);
        assert_eq!(page.categories[0].label, "📏 Length");
        assert_eq!(page.common.len(), 32);
        assert_eq!(page.common[0].label, "cm → in");
        assert_eq!(page.common[0].path, "/length/centimeter-to-inch");
    }

    #[test]
    fn test_category_page() {
        let page = CategoryPage::build(&config(), CategoryId::Length);
        assert_eq!(page.heading, "📏 Length Converter");
        assert_eq!(page.breadcrumbs[1].label, "Length Conversion");
        assert_eq!(page.popular.len(), 20);
        assert_eq!(page.popular[0].path, "/length/meter-to-kilometer");
        assert_eq!(page.complete.len(), 110);
        assert_eq!(page.total_note, "Total: 110 length conversions available");
        assert_eq!(page.converter.from_unit().id, "meter");
    }

    #[test]
    fn test_popular_pairs_small_category() {
        let page = CategoryPage::build(&config(), CategoryId::Fuel);
        assert_eq!(page.popular.len(), 12);
        assert_eq!(page.complete.len(), 12);
        assert_eq!(page.complete_heading, "Complete List of Fuel Economy Unit Conversions");
    }

    #[test]
    fn test_conversion_page() {
        let page = conversion_page(CategoryId::Length, "centimeter", "inch");
        assert_eq!(page.heading, "Convert Centimeter to Inch");
        assert_eq!(page.reverse.path, "/length/inch-to-centimeter");
        assert_eq!(page.table.len(), 11);
        assert_eq!(page.table_columns[0], "Centimeter [cm]");
        assert_eq!(page.how_to.factor, "0.39370079");
        assert_eq!(page.how_to.reverse_factor, "2.54");
        assert_eq!(page.how_to.lines[3], "15 cm = 15 × 0.39370079 in = 5.90551 in");
        assert_eq!(page.descriptions.len(), 2);
        assert_eq!(page.converter.to_unit().id, "inch");
    }

    #[test]
    fn test_descriptions_only_for_described_units() {
        let page = conversion_page(CategoryId::Length, "meter", "nanometer");
        assert_eq!(page.descriptions.len(), 1);
        assert_eq!(page.descriptions[0].name, "Meter");
    }

    #[test]
    fn test_other_units() {
        let page = conversion_page(CategoryId::Temperature, "celsius", "fahrenheit");
        assert_eq!(page.other_units[0].heading, "Convert Celsius to Other Temperature Units");
        let labels: Vec<_> = page.other_units[0].links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Celsius to Kelvin", "Celsius to Rankine"]);
        assert_eq!(page.other_units[1].links[0].path, "/temperature/fahrenheit-to-kelvin");
    }

    #[test]
    fn test_related_interleaved_and_capped() {
        let page = conversion_page(CategoryId::Length, "meter", "foot");
        let links = &page.related.links;
        assert_eq!(links.len(), 16);
        assert_eq!(links[0].path, "/length/meter-to-kilometer");
        assert_eq!(links[1].path, "/length/kilometer-to-foot");
        assert_eq!(page.related.heading, "Popular Length Conversions");
    }

    #[test]
    fn test_related_small_category() {
        let page = conversion_page(CategoryId::Fuel, "kmperliter", "mpg");
        assert_eq!(page.related.links.len(), 4);
    }

    #[test]
    fn test_page_accessors() {
        let page = Page::build(&config(), &Route::Category(CategoryId::Angle));
        assert_eq!(page.seo().canonical_path, "/angle");
        assert_eq!(page.schema().len(), 1);
        assert!(page.sidebar().groups[2].entries.iter().any(|e| e.active));
    }
}
