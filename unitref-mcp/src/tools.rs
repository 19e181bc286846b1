//! Tool implementations
//!
//! Each tool takes the JSON `arguments` object of a `tools/call` request
//! and returns a result with a markdown `content` block plus structured
//! fields.

use serde_json::{json, Value as JsonValue};
use thiserror::Error;
use tracing::debug;
use unitref_core::{parse_value, UnitrefError};
use unitref_site::Site;
use unitref_units::{
    conversion_factor, convert, format_number, generate_conversion_table, CategoryId, Group,
    Unit, CATALOG,
};

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{0}")]
    Failed(#[from] UnitrefError),
}

type ToolResult = Result<JsonValue, ToolError>;

/// Dispatch a tool call by name
pub fn call(site: &Site, name: &str, args: &JsonValue) -> ToolResult {
    debug!(tool = name, "tool call");
    match name {
        "list_categories" => list_categories(args),
        "list_units" => list_units(args),
        "convert" => convert_value(args),
        "format_number" => format_value(args),
        "conversion_table" => conversion_table(args),
        "conversion_factor" => factor(args),
        "common_conversions" => common_conversions(),
        "render_page" => render_page(site, args),
        _ => Err(ToolError::UnknownTool(name.to_string())),
    }
}

/// Tool descriptors for `tools/list`
pub fn definitions() -> JsonValue {
    let unit_pair = json!({
        "type": "object",
        "properties": {
            "category": { "type": "string", "description": "Category id, e.g. length" },
            "from": { "type": "string", "description": "Source unit id or symbol" },
            "to": { "type": "string", "description": "Target unit id or symbol" }
        },
        "required": ["category", "from", "to"]
    });

    json!({
        "tools": [
            {
                "name": "list_categories",
                "description": "List measurement categories, optionally for one group.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "group": {
                            "type": "string",
                            "description": "Filter by group",
                            "enum": ["common", "engineering", "other"]
                        }
                    }
                }
            },
            {
                "name": "list_units",
                "description": "List the units of a category in display order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "description": "Category id, e.g. temperature" }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "convert",
                "description": "Convert a value between two units of the same category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": ["number", "string"], "description": "Value to convert" },
                        "category": { "type": "string", "description": "Category id, e.g. length" },
                        "from": { "type": "string", "description": "Source unit id or symbol" },
                        "to": { "type": "string", "description": "Target unit id or symbol" }
                    },
                    "required": ["value", "category", "from", "to"]
                }
            },
            {
                "name": "format_number",
                "description": "Format a number the way conversion results are displayed.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": ["number", "string"], "description": "Number to format" }
                    },
                    "required": ["value"]
                }
            },
            {
                "name": "conversion_table",
                "description": "Reference table for 0.01 to 1000 of the source unit.",
                "inputSchema": unit_pair.clone()
            },
            {
                "name": "conversion_factor",
                "description": "How much one source unit is in the target unit, and the reverse.",
                "inputSchema": unit_pair
            },
            {
                "name": "common_conversions",
                "description": "List frequently requested conversions.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "render_page",
                "description": "Render a site page (/, /{category} or /{category}/{from}-to-{to}) to markdown with SEO metadata and JSON-LD.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "path": { "type": "string", "description": "Request path, e.g. /length/centimeter-to-inch" }
                    },
                    "required": ["path"]
                }
            }
        ]
    })
}

fn list_categories(args: &JsonValue) -> ToolResult {
    let group = match optional_str(args, "group") {
        Some(g) => Some(Group::parse(g).ok_or_else(|| {
            UnitrefError::arg_type("list_categories", "group", "one of common, engineering, other")
        })?),
        None => None,
    };

    let categories: Vec<_> = CATALOG
        .categories()
        .iter()
        .filter(|c| group.map_or(true, |g| c.group == g))
        .collect();

    let mut text = String::new();
    for info in &categories {
        text.push_str(&format!(
            "- {} {} (`{}`, {} units)\n",
            info.icon,
            info.label,
            info.id,
            CATALOG.units(info.id).len()
        ));
    }

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "categories": categories.iter().map(|info| json!({
            "id": info.id,
            "label": info.label,
            "icon": info.icon,
            "group": info.group,
            "units": CATALOG.units(info.id).len()
        })).collect::<Vec<_>>()
    }))
}

fn list_units(args: &JsonValue) -> ToolResult {
    let category = category_arg("list_units", args)?;

    let mut text = format!("## {} units\n\n| id | name | symbol |\n|----|------|--------|\n", CATALOG.info(category).label);
    for unit in CATALOG.units(category) {
        text.push_str(&format!("| {} | {} | {} |\n", unit.id, unit.name, unit.symbol));
    }

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "category": category,
        "units": CATALOG.units(category).iter().map(unit_json).collect::<Vec<_>>()
    }))
}

fn convert_value(args: &JsonValue) -> ToolResult {
    let value = number_arg("convert", args, "value")?;
    let (from, to) = unit_pair("convert", args)?;
    let result = convert(value, from, to);
    let formatted = format_number(result);

    Ok(json!({
        "content": [{
            "type": "text",
            "text": format!("{} {} = {} {}", format_number(value), from.symbol, formatted, to.symbol)
        }],
        "value": finite_or_null(result),
        "formatted": formatted,
        "from": unit_json(from),
        "to": unit_json(to)
    }))
}

fn format_value(args: &JsonValue) -> ToolResult {
    let value = number_arg("format_number", args, "value")?;
    let formatted = format_number(value);
    Ok(json!({
        "content": [{ "type": "text", "text": formatted }],
        "formatted": formatted
    }))
}

fn conversion_table(args: &JsonValue) -> ToolResult {
    let (from, to) = unit_pair("conversion_table", args)?;
    let rows = generate_conversion_table(from, to);

    let mut text = format!(
        "| {} [{}] | {} [{}] |\n|------|------|\n",
        from.name, from.symbol, to.name, to.symbol
    );
    for row in &rows {
        text.push_str(&format!("| {} {} | {} {} |\n", row.from, from.symbol, row.to, to.symbol));
    }

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "rows": rows
    }))
}

fn factor(args: &JsonValue) -> ToolResult {
    let (from, to) = unit_pair("conversion_factor", args)?;
    let factor = conversion_factor(from, to);
    let reverse = conversion_factor(to, from);

    Ok(json!({
        "content": [{
            "type": "text",
            "text": format!(
                "1 {} = {} {}\n1 {} = {} {}",
                from.symbol, factor, to.symbol, to.symbol, reverse, from.symbol
            )
        }],
        "factor": factor,
        "reverse": reverse
    }))
}

fn common_conversions() -> ToolResult {
    let entries: Vec<JsonValue> = CATALOG
        .common_conversions()
        .iter()
        .filter_map(|common| {
            let (from, to) = common.resolve(&CATALOG)?;
            Some(json!({
                "category": common.category,
                "from": unit_json(from),
                "to": unit_json(to),
                "path": common.path()
            }))
        })
        .collect();

    let text: String = CATALOG
        .common_conversions()
        .iter()
        .filter_map(|common| {
            let (from, to) = common.resolve(&CATALOG)?;
            Some(format!("- {} → {} ({})\n", from.symbol, to.symbol, common.path()))
        })
        .collect();

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "conversions": entries
    }))
}

fn render_page(site: &Site, args: &JsonValue) -> ToolResult {
    let path = required_str("render_page", args, "path")?;
    if !path.starts_with('/') {
        return Err(UnitrefError::invalid_route(path).into());
    }

    let page = site.render(path);
    Ok(json!({
        "content": [{ "type": "text", "text": page.markdown }],
        "path": page.path,
        "redirected_from": page.redirected_from,
        "canonical_url": page.canonical_url,
        "seo": page.seo,
        "schema": page.schema
    }))
}

// ========== Argument helpers ==========

fn optional_str<'a>(args: &'a JsonValue, name: &str) -> Option<&'a str> {
    args.get(name).and_then(JsonValue::as_str)
}

fn required_str<'a>(tool: &str, args: &'a JsonValue, name: &str) -> Result<&'a str, UnitrefError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Err(UnitrefError::arg_missing(tool, name)),
        Some(value) => value
            .as_str()
            .ok_or_else(|| UnitrefError::arg_type(tool, name, "string")),
    }
}

/// Numbers may arrive as JSON numbers or as typed text
fn number_arg(tool: &str, args: &JsonValue, name: &str) -> Result<f64, UnitrefError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Err(UnitrefError::arg_missing(tool, name)),
        Some(JsonValue::Number(n)) => n
            .as_f64()
            .ok_or_else(|| UnitrefError::arg_type(tool, name, "number")),
        Some(JsonValue::String(s)) => Ok(parse_value(s)?),
        Some(_) => Err(UnitrefError::arg_type(tool, name, "number")),
    }
}

fn category_arg(tool: &str, args: &JsonValue) -> Result<CategoryId, UnitrefError> {
    let id = required_str(tool, args, "category")?;
    CategoryId::parse(id).ok_or_else(|| UnitrefError::unknown_category(id))
}

fn unit_pair(tool: &str, args: &JsonValue) -> Result<(&'static Unit, &'static Unit), UnitrefError> {
    let category = required_str(tool, args, "category")?;
    let from = required_str(tool, args, "from")?;
    let to = required_str(tool, args, "to")?;
    let (_, from) = CATALOG.require_unit(category, from)?;
    let (_, to) = CATALOG.require_unit(category, to)?;
    Ok((from, to))
}

fn unit_json(unit: &Unit) -> JsonValue {
    json!({
        "id": unit.id,
        "name": unit.name,
        "symbol": unit.symbol
    })
}

/// JSON has no NaN or infinities
fn finite_or_null(value: f64) -> JsonValue {
    if value.is_finite() {
        json!(value)
    } else {
        JsonValue::Null
    }
}
