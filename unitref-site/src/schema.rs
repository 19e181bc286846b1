//! JSON-LD structured data

use serde_json::{json, Value};
use unitref_units::{conversion_factor, convert, CategoryInfo, Unit};
use crate::route::{category_path, conversion_path};

const CONTEXT: &str = "https://schema.org";

/// `WebSite` entry with a search action
pub fn website(origin: &str) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "WebSite",
        "name": "Unit Converter",
        "description": "Free online unit converter for length, temperature, area, volume, weight, time, speed, energy, and more.",
        "url": origin,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/?q={{search_term_string}}", origin),
            "query-input": "required name=search_term_string"
        }
    })
}

/// `WebPage` entry for a category page
pub fn category(origin: &str, info: &CategoryInfo) -> Value {
    let lower = info.label.to_lowercase();
    let name = format!("{} Converter", info.label);
    let url = format!("{}{}", origin, category_path(info.id));
    json!({
        "@context": CONTEXT,
        "@type": "WebPage",
        "name": name,
        "description": format!(
            "Convert {lower} units instantly with our free online {lower} converter."
        ),
        "url": url,
        "breadcrumb": breadcrumbs(&[
            ("Home", origin.to_string()),
            (name.as_str(), url.clone()),
        ])
    })
}

/// `WebPage`, `FAQPage` and `HowTo` entries for a conversion page
pub fn conversion(origin: &str, info: &CategoryInfo, from: &Unit, to: &Unit) -> Vec<Value> {
    let factor = conversion_factor(from, to);
    let example = format!("{:.6}", 10.0 * convert(1.0, from, to));
    let url = format!("{}{}", origin, conversion_path(info.id, from, to));
    let from_lower = from.name.to_lowercase();
    let to_lower = to.name.to_lowercase();
    let category_crumb = format!("{} Converter", info.label);
    let pair_crumb = format!("{} to {}", from.symbol, to.symbol);

    let page = json!({
        "@context": CONTEXT,
        "@type": "WebPage",
        "name": format!("Convert {} to {}", from.name, to.name),
        "description": format!(
            "Convert {} ({}) to {} ({}). 1 {} = {} {}.",
            from.name, from.symbol, to.name, to.symbol, from.symbol, factor, to.symbol
        ),
        "url": url,
        "breadcrumb": breadcrumbs(&[
            ("Home", origin.to_string()),
            (category_crumb.as_str(), format!("{}{}", origin, category_path(info.id))),
            (pair_crumb.as_str(), url.clone()),
        ])
    });

    let faq = json!({
        "@context": CONTEXT,
        "@type": "FAQPage",
        "mainEntity": [
            question(
                &format!("How many {}s are in a {}?", to_lower, from_lower),
                &format!(
                    "1 {} ({}) is equal to {} {} ({}).",
                    from.name, from.symbol, factor, to.name, to.symbol
                ),
            ),
            question(
                &format!("How do I convert {} to {}?", from.name, to.name),
                &format!(
                    "To convert {} to {}, multiply the value in {} by {}. For example, 10 {} = 10 × {} = {} {}.",
                    from.name, to.name, from_lower, factor, from.symbol, factor, example, to.symbol
                ),
            ),
            question(
                &format!("What is the formula to convert {} to {}?", from.symbol, to.symbol),
                &format!("The formula is: {} = {} × {}", to.symbol, from.symbol, factor),
            ),
        ]
    });

    let how_to = json!({
        "@context": CONTEXT,
        "@type": "HowTo",
        "name": format!("How to Convert {} to {}", from.name, to.name),
        "description": format!(
            "Step-by-step guide to convert {} ({}) to {} ({})",
            from.name, from.symbol, to.name, to.symbol
        ),
        "step": [
            step("Know the conversion factor", &format!("1 {} = {} {}", from.symbol, factor, to.symbol)),
            step("Multiply your value", &format!("Multiply your {} value by {}", from_lower, factor)),
            step("Get the result", &format!("The result is your value in {}", to_lower)),
        ]
    });

    vec![page, faq, how_to]
}

/// Embed entries in a `<script type="application/ld+json">` element
pub fn script_tag(entries: &[Value]) -> String {
    let body = Value::Array(entries.to_vec()).to_string();
    // keep the payload from closing the element early
    format!(
        "<script type=\"application/ld+json\">{}</script>",
        body.replace("</", "<\\/")
    )
}

fn breadcrumbs(items: &[(&str, String)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, (name, item))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": item
            })
        })
        .collect();
    json!({
        "@type": "BreadcrumbList",
        "itemListElement": elements
    })
}

fn question(name: &str, answer: &str) -> Value {
    json!({
        "@type": "Question",
        "name": name,
        "acceptedAnswer": {
            "@type": "Answer",
            "text": answer
        }
    })
}

fn step(name: &str, text: &str) -> Value {
    json!({
        "@type": "HowToStep",
        "name": name,
        "text": text
    })
}
