//! Markdown renderer
//!
//! Renders page models to markdown: headings, link lists and the
//! conversion table.

use crate::page::{CategoryPage, ConversionPage, HomePage, Link, LinkList, Page, Sidebar};
use crate::converter::UnitConverter;

/// Page renderer
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a page followed by its sidebar
    pub fn render(&self, page: &Page) -> String {
        let mut output = match page {
            Page::Home(p) => self.render_home(p),
            Page::Category(p) => self.render_category(p),
            Page::Conversion(p) => self.render_conversion(p),
        };
        self.render_sidebar(&mut output, page.sidebar());
        output
    }

    fn render_home(&self, page: &HomePage) -> String {
        let mut output = String::new();
        output.push_str("# Unit Converter\n\n");
        self.render_converter(&mut output, &page.converter);

        output.push_str("## Browse All Converters\n\n");
        self.render_links(&mut output, &page.categories);

        output.push_str("## Common Conversions\n\n");
        self.render_links(&mut output, &page.common);

        output.push_str("_Fast, accurate unit conversions, all calculations done locally_\n\n");
        output
    }

    fn render_category(&self, page: &CategoryPage) -> String {
        let mut output = String::new();
        self.render_breadcrumbs(&mut output, &page.breadcrumbs);
        output.push_str(&format!("# {}\n\n", page.heading));
        self.render_converter(&mut output, &page.converter);

        output.push_str(&format!("## {}\n\n", page.popular_heading));
        self.render_links(&mut output, &page.popular);

        output.push_str(&format!("## {}\n\n", page.complete_heading));
        self.render_links(&mut output, &page.complete);
        output.push_str(&format!("{}\n\n", page.total_note));
        output
    }

    fn render_conversion(&self, page: &ConversionPage) -> String {
        let mut output = String::new();
        self.render_breadcrumbs(&mut output, &page.breadcrumbs);
        output.push_str(&format!("# {}\n\n", page.heading));

        output.push_str(&format!("{} {}.\n\n", page.intro, self.link(&page.reverse)));
        self.render_converter(&mut output, &page.converter);

        for description in &page.descriptions {
            output.push_str(&format!("## {}\n\n", description.name));
            output.push_str(&format!("**Definition:** {}\n\n", description.definition));
            if let Some(history) = description.history {
                output.push_str(&format!("**History/origin:** {}\n\n", history));
            }
            if let Some(current_use) = description.current_use {
                output.push_str(&format!("**Current use:** {}\n\n", current_use));
            }
        }

        // Conversion table
        output.push_str(&format!("## {}\n\n", page.table_heading));
        output.push_str(&format!("| {} | {} |\n", page.table_columns[0], page.table_columns[1]));
        output.push_str("|------|------|\n");
        for row in &page.table {
            output.push_str(&format!(
                "| {} {} | {} {} |\n",
                row.from, page.from.symbol, row.to, page.to.symbol
            ));
        }
        output.push('\n');

        output.push_str(&format!("## {}\n\n", page.how_to.heading));
        for line in &page.how_to.lines {
            output.push_str(&format!("{}\n\n", line));
        }

        for list in &page.other_units {
            self.render_link_list(&mut output, list);
        }
        self.render_link_list(&mut output, &page.related);
        output
    }

    fn render_converter(&self, output: &mut String, converter: &UnitConverter) {
        output.push_str(&format!("> **{}**\n\n", converter.formula()));
    }

    fn render_breadcrumbs(&self, output: &mut String, crumbs: &[Link]) {
        let Some((current, parents)) = crumbs.split_last() else {
            return;
        };
        for crumb in parents {
            output.push_str(&self.link(crumb));
            output.push_str(" / ");
        }
        output.push_str(&current.label);
        output.push_str("\n\n");
    }

    fn render_link_list(&self, output: &mut String, list: &LinkList) {
        output.push_str(&format!("## {}\n\n", list.heading));
        self.render_links(output, &list.links);
    }

    fn render_links(&self, output: &mut String, links: &[Link]) {
        for link in links {
            output.push_str(&format!("- {}\n", self.link(link)));
        }
        output.push('\n');
    }

    fn render_sidebar(&self, output: &mut String, sidebar: &Sidebar) {
        output.push_str("---\n\n");
        for group in &sidebar.groups {
            output.push_str(&format!("**{}**\n\n", group.label));
            for entry in &group.entries {
                if entry.active {
                    output.push_str(&format!("- **{}**\n", entry.link.label));
                } else {
                    output.push_str(&format!("- {}\n", self.link(&entry.link)));
                }
            }
            output.push('\n');
        }
    }

    fn link(&self, link: &Link) -> String {
        match &link.title {
            Some(title) => format!("[{}]({} \"{}\")", link.label, link.path, title),
            None => format!("[{}]({})", link.label, link.path),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitref_units::{CategoryId, CATALOG};
    use crate::route::Route;
    use crate::SiteConfig;

    fn render(route: &Route) -> String {
        let config = SiteConfig::new("https://unitref.example");
        Renderer::new().render(&Page::build(&config, route))
    }

    #[test]
    fn test_render_home() {
        let md = render(&Route::Home);
        assert!(md.starts_with("# Unit Converter\n\n> **1 m = 0.001 km**"));
        assert!(md.contains("- [📏 Length](/length)\n"));
        assert!(md.contains("## Common Conversions"));
        assert!(md.contains("**Engineering Converters**"));
    }

    #[test]
    fn test_render_category() {
        let md = render(&Route::Category(CategoryId::Temperature));
        assert!(md.starts_with("[Home](/) / Temperature Conversion\n\n# 🌡️ Temperature Converter"));
        assert!(md.contains("Total: 12 temperature conversions available"));
        assert!(md.contains("- **Temperature**\n"));
    }

    #[test]
    fn test_render_conversion_table() {
        let route = Route::conversion(
            CategoryId::Length,
            CATALOG.unit(CategoryId::Length, "meter").unwrap(),
            CATALOG.unit(CategoryId::Length, "centimeter").unwrap(),
        );
        let md = render(&route);
        assert!(md.contains("| Meter [m] | Centimeter [cm] |\n|------|------|\n| 0.01 m | 1 cm |\n"));
        assert!(md.contains("| 1000 m | 100,000 cm |\n"));
        assert!(md.contains("convert meter [m] to centimeter [cm], or [vice versa](/length/centimeter-to-meter).\n"));
        assert!(md.contains("**Definition:** A meter (symbol: m)"));
        assert!(md.contains("1 cm = 0.01 m"));
    }
}
