//! Path routing
//!
//! Three kinds of pages exist: `/`, `/{category}` and
//! `/{category}/{from}-to-{to}`. Anything else redirects to the closest
//! page that does exist.

use regex::Regex;
use tracing::debug;
use unitref_core::UnitrefError;
use unitref_units::{CategoryId, Unit, CATALOG};

/// Conversion slug, e.g. "centimeter-to-inch"
const SLUG_PATTERN: &str = r"^(.+)-to-(.+)$";

/// A page of the site
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Category(CategoryId),
    Conversion {
        category: CategoryId,
        from: &'static Unit,
        to: &'static Unit,
    },
}

impl Route {
    /// Route of the conversion page between two units
    pub fn conversion(category: CategoryId, from: &'static Unit, to: &'static Unit) -> Self {
        Route::Conversion { category, from, to }
    }

    /// Canonical path of this page
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Category(id) => category_path(*id),
            Route::Conversion { category, from, to } => conversion_path(*category, from, to),
        }
    }

    pub fn category(&self) -> Option<CategoryId> {
        match self {
            Route::Home => None,
            Route::Category(id) | Route::Conversion { category: id, .. } => Some(*id),
        }
    }
}

pub fn category_path(category: CategoryId) -> String {
    format!("/{}", category)
}

pub fn conversion_path(category: CategoryId, from: &Unit, to: &Unit) -> String {
    format!("/{}/{}-to-{}", category, from.id, to.id)
}

/// Outcome of resolving a request path
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Page(Route),
    Redirect(String),
}

/// Maps request paths onto routes
pub struct Router {
    slug: Regex,
}

impl Router {
    pub fn new() -> Result<Self, UnitrefError> {
        let slug = Regex::new(SLUG_PATTERN).map_err(|e| {
            UnitrefError::internal(format!("Invalid conversion slug pattern: {}", e))
        })?;
        Ok(Router { slug })
    }

    /// Resolve a request path. Query strings and fragments are ignored.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Resolution::Page(Route::Home),
            [category] => match CategoryId::parse(category) {
                Some(id) => Resolution::Page(Route::Category(id)),
                None => redirect(path, "/".to_string(), "unknown category"),
            },
            [category, slug] => self.resolve_conversion(path, category, slug),
            _ => redirect(path, "/".to_string(), "too many path segments"),
        }
    }

    fn resolve_conversion(&self, path: &str, category: &str, slug: &str) -> Resolution {
        let Some(id) = CategoryId::parse(category) else {
            return redirect(path, "/".to_string(), "unknown category");
        };

        let Some(caps) = self.slug.captures(slug) else {
            return redirect(path, category_path(id), "malformed conversion slug");
        };

        let from = caps.get(1).and_then(|m| CATALOG.unit(id, m.as_str()));
        let to = caps.get(2).and_then(|m| CATALOG.unit(id, m.as_str()));
        match (from, to) {
            (Some(from), Some(to)) => Resolution::Page(Route::conversion(id, from, to)),
            _ => redirect(path, category_path(id), "unknown unit"),
        }
    }
}

fn redirect(path: &str, target: String, reason: &str) -> Resolution {
    debug!(path, target = %target, reason, "redirecting");
    Resolution::Redirect(target)
}
