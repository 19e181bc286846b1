//! unitref Site - The unit conversion reference site
//!
//! Resolves request paths to pages, builds page models from the catalog
//! and renders them to markdown together with SEO metadata and JSON-LD.

mod converter;
mod page;
mod render;
mod route;
mod schema;
mod seo;

pub use converter::{UnitConverter, EMPTY_RESULT};
pub use page::{
    CategoryPage, ConversionPage, HomePage, HowTo, Link, LinkList, Page, Sidebar, SidebarEntry,
    SidebarGroup, UnitDescription,
};
pub use render::Renderer;
pub use route::{Resolution, Route, Router};
pub use schema::script_tag;
pub use seo::SeoMeta;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use unitref_core::UnitrefError;

/// Redirects followed before giving up and serving the home page
const MAX_REDIRECTS: usize = 4;

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    origin: String,
}

impl SiteConfig {
    /// Origin used for canonical URLs and structured data, e.g.
    /// "https://unitref.example". A trailing slash is dropped.
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        SiteConfig {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

/// A page rendered for a request path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    /// Path of the page actually served
    pub path: String,
    /// Requested path, when it redirected elsewhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<String>,
    pub markdown: String,
    pub seo: SeoMeta,
    pub canonical_url: String,
    pub schema: Vec<Value>,
}

/// Main site engine
pub struct Site {
    config: SiteConfig,
    router: Router,
}

impl Site {
    pub fn new(config: SiteConfig) -> Result<Self, UnitrefError> {
        Ok(Site {
            config,
            router: Router::new()?,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        self.router.resolve(path)
    }

    pub fn page(&self, route: &Route) -> Page {
        Page::build(&self.config, route)
    }

    /// Resolve a path, follow redirects and render the resulting page
    pub fn render(&self, path: &str) -> RenderedPage {
        let mut route = None;
        let mut redirected = false;
        let mut current = path.to_string();
        for _ in 0..MAX_REDIRECTS {
            match self.resolve(&current) {
                Resolution::Page(r) => {
                    route = Some(r);
                    break;
                }
                Resolution::Redirect(target) => {
                    redirected = true;
                    current = target;
                }
            }
        }
        let route = route.unwrap_or_else(|| {
            warn!(path, "redirect limit reached, serving home page");
            Route::Home
        });

        let page = self.page(&route);
        let served = route.path();
        let seo = page.seo().clone();
        RenderedPage {
            redirected_from: redirected.then(|| path.to_string()),
            markdown: Renderer::new().render(&page),
            canonical_url: seo.canonical_url(self.config.origin()),
            schema: page.schema().to_vec(),
            seo,
            path: served,
        }
    }
}
