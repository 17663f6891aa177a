//! Core traits and structs to define the pages of your website.
//!
//! Every page implements [`Route`]. Routes are matched against requested paths by a [`Router`], which falls
//! back to a dedicated not-found route when nothing matches, and rendered with [`render_route`].
use std::panic::{self, AssertUnwindSafe};

use crate::content::ArticleStore;
use crate::errors::RenderError;
use crate::head::Head;
use crate::routing::{normalize_path, PageParams, RoutePattern, RouteType};

/// Represents the result of a page render, can be either text or an error.
///
/// Typically used through the [`Into<RenderResult>`](std::convert::Into) implementations for common types.
///
/// ## Example
/// ```rust
/// use prerender::route::prelude::*;
///
/// pub struct Index;
///
/// impl Route for Index {
///     fn route_raw(&self) -> &str {
///         "/"
///     }
///
///     fn render(&self, _ctx: &mut PageContext) -> RenderResult {
///         "<h1>Hello, world!</h1>".into()
///     }
/// }
/// ```
pub enum RenderResult {
    Text(String),
    Err(Box<dyn std::error::Error>),
}

impl<T> From<Result<T, Box<dyn std::error::Error>>> for RenderResult
where
    T: Into<RenderResult>,
{
    fn from(val: Result<T, Box<dyn std::error::Error>>) -> Self {
        match val {
            Ok(s) => s.into(),
            Err(e) => RenderResult::Err(e),
        }
    }
}

impl From<String> for RenderResult {
    fn from(val: String) -> Self {
        RenderResult::Text(val)
    }
}

impl From<&str> for RenderResult {
    fn from(val: &str) -> Self {
        RenderResult::Text(val.to_string())
    }
}

/// Allows to access the route parameters, the articles and the head of the page in a [`Route`] implementation.
///
/// A new context, with a new [`Head`], is created for every rendered path.
pub struct PageContext<'a> {
    pub params: &'a PageParams,
    pub content: &'a ArticleStore,
    pub head: &'a mut Head,
    /// The path being rendered, e.g. `/articles/my-article`.
    pub current_path: &'a str,
    /// The base URL as defined in [`BuildOptions::base_url`](crate::BuildOptions::base_url)
    pub base_url: &'a Option<String>,
}

impl<'a> PageContext<'a> {
    pub fn param(&self, key: &str) -> Option<&'a str> {
        self.params.get(key)
    }

    /// Returns the canonical URL for the current page. If [`BuildOptions::base_url`](crate::BuildOptions::base_url) is not set, this will return `None`.
    pub fn canonical_url(&self) -> Option<String> {
        self.base_url.as_ref().map(|base| {
            let base = base.trim_end_matches('/');
            if self.current_path == "/" {
                format!("{}/", base)
            } else {
                format!("{}{}", base, self.current_path)
            }
        })
    }
}

/// Must be implemented for every page of your website.
///
/// `route_raw` returns the pattern the page answers to, either a static path like `/about` or a pattern with
/// parameters like `/articles/[slug]`. Parameters capture a single path segment.
pub trait Route: Sync + Send {
    fn route_raw(&self) -> &str;
    fn render(&self, ctx: &mut PageContext) -> RenderResult;
}

/// The route chosen for a path.
pub struct Resolved<'a> {
    pub route: &'a dyn Route,
    pub params: PageParams,
    /// Whether no route matched and the not-found route was used instead.
    pub is_fallback: bool,
}

/// Routing table matching paths the same way the interactive site does.
///
/// Static routes are tried before dynamic ones, in the order they were given.
pub struct Router<'a> {
    routes: Vec<(RoutePattern, &'a dyn Route)>,
    not_found: &'a dyn Route,
}

impl<'a> Router<'a> {
    pub fn new(routes: &[&'a dyn Route], not_found: &'a dyn Route) -> Self {
        let mut routes: Vec<(RoutePattern, &'a dyn Route)> = routes
            .iter()
            .map(|route| (RoutePattern::parse(route.route_raw()), *route))
            .collect();

        // Stable, so declaration order is kept within each group.
        routes.sort_by_key(|(pattern, _)| pattern.route_type() == RouteType::Dynamic);

        Self { routes, not_found }
    }

    pub fn resolve(&self, path: &str) -> Resolved<'a> {
        let path = normalize_path(path);

        for (pattern, route) in &self.routes {
            if let Some(params) = pattern.matches(&path) {
                return Resolved {
                    route: *route,
                    params,
                    is_fallback: false,
                };
            }
        }

        Resolved {
            route: self.not_found,
            params: PageParams::default(),
            is_fallback: true,
        }
    }
}

/// The output of rendering one path, before it is merged into the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub route: String,
    pub body: String,
    /// Serialized head tags, grouped as title, metas, links, scripts.
    pub head: Vec<String>,
    /// Whether the page rendered the not-found route.
    pub is_fallback: bool,
    /// Whether the page asked crawlers not to index it.
    pub noindex: bool,
}

/// Renders a single path. Unknown paths render the router's not-found route.
///
/// Errors returned by the page and panics raised while rendering it are both turned into a [`RenderError`]
/// for this path only.
pub fn render_route(
    router: &Router,
    path: &str,
    content: &ArticleStore,
    base_url: &Option<String>,
) -> Result<RenderedPage, RenderError> {
    let current_path = normalize_path(path);
    let resolved = router.resolve(&current_path);

    let mut head = Head::new();
    head.meta(&[("name", "generator"), ("content", crate::GENERATOR)]);

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut ctx = PageContext {
            params: &resolved.params,
            content,
            head: &mut head,
            current_path: &current_path,
            base_url,
        };
        resolved.route.render(&mut ctx)
    }));

    let body = match result {
        Ok(RenderResult::Text(body)) => body,
        Ok(RenderResult::Err(e)) => {
            return Err(RenderError::Page {
                route: current_path,
                message: e.to_string(),
            });
        }
        Err(payload) => {
            return Err(RenderError::Panicked {
                route: current_path,
                message: panic_message(payload.as_ref()),
            });
        }
    };

    Ok(RenderedPage {
        noindex: head.is_noindex(),
        head: head.to_tags(),
        body,
        is_fallback: resolved.is_fallback,
        route: current_path,
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

pub mod prelude {
    //! Re-exports of the most commonly used types and traits for defining pages.
    pub use super::{PageContext, RenderResult, Route};
    pub use crate::content::{Article, ArticleStore};
    pub use crate::head::Head;
    pub use crate::motion::{pass_through, Motion, MotionTag};
    pub use crate::routing::PageParams;
}
