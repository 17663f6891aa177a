use log::warn;
use rustc_hash::FxHashSet;

use crate::content::ArticleStore;
use crate::routing::{normalize_path, PageParams, RoutePattern};

/// A path to pre-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRoute {
    pub path: String,
    /// Date of the article the path was derived from.
    pub article_date: Option<String>,
}

/// Lists every path to render: the static routes in order, then one path per article, newest first.
///
/// `articles` is `None` when the articles could not be loaded, `fallback_slugs` are used instead. Paths are
/// normalized and duplicates are dropped, keeping the first one.
pub fn enumerate_routes(
    static_routes: &[String],
    article_route: &RoutePattern,
    articles: Option<&ArticleStore>,
    fallback_slugs: &[String],
) -> Vec<PlannedRoute> {
    let article_routes: Vec<(&str, Option<&str>)> = match articles {
        Some(store) => store
            .all()
            .iter()
            .filter(|article| {
                if article.slug.is_empty() {
                    warn!(target: "routes", "{} has no slug and will not get a page", article.source.display());
                }
                !article.slug.is_empty()
            })
            .map(|article| (article.slug.as_str(), Some(article.date.as_str())))
            .collect(),
        None => fallback_slugs
            .iter()
            .map(|slug| (slug.as_str(), None))
            .collect(),
    };

    let mut seen = FxHashSet::default();
    let mut routes = Vec::with_capacity(static_routes.len() + article_routes.len());

    let statics = static_routes.iter().map(|route| (normalize_path(route), None));
    let derived = article_routes.into_iter().filter_map(|(slug, date)| {
        let params: PageParams = [("slug", slug)].into_iter().collect();
        match article_route.url(&params) {
            Some(path) => Some((normalize_path(&path), date.map(str::to_string))),
            None => {
                warn!(target: "routes", "`{}` has no `slug` parameter, cannot build a path for {}", article_route.raw(), slug);
                None
            }
        }
    });

    for (path, article_date) in statics.chain(derived) {
        if !seen.insert(path.clone()) {
            warn!(target: "routes", "{} is listed more than once, rendering it once", path);
            continue;
        }
        routes.push(PlannedRoute { path, article_date });
    }

    routes
}
