use std::path::PathBuf;

use crate::sitemap::SitemapOptions;

/// Pre-render options. Should be passed to [`prerender()`](crate::prerender()).
///
/// ## Examples
/// Default values:
/// ```rust
/// use prerender::BuildOptions;
///
/// let options = BuildOptions::default();
/// assert_eq!(options.output_dir, std::path::PathBuf::from("dist/public"));
/// assert_eq!(options.template_path, std::path::PathBuf::from("index.html"));
/// assert_eq!(options.article_route, "/articles/[slug]");
/// ```
/// Custom values:
/// ```rust
/// use prerender::{BuildOptions, SitemapOptions};
///
/// let options = BuildOptions {
///     base_url: Some("https://www.example.com".into()),
///     static_routes: vec!["/".into(), "/about".into()],
///     fallback_article_slugs: vec!["first-article".into()],
///     sitemap: SitemapOptions {
///         enabled: true,
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Base URL for the site, e.g. `https://example.com`.
    /// Used for canonical URLs through [`PageContext::canonical_url`](crate::route::PageContext::canonical_url) and for the sitemap.
    pub base_url: Option<String>,

    /// Directory the pages are written to. Default: `dist/public`
    pub output_dir: PathBuf,

    /// HTML shell every page is merged into. Default: `index.html`
    ///
    /// It is read once before any page is written. Keep it outside `output_dir`: the `/` page is written to
    /// `output_dir/index.html`, and a shell stored there would have no outlet left on the next run.
    pub template_path: PathBuf,

    /// Glob matching the article files. Default: `content/articles/*.md`
    pub content_glob: String,

    /// Paths that are always rendered, in this order. Default: `["/"]`
    pub static_routes: Vec<String>,

    /// Article slugs to render when the articles cannot be loaded. Default: empty
    pub fallback_article_slugs: Vec<String>,

    /// Pattern article paths are built from, with the slug as its `slug` parameter. Default: `/articles/[slug]`
    pub article_route: String,

    /// Whether to render pages on all cores. Default: `false`
    pub parallel: bool,

    /// Options for sitemap generation. See [`SitemapOptions`] for configuration.
    pub sitemap: SitemapOptions,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            output_dir: "dist/public".into(),
            template_path: "index.html".into(),
            content_glob: "content/articles/*.md".to_string(),
            static_routes: vec!["/".to_string()],
            fallback_article_slugs: Vec::new(),
            article_route: "/articles/[slug]".to_string(),
            parallel: false,
            sitemap: SitemapOptions::default(),
        }
    }
}
