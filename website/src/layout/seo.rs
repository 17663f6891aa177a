use prerender::route::PageContext;
use serde_json::json;

use crate::site::{BASE_URL, DEFAULT_DESCRIPTION, DEFAULT_IMAGE, SITE_NAME};

pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

pub struct Seo {
    pub title: String,
    pub description: String,
    /// Path of the page, e.g. `/about`. Defaults to the path being rendered.
    pub path: Option<String>,
    pub image: Option<String>,
    pub json_ld: Option<serde_json::Value>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub noindex: bool,
}

impl Default for Seo {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            path: None,
            image: None,
            json_ld: None,
            breadcrumbs: Vec::new(),
            noindex: false,
        }
    }
}

impl Seo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Breadcrumbs from the home page to this page.
    pub fn with_breadcrumb(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.breadcrumbs = vec![Breadcrumb::new("דף הבית", "/")];
        self.push_breadcrumb(name, path)
    }

    /// Appends a level below the current breadcrumbs. The page path follows the last one.
    pub fn push_breadcrumb(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        self.breadcrumbs.push(Breadcrumb::new(name, path.clone()));
        self.path = Some(path);
        self
    }

    /// Declares the page's tags on the head of the render.
    pub fn apply(&self, ctx: &mut PageContext) {
        let path = self.path.as_deref().unwrap_or(ctx.current_path);
        let full_title = if path == "/" {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, SITE_NAME)
        };
        let canonical = format!("{}{}", base_url(ctx), path);
        let image = self.image.as_deref().unwrap_or(DEFAULT_IMAGE);

        let head = &mut *ctx.head;
        head.title(&full_title);
        head.meta(&[("name", "description"), ("content", &self.description)]);
        if self.noindex {
            head.meta(&[("name", "robots"), ("content", "noindex")]);
        }
        head.link(&[("rel", "canonical"), ("href", &canonical)]);

        head.meta(&[("property", "og:title"), ("content", &full_title)]);
        head.meta(&[("property", "og:description"), ("content", &self.description)]);
        head.meta(&[("property", "og:url"), ("content", &canonical)]);
        head.meta(&[("property", "og:image"), ("content", image)]);

        head.meta(&[("name", "twitter:title"), ("content", &full_title)]);
        head.meta(&[("name", "twitter:description"), ("content", &self.description)]);
        head.meta(&[("name", "twitter:image"), ("content", image)]);

        if let Some(json_ld) = &self.json_ld {
            head.json_ld(json_ld);
        }

        if !self.breadcrumbs.is_empty() {
            let base = base_url(ctx);
            let items: Vec<_> = self
                .breadcrumbs
                .iter()
                .enumerate()
                .map(|(i, crumb)| {
                    json!({
                        "@type": "ListItem",
                        "position": i + 1,
                        "name": crumb.name,
                        "item": format!("{}{}", base, crumb.path),
                    })
                })
                .collect();

            ctx.head.json_ld(&json!({
                "@context": "https://schema.org",
                "@type": "BreadcrumbList",
                "itemListElement": items,
            }));
        }
    }
}

fn base_url(ctx: &PageContext) -> String {
    ctx.base_url
        .as_deref()
        .unwrap_or(BASE_URL)
        .trim_end_matches('/')
        .to_string()
}
