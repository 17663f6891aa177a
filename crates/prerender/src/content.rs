//! Loading and querying the articles of the website.
//!
//! Articles are Markdown files with a small `key: value` header block. They are parsed once by
//! [`ArticleStore::load`] and then only read, both to enumerate the article routes and by the pages
//! themselves through [`PageContext::content`](crate::route::PageContext::content).
//!
//! ## Example
//! ```rust
//! use prerender::content::{Article, ArticleStore};
//!
//! let store = ArticleStore::from_articles(vec![
//!     Article::parse("---\nslug: older\ndate: 2025-12-01\n---\nBody", "older.md"),
//!     Article::parse("---\nslug: newer\ndate: 2026-02-01\n---\nBody", "newer.md"),
//! ]);
//!
//! assert_eq!(store.all()[0].slug, "newer");
//! ```
use std::path::{Path, PathBuf};

use glob::glob as glob_fs;
use log::{debug, error, warn};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::errors::ContentError;

mod excerpt;
mod frontmatter;
mod markdown;

pub use excerpt::auto_excerpt;
pub use frontmatter::{split_front_matter, FrontMatter};
pub use markdown::render_markdown;

/// Used when an article does not declare its read time.
pub const DEFAULT_READ_TIME: &str = "5 דקות קריאה";

/// A parsed article document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    /// ISO-8601 date, compared as a string.
    pub date: String,
    pub read_time: String,
    pub featured: bool,
    pub image: Option<String>,
    /// Raw Markdown body, without the header block.
    pub body: String,
    #[serde(skip)]
    pub source: PathBuf,
}

impl Article {
    /// Parses a document. Missing or malformed header fields fall back to their defaults, this never fails.
    pub fn parse(raw: &str, source: impl Into<PathBuf>) -> Self {
        let (block, body) = split_front_matter(raw);
        let front_matter = block.map(FrontMatter::parse).unwrap_or_default();

        let excerpt = match front_matter.excerpt {
            Some(excerpt) if !excerpt.is_empty() => excerpt,
            _ => auto_excerpt(body),
        };

        Article {
            id: front_matter.id.unwrap_or_default(),
            slug: front_matter.slug.unwrap_or_default(),
            title: front_matter.title.unwrap_or_default(),
            excerpt,
            category: front_matter.category.unwrap_or_default(),
            date: front_matter.date.unwrap_or_default(),
            read_time: front_matter
                .read_time
                .filter(|read_time| !read_time.is_empty())
                .unwrap_or_else(|| DEFAULT_READ_TIME.to_string()),
            featured: front_matter.featured,
            image: front_matter.image.filter(|image| !image.is_empty()),
            body: body.to_string(),
            source: source.into(),
        }
    }

    /// Renders the body to HTML.
    pub fn render(&self) -> String {
        render_markdown(&self.body)
    }
}

/// The articles of the website, newest first.
///
/// Documents that could not be read, or whose slug was already taken, are left out and kept in
/// [`ArticleStore::skipped`] so one bad file never hides the rest.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
    skipped: Vec<ContentError>,
}

impl ArticleStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads every Markdown file matching `pattern`.
    ///
    /// Only an invalid pattern fails the whole load. Unreadable entries are logged and skipped.
    pub fn load(pattern: &str) -> Result<Self, ContentError> {
        let entries = glob_fs(pattern).map_err(|source| ContentError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut articles = Vec::new();
        let mut skipped = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(err) => {
                    error!(target: "content", "Skipping unreadable entry: {}", err);
                    skipped.push(ContentError::from(err));
                    continue;
                }
            };

            if path.extension().is_none_or(|extension| extension != "md") {
                warn!(target: "content", "Skipping {}, only Markdown files are supported", path.display());
                continue;
            }

            match load_article(&path) {
                Ok(article) => articles.push(article),
                Err(err) => {
                    error!(target: "content", "Skipping article: {}", err);
                    skipped.push(err);
                }
            }
        }

        debug!(target: "content", "Loaded {} articles from {}", articles.len(), pattern);

        let mut store = Self::from_articles(articles);
        skipped.append(&mut store.skipped);
        store.skipped = skipped;

        Ok(store)
    }

    /// Builds a store from already parsed articles.
    ///
    /// When two articles declare the same slug the first one wins, the other is dropped and reported
    /// as a [`ContentError::DuplicateSlug`].
    pub fn from_articles(articles: Vec<Article>) -> Self {
        let mut seen: FxHashMap<String, PathBuf> = FxHashMap::default();
        let mut kept = Vec::with_capacity(articles.len());
        let mut skipped = Vec::new();

        for article in articles {
            if article.slug.is_empty() {
                kept.push(article);
                continue;
            }

            if let Some(first) = seen.get(&article.slug) {
                let err = ContentError::DuplicateSlug {
                    slug: article.slug.clone(),
                    first: first.display().to_string(),
                    second: article.source.display().to_string(),
                };
                error!(target: "content", "{}", err);
                skipped.push(err);
                continue;
            }

            seen.insert(article.slug.clone(), article.source.clone());
            kept.push(article);
        }

        // Stable, articles sharing a date keep their input order.
        kept.sort_by(|a, b| b.date.cmp(&a.date));

        Self {
            articles: kept,
            skipped,
        }
    }

    /// Documents left out of the store, in the order they were found.
    pub fn skipped(&self) -> &[ContentError] {
        &self.skipped
    }

    /// All articles, newest first.
    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.slug == slug)
    }

    /// Other articles of the same category. For an unknown slug, the latest articles.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&Article> {
        let Some(current) = self.by_slug(slug) else {
            return self.articles.iter().take(limit).collect();
        };

        self.articles
            .iter()
            .filter(|article| article.slug != slug && article.category == current.category)
            .take(limit)
            .collect()
    }

    /// Featured articles, completed with the latest non-featured ones when there are fewer than `limit`.
    pub fn featured(&self, limit: usize) -> Vec<&Article> {
        let featured = self.articles.iter().filter(|article| article.featured);
        let rest = self.articles.iter().filter(|article| !article.featured);

        featured.chain(rest).take(limit).collect()
    }

    /// Distinct non-empty categories, in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for article in &self.articles {
            if !article.category.is_empty() && !categories.contains(&article.category.as_str()) {
                categories.push(&article.category);
            }
        }
        categories
    }
}

fn load_article(path: &Path) -> Result<Article, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Article::parse(&raw, path))
}
