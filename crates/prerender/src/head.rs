//! Per-render collection of `<head>` tags.
//!
//! Pages declare their title, meta tags, links and structured data on the [`Head`] found in
//! [`PageContext::head`](crate::route::PageContext::head). A new `Head` is created for every rendered
//! route and dropped afterwards, so nothing declared for one page can end up in another.
//!
//! Later declarations override earlier ones the way nested head managers behave in client
//! applications: the last title wins, and a `meta` with the same `name`, `property`, `http-equiv` or
//! `charset` replaces the previous one in place. Canonical links are unique too. Everything else is
//! appended.
//!
//! ## Example
//! ```rust
//! use prerender::head::Head;
//!
//! let mut head = Head::new();
//! head.title("Home");
//! head.meta(&[("name", "description"), ("content", "First")]);
//! head.meta(&[("name", "description"), ("content", "Second")]);
//!
//! assert_eq!(
//!     head.to_tags(),
//!     vec![
//!         "<title>Home</title>".to_string(),
//!         r#"<meta name="description" content="Second">"#.to_string(),
//!     ]
//! );
//! ```
use crate::escape::{escape_text, write_attrs};

type Attrs = Vec<(String, String)>;

const META_KEYS: [&str; 4] = ["name", "property", "http-equiv", "charset"];

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScriptTag {
    attrs: Attrs,
    body: String,
}

#[derive(Debug, Default, Clone)]
pub struct Head {
    title: Option<String>,
    metas: Vec<Attrs>,
    links: Vec<Attrs>,
    scripts: Vec<ScriptTag>,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn meta(&mut self, attrs: &[(&str, &str)]) {
        let attrs = owned(attrs);
        match meta_key(&attrs) {
            Some(key) => {
                if let Some(existing) = self
                    .metas
                    .iter_mut()
                    .find(|meta| meta_key(meta).as_ref() == Some(&key))
                {
                    *existing = attrs;
                } else {
                    self.metas.push(attrs);
                }
            }
            None => self.metas.push(attrs),
        }
    }

    pub fn link(&mut self, attrs: &[(&str, &str)]) {
        let attrs = owned(attrs);
        if is_canonical(&attrs)
            && let Some(existing) = self.links.iter_mut().find(|link| is_canonical(link))
        {
            *existing = attrs;
            return;
        }
        self.links.push(attrs);
    }

    /// Adds a `<script>` tag. The body is written as-is.
    pub fn script(&mut self, attrs: &[(&str, &str)], body: impl Into<String>) {
        self.scripts.push(ScriptTag {
            attrs: owned(attrs),
            body: body.into(),
        });
    }

    /// Adds an `application/ld+json` structured data block.
    pub fn json_ld(&mut self, value: &serde_json::Value) {
        // `<` never appears unescaped, so the payload cannot close the script element early.
        let body = value.to_string().replace('<', "\\u003c");
        self.script(&[("type", "application/ld+json")], body);
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether a `robots` meta tag asks crawlers not to index the page.
    pub fn is_noindex(&self) -> bool {
        self.metas.iter().any(|meta| {
            attr(meta, "name").is_some_and(|name| name.eq_ignore_ascii_case("robots"))
                && attr(meta, "content").is_some_and(|content| content.contains("noindex"))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.metas.is_empty() && self.links.is_empty() && self.scripts.is_empty()
    }

    /// Serializes the collected tags, grouped as title, metas, links, scripts.
    pub fn to_tags(&self) -> Vec<String> {
        let mut tags = Vec::with_capacity(
            self.metas.len() + self.links.len() + self.scripts.len() + 1,
        );

        if let Some(title) = &self.title {
            tags.push(format!("<title>{}</title>", escape_text(title)));
        }

        for meta in &self.metas {
            let mut tag = String::from("<meta");
            write_attrs(&mut tag, meta);
            tag.push('>');
            tags.push(tag);
        }

        for link in &self.links {
            let mut tag = String::from("<link");
            write_attrs(&mut tag, link);
            tag.push('>');
            tags.push(tag);
        }

        for script in &self.scripts {
            let mut tag = String::from("<script");
            write_attrs(&mut tag, &script.attrs);
            tag.push('>');
            tag.push_str(&script.body);
            tag.push_str("</script>");
            tags.push(tag);
        }

        tags
    }
}

fn owned(attrs: &[(&str, &str)]) -> Attrs {
    attrs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn attr<'a>(attrs: &'a Attrs, name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn meta_key(attrs: &Attrs) -> Option<(&'static str, String)> {
    META_KEYS.iter().find_map(|key| match *key {
        // There is only ever one charset declaration, whatever its value.
        "charset" => attr(attrs, key).map(|_| ("charset", String::new())),
        _ => attr(attrs, key).map(|value| (*key, value.to_string())),
    })
}

fn is_canonical(attrs: &Attrs) -> bool {
    attr(attrs, "rel").is_some_and(|rel| rel.eq_ignore_ascii_case("canonical"))
}
