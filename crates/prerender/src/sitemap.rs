use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::errors::EmitError;
use crate::escape::escape_xml;

/// Options for sitemap generation.
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    /// Whether to generate a sitemap. Requires [`BuildOptions::base_url`](crate::BuildOptions::base_url). Default: `false`
    pub enabled: bool,
    /// The filename of the sitemap, inside the output directory. Default: `"sitemap.xml"`
    pub filename: String,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            filename: "sitemap.xml".to_string(),
        }
    }
}

/// Represents a single URL entry in the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<String>,
}

impl SitemapEntry {
    /// Builds the entry for a route. `date` becomes `lastmod` only when it is a `YYYY-MM-DD` date.
    pub fn new(base_url: &str, route: &str, date: Option<&str>) -> Self {
        Self {
            loc: format!("{}{}", base_url.trim_end_matches('/'), route),
            lastmod: date
                .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
                .map(|date| date.format("%Y-%m-%d").to_string()),
        }
    }

    fn to_xml(&self) -> String {
        let mut xml = String::from("<url>");
        xml.push_str(&format!("<loc>{}</loc>", escape_xml(&self.loc)));

        if let Some(ref lastmod) = self.lastmod {
            xml.push_str(&format!("<lastmod>{}</lastmod>", lastmod));
        }

        xml.push_str("</url>");
        xml
    }
}

/// Writes the sitemap. Returns the path written, or `None` when there was nothing to write.
pub fn generate_sitemap(
    entries: Vec<SitemapEntry>,
    output_dir: &Path,
    options: &SitemapOptions,
) -> Result<Option<PathBuf>, EmitError> {
    if !options.enabled || entries.is_empty() {
        return Ok(None);
    }

    // Sort entries by URL for consistency
    let mut sorted_entries = entries;
    sorted_entries.sort_by(|a, b| a.loc.cmp(&b.loc));

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">");
    for entry in &sorted_entries {
        xml.push_str(&entry.to_xml());
    }
    xml.push_str("</urlset>");

    let sitemap_path = output_dir.join(&options.filename);
    fs::write(&sitemap_path, xml).map_err(|source| EmitError::Io {
        path: sitemap_path.clone(),
        source,
    })?;

    log::info!(
        target: "sitemap",
        "Generated sitemap with {} URLs at {}",
        sorted_entries.len(),
        sitemap_path.display()
    );

    Ok(Some(sitemap_path))
}
