/// Recognized header fields of an article document. Every field is optional, unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub read_time: Option<String>,
    pub featured: bool,
    pub image: Option<String>,
}

impl FrontMatter {
    /// Parses `key: value` lines. Lines without a colon are skipped, so this never fails.
    pub fn parse(block: &str) -> Self {
        let mut front_matter = FrontMatter::default();
        let mut readtime_lowercase = None;

        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            let value = unquote(value.trim()).to_string();
            match key.trim() {
                "id" => front_matter.id = Some(value),
                "slug" => front_matter.slug = Some(value),
                "title" => front_matter.title = Some(value),
                "excerpt" => front_matter.excerpt = Some(value),
                "category" => front_matter.category = Some(value),
                "date" => front_matter.date = Some(value),
                "readTime" => front_matter.read_time = Some(value),
                "readtime" => readtime_lowercase = Some(value),
                "featured" => front_matter.featured = value == "true",
                "image" => front_matter.image = Some(value),
                _ => {}
            }
        }

        if front_matter.read_time.as_deref().is_none_or(str::is_empty) {
            front_matter.read_time = readtime_lowercase.or(front_matter.read_time);
        }

        front_matter
    }
}

/// Splits a document into its header block and body.
///
/// The header block must start on the first line with `---` and end with a `---` line. Without one, the
/// whole document is the body.
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let Some(rest) = raw
        .strip_prefix("---\r\n")
        .or_else(|| raw.strip_prefix("---\n"))
    else {
        return (None, raw);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let block = rest[..offset].trim_end_matches(['\r', '\n']);
            let body = &rest[offset + line.len()..];
            return (Some(block), body);
        }
        offset += line.len();
    }

    (None, raw)
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        let (block, body) = split_front_matter("---\ntitle: Hello\n---\n# Body\n");

        assert_eq!(block, Some("title: Hello"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_front_matter_crlf() {
        let (block, body) = split_front_matter("---\r\nslug: a\r\ndate: 2026-01-01\r\n---\r\nBody");

        assert_eq!(block, Some("slug: a\r\ndate: 2026-01-01"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_missing_header_block_is_all_body() {
        let raw = "# Just a heading\n\nSome text";
        assert_eq!(split_front_matter(raw), (None, raw));

        // An unterminated block is not a header block either.
        let raw = "---\ntitle: x\nno closing line";
        assert_eq!(split_front_matter(raw), (None, raw));
    }

    #[test]
    fn test_empty_header_block() {
        let (block, body) = split_front_matter("---\n---\nBody");
        assert_eq!(block, Some(""));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_fields() {
        let front_matter = FrontMatter::parse(
            "id: 7\nslug: test-1\ntitle: \"Hello: World\"\ncategory: 'נדל״ן'\ndate: 2026-01-01\nfeatured: true\nimage: /images/a.jpg",
        );

        assert_eq!(front_matter.id.as_deref(), Some("7"));
        assert_eq!(front_matter.slug.as_deref(), Some("test-1"));
        assert_eq!(front_matter.title.as_deref(), Some("Hello: World"));
        assert_eq!(front_matter.category.as_deref(), Some("נדל״ן"));
        assert_eq!(front_matter.date.as_deref(), Some("2026-01-01"));
        assert!(front_matter.featured);
        assert_eq!(front_matter.image.as_deref(), Some("/images/a.jpg"));
        assert_eq!(front_matter.excerpt, None);
    }

    #[test]
    fn test_featured_requires_literal_true() {
        for value in ["True", "yes", "1", "\"false\"", ""] {
            let front_matter = FrontMatter::parse(&format!("featured: {value}"));
            assert!(!front_matter.featured, "{value} should not be featured");
        }

        assert!(FrontMatter::parse("featured: \"true\"").featured);
    }

    #[test]
    fn test_read_time_variants() {
        assert_eq!(
            FrontMatter::parse("readtime: 4 דקות").read_time.as_deref(),
            Some("4 דקות")
        );
        assert_eq!(
            FrontMatter::parse("readtime: 4\nreadTime: 6").read_time.as_deref(),
            Some("6")
        );
        assert_eq!(
            FrontMatter::parse("readTime:\nreadtime: 3").read_time.as_deref(),
            Some("3")
        );
    }

    #[test]
    fn test_lines_without_colon_are_ignored() {
        let front_matter = FrontMatter::parse("just text\n  \ntitle: ok");
        assert_eq!(front_matter.title.as_deref(), Some("ok"));
    }

    #[test]
    fn test_single_quote_is_not_unquoted() {
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("'a\""), "'a\"");
    }
}
