//! The HTML shell every page is merged into.
//!
//! The shell is the client build's `index.html`. It must contain the head marker pair and the body outlet
//! exactly once each:
//!
//! ```html
//! <head>
//!   <!-- SEO:DYNAMIC:START default tags for the client -->
//!   <title>Default</title>
//!   <!-- SEO:DYNAMIC:END -->
//! </head>
//! <body><div id="root"><!--SSR-OUTLET--></div></body>
//! ```
//!
//! Everything between the head markers is replaced by the tags of the rendered page, and the outlet is replaced
//! by its body. The shell is split once when loaded, so a page can contain text that looks like a marker
//! without affecting the merge.
use std::path::Path;

use crate::errors::TemplateError;
use crate::route::RenderedPage;

pub const HEAD_START_MARKER: &str = "<!-- SEO:DYNAMIC:START";
pub const HEAD_END_MARKER: &str = "<!-- SEO:DYNAMIC:END -->";
pub const BODY_OUTLET: &str = "<!--SSR-OUTLET-->";

const COMMENT_END: &str = "-->";
const HEAD_INDENT: &str = "\n    ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Head,
    Body,
}

#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&source)
    }

    /// Validates the markers and splits the shell around them.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let head_start = find_unique(source, HEAD_START_MARKER)?;
        let head_end = find_unique(source, HEAD_END_MARKER)?;
        let outlet = find_unique(source, BODY_OUTLET)?;

        let start_marker_len = source[head_start..]
            .find(COMMENT_END)
            .map(|offset| offset + COMMENT_END.len())
            .ok_or_else(|| TemplateError::MarkerOrder {
                reason: "the head start marker is never closed".to_string(),
            })?;

        if head_end < head_start + start_marker_len {
            return Err(TemplateError::MarkerOrder {
                reason: "the head end marker comes before the head start marker".to_string(),
            });
        }

        let head_span = head_start..head_end + HEAD_END_MARKER.len();
        if head_span.contains(&outlet) {
            return Err(TemplateError::MarkerOrder {
                reason: "the body outlet is inside the head markers".to_string(),
            });
        }

        let mut spans = [
            (head_span.start, head_span.end, Segment::Head),
            (outlet, outlet + BODY_OUTLET.len(), Segment::Body),
        ];
        spans.sort_by_key(|(start, _, _)| *start);

        let mut segments = Vec::with_capacity(5);
        let mut cursor = 0;
        for (start, end, segment) in spans {
            segments.push(Segment::Literal(source[cursor..start].to_string()));
            segments.push(segment);
            cursor = end;
        }
        segments.push(Segment::Literal(source[cursor..].to_string()));

        Ok(Self { segments })
    }

    /// Produces the final document for a rendered page.
    pub fn merge(&self, page: &RenderedPage) -> String {
        let head = format_head(&page.head);
        let capacity = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(literal) => literal.len(),
                Segment::Head => head.len(),
                Segment::Body => page.body.len(),
            })
            .sum();

        let mut html = String::with_capacity(capacity);
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => html.push_str(literal),
                Segment::Head => html.push_str(&head),
                Segment::Body => html.push_str(&page.body),
            }
        }
        html
    }
}

fn format_head(tags: &[String]) -> String {
    format!(
        "{HEAD_START_MARKER} {COMMENT_END}{HEAD_INDENT}{}{HEAD_INDENT}{HEAD_END_MARKER}",
        tags.join(HEAD_INDENT)
    )
}

fn find_unique(source: &str, marker: &'static str) -> Result<usize, TemplateError> {
    let mut positions = source.match_indices(marker).map(|(index, _)| index);
    let first = positions.next().ok_or(TemplateError::MissingMarker { marker })?;

    let extra = positions.count();
    if extra > 0 {
        return Err(TemplateError::DuplicateMarker {
            marker,
            count: extra + 1,
        });
    }

    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<!doctype html>\n<html lang=\"he\" dir=\"rtl\">\n  <head>\n    <meta charset=\"UTF-8\" />\n    <!-- SEO:DYNAMIC:START (replaced at build time) -->\n    <title>Default</title>\n    <!-- SEO:DYNAMIC:END -->\n  </head>\n  <body>\n    <div id=\"root\"><!--SSR-OUTLET--></div>\n  </body>\n</html>\n";

    fn page(head: &[&str], body: &str) -> RenderedPage {
        RenderedPage {
            route: "/".to_string(),
            body: body.to_string(),
            head: head.iter().map(|tag| tag.to_string()).collect(),
            is_fallback: false,
            noindex: false,
        }
    }

    #[test]
    fn test_merge_injects_head_and_body() {
        let template = Template::parse(TEMPLATE).unwrap();
        let html = template.merge(&page(
            &["<title>Home</title>", "<meta name=\"description\" content=\"d\">"],
            "<main>Hello</main>",
        ));

        assert_eq!(
            html,
            "<!doctype html>\n<html lang=\"he\" dir=\"rtl\">\n  <head>\n    <meta charset=\"UTF-8\" />\n    <!-- SEO:DYNAMIC:START -->\n    <title>Home</title>\n    <meta name=\"description\" content=\"d\">\n    <!-- SEO:DYNAMIC:END -->\n  </head>\n  <body>\n    <div id=\"root\"><main>Hello</main></div>\n  </body>\n</html>\n"
        );
        assert!(!html.contains(BODY_OUTLET));
        assert!(!html.contains("<title>Default</title>"));
        assert_eq!(html.matches(HEAD_START_MARKER).count(), 1);
        assert_eq!(html.matches(HEAD_END_MARKER).count(), 1);
    }

    #[test]
    fn test_empty_head() {
        let template = Template::parse(TEMPLATE).unwrap();
        let html = template.merge(&page(&[], ""));

        assert!(html.contains("<!-- SEO:DYNAMIC:START -->\n    \n    <!-- SEO:DYNAMIC:END -->"));
    }

    #[test]
    fn test_markers_in_page_are_not_rescanned() {
        let template = Template::parse(TEMPLATE).unwrap();
        let html = template.merge(&page(
            &["<title>T</title>"],
            "<pre><!--SSR-OUTLET--> <!-- SEO:DYNAMIC:START --></pre>",
        ));

        assert!(html.contains("<div id=\"root\"><pre><!--SSR-OUTLET--> <!-- SEO:DYNAMIC:START --></pre></div>"));
        assert!(html.contains("<title>T</title>"));
    }

    #[test]
    fn test_outlet_before_head_markers() {
        let template =
            Template::parse("<!--SSR-OUTLET-->|<!-- SEO:DYNAMIC:START --><!-- SEO:DYNAMIC:END -->|end").unwrap();
        let html = template.merge(&page(&["<title>T</title>"], "BODY"));

        assert_eq!(
            html,
            "BODY|<!-- SEO:DYNAMIC:START -->\n    <title>T</title>\n    <!-- SEO:DYNAMIC:END -->|end"
        );
    }

    #[test]
    fn test_missing_markers_fail() {
        let without_outlet = TEMPLATE.replace(BODY_OUTLET, "");
        assert!(matches!(
            Template::parse(&without_outlet),
            Err(TemplateError::MissingMarker { marker }) if marker == BODY_OUTLET
        ));

        let without_end = TEMPLATE.replace(HEAD_END_MARKER, "");
        assert!(matches!(
            Template::parse(&without_end),
            Err(TemplateError::MissingMarker { marker }) if marker == HEAD_END_MARKER
        ));

        let without_start = TEMPLATE.replace("<!-- SEO:DYNAMIC:START (replaced at build time) -->", "");
        assert!(matches!(
            Template::parse(&without_start),
            Err(TemplateError::MissingMarker { marker }) if marker == HEAD_START_MARKER
        ));
    }

    #[test]
    fn test_duplicate_marker_fails() {
        let doubled = TEMPLATE.replace(BODY_OUTLET, "<!--SSR-OUTLET--><!--SSR-OUTLET-->");

        assert!(matches!(
            Template::parse(&doubled),
            Err(TemplateError::DuplicateMarker { count: 2, .. })
        ));
    }

    #[test]
    fn test_misplaced_markers_fail() {
        assert!(matches!(
            Template::parse("<!-- SEO:DYNAMIC:END --><!-- SEO:DYNAMIC:START --><!--SSR-OUTLET-->"),
            Err(TemplateError::MarkerOrder { .. })
        ));
        assert!(matches!(
            Template::parse("<!-- SEO:DYNAMIC:START --><!--SSR-OUTLET--><!-- SEO:DYNAMIC:END -->"),
            Err(TemplateError::MarkerOrder { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(&dir.path().join("index.html")).unwrap_err();

        assert!(matches!(err, TemplateError::Read { .. }));
    }
}
