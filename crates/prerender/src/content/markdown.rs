use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use rustc_hash::FxHashSet;
use slug::slugify;

use crate::escape::escape_attr;

struct Slugger {
    generated_slugs: FxHashSet<String>,
}

impl Slugger {
    fn new() -> Self {
        Self {
            generated_slugs: FxHashSet::default(),
        }
    }

    fn slugify(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut slug = base.clone();
        let mut counter = 1;
        while self.generated_slugs.contains(&slug) {
            slug = format!("{}-{}", base, counter);
            counter += 1;
        }
        self.generated_slugs.insert(slug.clone());
        slug
    }
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn get_text_from_events(events: &[Event]) -> String {
    let mut text = String::new();

    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => continue,
        }
    }

    text
}

fn find_matching_heading_end(events: &[Event], start: usize) -> Option<usize> {
    events[start..]
        .iter()
        .position(|event| matches!(event, Event::End(TagEnd::Heading(_))))
        .map(|offset| start + offset)
}

fn heading_number(level: HeadingLevel) -> u8 {
    level as u8
}

/// Renders an article body to HTML.
///
/// Tables, strikethrough and task lists are enabled and raw HTML is kept. Headings get an `id` derived from
/// their text, made unique within the document, unless they declare one. Links to other sites open in a new
/// tab.
///
/// ## Example
/// ```rust
/// use prerender::content::render_markdown;
///
/// let html = render_markdown("## Intro\n\nSee [the law](https://www.gov.il).");
/// assert_eq!(
///     html,
///     "<h2 id=\"intro\">Intro</h2>\n<p>See <a href=\"https://www.gov.il\" target=\"_blank\" rel=\"noopener noreferrer\">the law</a>.</p>\n"
/// );
/// ```
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES,
    );

    let events: Vec<Event> = Parser::new_ext(content, options).collect();
    let mut slugger = Slugger::new();
    let mut external_links = Vec::new();
    let mut transformed = Vec::with_capacity(events.len());

    for (i, event) in events.iter().enumerate() {
        match event {
            Event::Start(Tag::Heading {
                level, id, classes, ..
            }) => {
                let heading_id = match id {
                    Some(id) => id.to_string(),
                    None => {
                        let text = find_matching_heading_end(&events, i)
                            .map(|end| get_text_from_events(&events[i + 1..end]))
                            .unwrap_or_default();
                        slugger.slugify(&text)
                    }
                };

                let mut html = format!("<h{} id=\"{}\"", heading_number(*level), escape_attr(&heading_id));
                if !classes.is_empty() {
                    let classes: Vec<&str> = classes.iter().map(|c| c.as_ref()).collect();
                    html.push_str(&format!(" class=\"{}\"", escape_attr(&classes.join(" "))));
                }
                html.push('>');
                transformed.push(Event::Html(html.into()));
            }
            Event::End(TagEnd::Heading(level)) => {
                transformed.push(Event::Html(format!("</h{}>\n", heading_number(*level)).into()));
            }
            Event::Start(Tag::Link {
                dest_url, title, ..
            }) => {
                let external = is_external(dest_url);
                external_links.push(external);

                if external {
                    let mut html = format!("<a href=\"{}\"", escape_attr(dest_url));
                    if !title.is_empty() {
                        html.push_str(&format!(" title=\"{}\"", escape_attr(title)));
                    }
                    html.push_str(" target=\"_blank\" rel=\"noopener noreferrer\">");
                    transformed.push(Event::Html(html.into()));
                } else {
                    transformed.push(event.clone());
                }
            }
            Event::End(TagEnd::Link) => {
                if external_links.pop().unwrap_or(false) {
                    transformed.push(Event::Html("</a>".into()));
                } else {
                    transformed.push(event.clone());
                }
            }
            _ => transformed.push(event.clone()),
        }
    }

    let mut html_output = String::with_capacity(content.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html_output, transformed.into_iter());
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_ids_are_unique() {
        let html = render_markdown("## Summary\n\n## Summary\n\n## Summary");

        assert!(html.contains("<h2 id=\"summary\">Summary</h2>"));
        assert!(html.contains("<h2 id=\"summary-1\">Summary</h2>"));
        assert!(html.contains("<h2 id=\"summary-2\">Summary</h2>"));
    }

    #[test]
    fn test_explicit_heading_id_is_kept() {
        let html = render_markdown("# Title {#custom .lead}");
        assert_eq!(html, "<h1 id=\"custom\" class=\"lead\">Title</h1>\n");
    }

    #[test]
    fn test_internal_links_are_untouched() {
        let html = render_markdown("[Contact](/contact)");
        assert_eq!(html, "<p><a href=\"/contact\">Contact</a></p>\n");
    }

    #[test]
    fn test_external_link_with_title() {
        let html = render_markdown("[Nevo](https://www.nevo.co.il \"Legal database\")");
        assert_eq!(
            html,
            "<p><a href=\"https://www.nevo.co.il\" title=\"Legal database\" target=\"_blank\" rel=\"noopener noreferrer\">Nevo</a></p>\n"
        );
    }

    #[test]
    fn test_tables_and_strikethrough() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~");

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn test_task_list() {
        let html = render_markdown("- [x] Signed\n- [ ] Registered");
        assert!(html.contains("checked=\"\""));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = render_markdown("<div class=\"note\">Note</div>");
        assert!(html.starts_with("<div class=\"note\">Note</div>"));
    }
}
