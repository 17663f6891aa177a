use maud::{html, Markup};
use prerender::route::{PageContext, RenderResult};

mod footer;
mod header;
mod seo;

pub use footer::footer;
pub use header::header;
pub use seo::Seo;

/// Wraps a page in the site chrome and declares its head tags.
///
/// The document shell comes from the HTML template, so this only produces what goes in the body outlet.
pub fn layout(main: Markup, ctx: &mut PageContext, seo: Option<Seo>) -> impl Into<RenderResult> {
    seo.unwrap_or_default().apply(ctx);

    html! {
        div.site dir="rtl" {
            (header(ctx.current_path))
            main id="main-content" {
                (main)
            }
            (footer())
        }
    }
}

/// Hero section shared by the inner pages.
pub fn page_hero(eyebrow: &str, title: &str, subtitle: Option<&str>) -> Markup {
    html! {
        section.page-hero {
            div.container {
                span.eyebrow { (eyebrow) }
                h1 { (title) }
                @if let Some(subtitle) = subtitle {
                    p.subtitle { (subtitle) }
                }
                div.gold-divider {}
            }
        }
    }
}

/// Closing call to action used across pages.
pub fn cta() -> Markup {
    html! {
        section.cta {
            div.container {
                h2 { "רוצה לדעת אם אני מתאים לך?" }
                p { "שיחת אפיון קצרה של 20 דקות, בלי התחייבות, רק כדי להבין אם אני יכול לעזור." }
                a.btn.btn-gold href="/contact" { "לשיחת אפיון, בלי התחייבות" }
            }
        }
    }
}

/// Formats a `YYYY-MM-DD` date the way Hebrew readers expect, e.g. `15 בינואר 2026`.
///
/// Anything else is returned unchanged.
pub fn format_date(date: &str) -> String {
    use chrono::{Datelike, NaiveDate};

    const MONTHS: [&str; 12] = [
        "בינואר",
        "בפברואר",
        "במרץ",
        "באפריל",
        "במאי",
        "ביוני",
        "ביולי",
        "באוגוסט",
        "בספטמבר",
        "באוקטובר",
        "בנובמבר",
        "בדצמבר",
    ];

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!(
            "{} {} {}",
            parsed.day(),
            MONTHS[parsed.month0() as usize],
            parsed.year()
        ),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-01-15"), "15 בינואר 2026");
        assert_eq!(format_date("2025-12-01"), "1 בדצמבר 2025");
        assert_eq!(format_date("soon"), "soon");
    }
}
