use maud::{html, Markup};
use prerender::route::prelude::*;

use crate::layout::{cta, format_date, layout, page_hero, Seo};

pub struct Articles;

impl Route for Articles {
    fn route_raw(&self) -> &str {
        "/articles"
    }

    fn render(&self, ctx: &mut PageContext) -> RenderResult {
        let content = ctx.content;

        layout(
            html! {
                (page_hero("בלוג", "מאמרים ותובנות", Some("תובנות מקצועיות מעולם הנדל״ן והמשפט, ישירות מהשטח. בגובה העיניים.")))

                section.articles {
                    div.container {
                        @if content.is_empty() {
                            p.empty { "בקרוב יעלו כאן מאמרים." }
                        } @else {
                            // Every category is listed, filtering happens client side.
                            div.category-filter role="group" aria-label="סינון לפי קטגוריה" {
                                button.active type="button" data-category="all" { "הכל" }
                                @for category in content.categories() {
                                    button type="button" data-category=(category) { (category) }
                                }
                            }
                            div.article-grid {
                                @for article in content.all() {
                                    (article_card(article))
                                }
                            }
                        }
                    }
                }

                (cta())
            },
            ctx,
            Some(Seo::new(
                "מאמרים ותובנות",
                "מאמרים מקצועיים על עסקאות נדל״ן, מיסוי, השקעות בחו״ל ובדיקות נאותות, מאת עו״ד יונתן בן דוד.",
            )
            .with_breadcrumb("מאמרים", "/articles")),
        )
        .into()
    }
}

pub fn article_card(article: &Article) -> Markup {
    html! {
        a.article-card href={ "/articles/" (article.slug) } data-category=(article.category) {
            div.card-meta {
                time datetime=(article.date) { (format_date(&article.date)) }
                span.category { (article.category) }
            }
            h3 { (article.title) }
            p.excerpt { (article.excerpt) }
            div.card-footer {
                span.read-time { (article.read_time) }
                span.read-more { "קרא עוד" }
            }
        }
    }
}
