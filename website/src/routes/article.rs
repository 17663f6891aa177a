use maud::{html, PreEscaped};
use prerender::route::prelude::*;
use serde_json::json;

use super::articles::article_card;
use crate::layout::{format_date, layout, Seo};
use crate::site::{BASE_URL, SITE_NAME};

pub struct ArticlePage;

impl Route for ArticlePage {
    fn route_raw(&self) -> &str {
        "/articles/[slug]"
    }

    fn render(&self, ctx: &mut PageContext) -> RenderResult {
        let content = ctx.content;
        let article = ctx
            .param("slug")
            .filter(|slug| !slug.is_empty())
            .and_then(|slug| content.by_slug(slug));

        let Some(article) = article else {
            return layout(
                html! {
                    section.not-found dir="rtl" {
                        h1 { "המאמר לא נמצא" }
                        p { "המאמר שחיפשת לא קיים או הוסר." }
                        a.link-arrow href="/articles" { "חזרה למאמרים" }
                    }
                },
                ctx,
                Some(Seo {
                    noindex: true,
                    ..Seo::new("המאמר לא נמצא", "המאמר שחיפשת לא קיים או הוסר.")
                }),
            )
            .into();
        };

        let related = content.related(&article.slug, 3);
        let path = format!("/articles/{}", article.slug);

        let mut json_ld = json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": article.title,
            "description": article.excerpt,
            "datePublished": article.date,
            "articleSection": article.category,
            "author": { "@type": "Person", "name": SITE_NAME },
            "publisher": { "@type": "Organization", "name": SITE_NAME, "url": BASE_URL },
        });
        if let Some(image) = &article.image {
            json_ld["image"] = json!(image);
        }

        let seo = Seo {
            image: article.image.clone(),
            json_ld: Some(json_ld),
            ..Seo::new(article.title.clone(), article.excerpt.clone())
        }
        .with_breadcrumb("מאמרים", "/articles")
        .push_breadcrumb(article.title.clone(), path);

        layout(
            html! {
                section.article-header {
                    div.container {
                        nav.breadcrumb aria-label="פירורי לחם" {
                            a href="/articles" { "כל המאמרים" }
                            span { (article.category) }
                        }
                        span.category { (article.category) }
                        h1 { (article.title) }
                        div.article-meta {
                            time datetime=(article.date) { (format_date(&article.date)) }
                            span { (article.read_time) }
                            span { (SITE_NAME) }
                        }
                    }
                }

                article.article-content {
                    (PreEscaped(article.render()))
                }

                aside.author-bio {
                    h4 { (SITE_NAME) }
                    p { "עורך דין ויזם נדל״ן. 13+ שנים בשטח, 1,300+ עסקאות." }
                }

                section.cta {
                    h3 { "רוצה לדעת אם אני מתאים לך?" }
                    p { "שיחת אפיון קצרה של 20 דקות, בלי התחייבות, רק כדי להבין אם אני יכול לעזור." }
                    a.btn.btn-gold href="/contact" { "לשיחת אפיון, בלי התחייבות" }
                }

                @if !related.is_empty() {
                    section.related {
                        h3 { "מאמרים נוספים שיעניינו אותך" }
                        div.article-grid {
                            @for other in &related {
                                (article_card(other))
                            }
                        }
                    }
                }
            },
            ctx,
            Some(seo),
        )
        .into()
    }
}
