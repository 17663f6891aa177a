use maud::html;
use prerender::route::prelude::*;
use serde_json::json;

use super::articles::article_card;
use crate::layout::{cta, layout, Seo};
use crate::site::{ADDRESS, BASE_URL, DEFAULT_DESCRIPTION, DEFAULT_IMAGE, EMAIL, PHONE, SITE_NAME};

pub struct Index;

const STATS: [(&str, &str); 4] = [
    ("13+", "שנות ניסיון"),
    ("1,300+", "עסקאות"),
    ("2", "מדינות פעילות"),
    ("אישי", "ליווי מקצה לקצה"),
];

const PROCESS: [(&str, &str); 5] = [
    ("שיחת אפיון", "20 דקות כדי להבין מה אתם צריכים, ואם אני האדם הנכון לזה."),
    ("בדיקת נאותות", "בדיקה משפטית ותכנונית של הנכס לפני שמתחייבים לשקל אחד."),
    ("משא ומתן", "ניסוח החוזה והגנה על האינטרסים שלכם מול הצד השני."),
    ("חתימה ורישום", "ליווי החתימה, דיווחי המס והרישום בטאבו."),
    ("אחרי העסקה", "זמינות גם אחרי המסירה, כי עסקה לא נגמרת בחתימה."),
];

impl Route for Index {
    fn route_raw(&self) -> &str {
        "/"
    }

    fn render(&self, ctx: &mut PageContext) -> RenderResult {
        let content = ctx.content;
        let latest = content.featured(3);

        let hero = html! {
            (Motion::new(MotionTag::H1)
                .class("hero-title")
                .prop("initial", "{ opacity: 0, y: 16 }")
                .prop("animate", "{ opacity: 1, y: 0 }")
                .prop("transition", "{ duration: 0.7, delay: 0.3 }")
                .content(html! { "עסקת נדל״ן היא לא עוד חוזה." br; "היא ההחלטה הכלכלית הגדולה שלכם." }))
            (Motion::new(MotionTag::P)
                .class("hero-subtitle")
                .prop("initial", "{ opacity: 0, y: 12 }")
                .prop("animate", "{ opacity: 1, y: 0 }")
                .content(html! { "עורך דין ויזם נדל״ן. ליווי משפטי אישי בעסקאות בארץ ובחו״ל." }))
            (Motion::new(MotionTag::Div)
                .class("hero-actions")
                .prop("initial", "{ opacity: 0 }")
                .prop("animate", "{ opacity: 1 }")
                .content(html! {
                    a.btn.btn-gold href="/contact" { "לשיחת אפיון" }
                    a.btn.btn-outline href="#process" { "איך זה עובד" }
                }))
        };

        let json_ld = json!({
            "@context": "https://schema.org",
            "@type": "LegalService",
            "name": SITE_NAME,
            "url": BASE_URL,
            "image": DEFAULT_IMAGE,
            "telephone": PHONE,
            "email": EMAIL,
            "address": {
                "@type": "PostalAddress",
                "streetAddress": ADDRESS,
                "addressCountry": "IL",
            },
        });

        layout(
            html! {
                section.hero {
                    div.container { (hero) }
                }

                section.stats {
                    div.container {
                        @for (value, label) in STATS {
                            div.stat {
                                span.stat-value { (value) }
                                span.stat-label { (label) }
                            }
                        }
                    }
                }

                section.process id="process" {
                    div.container {
                        h2 { "איך אני עובד, 5 שלבים" }
                        ol {
                            @for (i, (title, text)) in PROCESS.iter().enumerate() {
                                li {
                                    span.step-number { (i + 1) }
                                    h3 { (title) }
                                    p { (text) }
                                }
                            }
                        }
                    }
                }

                section.practice-teaser {
                    div.container {
                        h2 { "תחומי עיסוק" }
                        p { "שני תחומי ליבה, מומחיות אחת: להגן על האינטרסים שלכם." }
                        a.link-arrow href="/practice-areas" { "לכל תחומי העיסוק" }
                    }
                }

                @if !latest.is_empty() {
                    section.latest-articles {
                        div.container {
                            h2 { "מאמרים אחרונים" }
                            p { "תובנות מקצועיות מעולם הנדל״ן והמשפט, ישירות מהשטח." }
                            div.article-grid {
                                @for article in &latest {
                                    (article_card(article))
                                }
                            }
                            a.link-arrow href="/articles" { "לכל המאמרים" }
                        }
                    }
                }

                (cta())
            },
            ctx,
            Some(Seo {
                path: Some("/".to_string()),
                json_ld: Some(json_ld),
                ..Seo::new(SITE_NAME, DEFAULT_DESCRIPTION)
            }),
        )
        .into()
    }
}
