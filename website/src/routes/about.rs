use maud::html;
use prerender::route::prelude::*;

use crate::layout::{cta, layout, page_hero, Seo};

pub struct About;

const MILESTONES: [(&str, &str); 4] = [
    ("2012", "הסמכה לעריכת דין והתמחות בדיני מקרקעין."),
    ("2015", "הקמת המשרד העצמאי וליווי עסקאות נדל״ן למגורים."),
    ("2019", "הרחבת הפעילות להשקעות נדל״ן בחו״ל, בדגש על גאורגיה."),
    ("2024", "1,000 עסקאות שלוו מהבדיקה הראשונה ועד הרישום."),
];

impl Route for About {
    fn route_raw(&self) -> &str {
        "/about"
    }

    fn render(&self, ctx: &mut PageContext) -> RenderResult {
        layout(
            html! {
                (page_hero("אודות", "עורך דין שמבין נדל״ן מבפנים", Some("13+ שנים בשטח, 1,300+ עסקאות, ויזם נדל״ן בעצמי.")))

                section.about-professional {
                    div.container {
                        (Motion::new(MotionTag::H2)
                            .prop("whileInView", "{ opacity: 1, y: 0 }")
                            .prop("viewport", "{ once: true }")
                            .children("הדרך המקצועית"))
                        p { "אני עורך דין ויזם נדל״ן. את רוב הקריירה שלי העברתי בליווי עסקאות מקרקעין: רכישות, מכירות, פרויקטים של התחדשות עירונית והשקעות מעבר לים." }
                        p { "בגלל שאני משקיע בעצמי, אני מכיר את העסקה גם מהצד של מי שמוציא את הכסף. זה משנה את השאלות שאני שואל, ואת הדברים שאני לא מוכן לוותר עליהם בחוזה." }
                    }
                }

                section.milestones {
                    div.container {
                        h2 { "אבני דרך" }
                        ol {
                            @for (year, text) in MILESTONES {
                                li {
                                    span.year { (year) }
                                    p { (text) }
                                }
                            }
                        }
                    }
                }

                section.about-approach {
                    div.container {
                        h2 { "הגישה שלי" }
                        p { "בגובה העיניים, בלי סיפורי סבתא. אני מסביר מה הסיכון, כמה הוא עולה, ומה אפשר לעשות כדי להקטין אותו, ומשאיר לכם את ההחלטה." }
                    }
                }

                (cta())
            },
            ctx,
            Some(
                Seo::new(
                    "אודות",
                    "עו״ד יונתן בן דוד, עורך דין ויזם נדל״ן עם 13+ שנות ניסיון ו-1,300+ עסקאות. ליווי אישי מהבדיקה הראשונה ועד הרישום.",
                )
                .with_breadcrumb("אודות", "/about"),
            ),
        )
        .into()
    }
}
