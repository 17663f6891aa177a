use maud::html;
use prerender::route::prelude::*;

use crate::layout::{cta, layout, page_hero, Seo};

pub struct PracticeAreas;

struct Service {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
}

const FLAGSHIP: Service = Service {
    title: "ליווי עסקאות נדל״ן",
    subtitle: "מהבדיקה הראשונה ועד הרישום בטאבו",
    description: "רכישה או מכירה של דירה, מגרש או נכס מסחרי. בדיקה משפטית ותכנונית, משא ומתן על החוזה, דיווחי מס וליווי עד המסירה.",
};

const SERVICES: [Service; 3] = [
    Service {
        title: "ייעוץ להשקעות",
        subtitle: "בארץ ובחו״ל",
        description: "בחינת השקעות נדל״ן, כולל השקעות בגאורגיה, מהזווית המשפטית והמיסויית.",
    },
    Service {
        title: "בדיקת נאותות",
        subtitle: "לפני שחותמים",
        description: "בדיקה יסודית של הנכס, הזכויות בו והמצב התכנוני, כדי שלא יהיו הפתעות אחרי החתימה.",
    },
    Service {
        title: "התחדשות עירונית",
        subtitle: "ייצוג דיירים",
        description: "ליווי דיירים בפרויקטים של תמ״א 38 ופינוי בינוי, מול היזם ועד קבלת הדירה החדשה.",
    },
];

impl Route for PracticeAreas {
    fn route_raw(&self) -> &str {
        "/practice-areas"
    }

    fn render(&self, ctx: &mut PageContext) -> RenderResult {
        layout(
            html! {
                (page_hero("תחומי עיסוק", "שני עולמות, מומחיות אחת", Some("משפט ונדל״ן, מאותו שולחן.")))

                section.flagship {
                    div.container {
                        h2 { (FLAGSHIP.title) }
                        p.subtitle { (FLAGSHIP.subtitle) }
                        p { (FLAGSHIP.description) }
                    }
                }

                section.services {
                    div.container {
                        h2 { "עוד דרכים שאני יכול לעזור" }
                        div.service-grid {
                            @for service in &SERVICES {
                                div.service-card {
                                    h3 { (service.title) }
                                    p.subtitle { (service.subtitle) }
                                    p { (service.description) }
                                }
                            }
                        }
                    }
                }

                (cta())
            },
            ctx,
            Some(
                Seo::new(
                    "תחומי עיסוק",
                    "ליווי עסקאות נדל״ן, ייעוץ להשקעות בארץ ובחו״ל, בדיקות נאותות וייצוג דיירים בהתחדשות עירונית.",
                )
                .with_breadcrumb("תחומי עיסוק", "/practice-areas"),
            ),
        )
        .into()
    }
}
