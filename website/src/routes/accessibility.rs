use maud::html;
use prerender::route::prelude::*;

use super::legal::{legal_document, LegalSection};
use crate::layout::{layout, page_hero, Seo};

pub struct Accessibility;

const INTRO: &[&str] = &[
    "אנו רואים חשיבות רבה במתן שירות שוויוני לכלל הגולשים, ופועלים להנגשת האתר לאנשים עם מוגבלות.",
];

const SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "תקנים ודרישות",
        intro: Some("האתר הונגש בהתאם להוראות הדין הבאות:"),
        items: &[
            "חוק שוויון זכויות לאנשים עם מוגבלות, התשנ\"ח-1998",
            "תקנות שוויון זכויות לאנשים עם מוגבלות (התאמות נגישות לשירות), התשע\"ג-2013",
            "תקן ישראלי ת\"י 5568, ברמה AA",
        ],
    },
    LegalSection {
        title: "התאמות שבוצעו באתר",
        intro: None,
        items: &[
            "מבנה סמנטי: שימוש נכון ברכיבי HTML וכותרות מובנות.",
            "תגיות ARIA: תיאור רכיבים אינטראקטיביים לקוראי מסך.",
            "ניגודיות צבעים: יחס ניגודיות מספק בין טקסט לרקע.",
            "טקסט חלופי: תיאור לכל תמונה משמעותית.",
            "ניווט מקלדת: כל הרכיבים נגישים מהמקלדת, כולל קישור דילוג לתוכן הראשי.",
            "עיצוב רספונסיבי: התאמה לכל גודל מסך.",
        ],
    },
    LegalSection {
        title: "מגבלות ידועות",
        intro: Some("ייתכן שחלק מהתכנים שמקורם בצד שלישי אינם נגישים במלואם. אנו פועלים לשיפור מתמיד."),
        items: &[],
    },
    LegalSection {
        title: "פניות בנושא נגישות",
        intro: Some("רכז הנגישות הוא עו\"ד יונתן בן דוד. נשמח לקבל פניות ולטפל בהן תוך 14 ימי עסקים."),
        items: &[],
    },
];

impl Route for Accessibility {
    fn route_raw(&self) -> &str {
        "/accessibility"
    }

    fn render(&self, ctx: &mut PageContext) -> RenderResult {
        layout(
            html! {
                (page_hero("Accessibility", "הצהרת נגישות", None))
                (legal_document(INTRO, SECTIONS))
            },
            ctx,
            Some(
                Seo::new(
                    "הצהרת נגישות",
                    "הצהרת הנגישות של אתר עו״ד יונתן בן דוד. מידע על התאמות נגישות, מגבלות ידועות, ודרכי פנייה בנושא נגישות.",
                )
                .with_breadcrumb("הצהרת נגישות", "/accessibility"),
            ),
        )
        .into()
    }
}
