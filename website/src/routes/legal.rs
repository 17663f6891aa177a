use maud::{html, Markup};
use prerender::route::prelude::*;

use crate::layout::{layout, page_hero, Seo};
use crate::site::{ADDRESS, EMAIL, PHONE};

pub struct LegalSection {
    pub title: &'static str,
    pub intro: Option<&'static str>,
    pub items: &'static [&'static str],
}

/// Body of the legal pages: numbered sections followed by the contact details.
pub fn legal_document(intro: &[&str], sections: &[LegalSection]) -> Markup {
    html! {
        section.legal {
            div.container {
                div.intro {
                    @for paragraph in intro {
                        p { (paragraph) }
                    }
                }
                @for (i, section) in sections.iter().enumerate() {
                    div.legal-section {
                        h2 { (i + 1) ". " (section.title) }
                        @if let Some(intro) = section.intro {
                            p { (intro) }
                        }
                        @if !section.items.is_empty() {
                            ul {
                                @for item in section.items {
                                    li { (item) }
                                }
                            }
                        }
                    }
                }
                div.legal-contact {
                    h2 { "יצירת קשר" }
                    p { "דוא״ל: " a href={ "mailto:" (EMAIL) } { (EMAIL) } }
                    p { "טלפון: " a href={ "tel:" (PHONE) } { (PHONE) } }
                    p { "כתובת: " (ADDRESS) }
                }
            }
        }
    }
}

pub struct PrivacyPolicy;

const PRIVACY_INTRO: &[&str] = &[
    "ברוכים הבאים לאתר של יונתן בן דוד. מדיניות זו מתייחסת לאתר האינטרנט בכתובת www.bdyonatan.co.il, וכן לכל דפי הנחיתה והשירותים המופעלים תחת המותג \"יונתן בן דוד\".",
    "מטרת מסמך זה היא לפרט כיצד אנו אוספים, שומרים ומעבדים את המידע האישי שלכם, בהתאם לחוק הגנת הפרטיות, התשמ\"א-1981, ותיקון מס' 13 לחוק.",
];

const PRIVACY_SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "המידע שאנו אוספים",
        intro: Some("אנו אוספים רק מידע שנמסר לנו ביוזמתכם, ומידע טכני בסיסי על הגלישה:"),
        items: &[
            "פרטים שנמסרו בטופס יצירת הקשר: שם, טלפון, דוא״ל ותוכן הפנייה.",
            "מידע טכני כגון סוג הדפדפן, עמודים שנצפו וזמני ביקור, באמצעות עוגיות, בכפוף להסכמתכם.",
        ],
    },
    LegalSection {
        title: "השימוש במידע",
        intro: None,
        items: &[
            "מענה לפניות ותיאום שיחת אפיון.",
            "שיפור האתר והתכנים המוצגים בו.",
            "עמידה בחובות על פי דין.",
        ],
    },
    LegalSection {
        title: "עוגיות (Cookies)",
        intro: Some("עוגיות סטטיסטיקה ושיווק מופעלות רק לאחר הסכמה מפורשת בבאנר העוגיות. ניתן לשנות את הבחירה בכל עת."),
        items: &[],
    },
    LegalSection {
        title: "אבטחת מידע ושמירתו",
        intro: Some("המידע נשמר במערכות מאובטחות ונמחק כאשר אין בו עוד צורך, אלא אם הדין מחייב לשמור אותו."),
        items: &[],
    },
    LegalSection {
        title: "זכויותיכם",
        intro: Some("בהתאם לחוק, אתם רשאים לעיין במידע שנשמר עליכם, לבקש את תיקונו או את מחיקתו, בפנייה לפרטי הקשר שלהלן."),
        items: &[],
    },
];

impl Route for PrivacyPolicy {
    fn route_raw(&self) -> &str {
        "/privacy-policy"
    }

    fn render(&self, ctx: &mut PageContext) -> RenderResult {
        layout(
            html! {
                (page_hero("Privacy Policy", "מדיניות פרטיות", Some("עודכנה לאחרונה: פברואר 2026 | מותאמת להוראות חוק הגנת הפרטיות ותיקון 13")))
                (legal_document(PRIVACY_INTRO, PRIVACY_SECTIONS))
            },
            ctx,
            Some(
                Seo::new(
                    "מדיניות פרטיות",
                    "מדיניות הפרטיות של אתר עו״ד יונתן בן דוד. מידע על איסוף, שימוש ושמירת נתונים אישיים בהתאם לחוק הגנת הפרטיות.",
                )
                .with_breadcrumb("מדיניות פרטיות", "/privacy-policy"),
            ),
        )
        .into()
    }
}

pub struct TermsOfUse;

const TERMS_INTRO: &[&str] = &[
    "ברוכים הבאים לאתר www.bdyonatan.co.il (להלן: \"האתר\"). האתר מופעל ומנוהל על ידי עו\"ד יונתן בן דוד (להלן: \"המשרד\").",
    "תנאי שימוש אלה מסדירים את השימוש באתר, בתכניו ובשירותים הזמינים בו. הגלישה באתר ו/או השימוש בשירותיו מהווים הסכמה מלאה לתנאים אלה.",
];

const TERMS_SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "כללי",
        intro: Some("התנאים מנוסחים בלשון זכר מטעמי נוחות בלבד ופונים לכל המינים."),
        items: &[],
    },
    LegalSection {
        title: "הסרת אחריות: המידע באתר אינו מהווה ייעוץ משפטי",
        intro: Some("זהו הסעיף החשוב ביותר בתנאים אלה:"),
        items: &[
            "המידע באתר, לרבות מאמרים, מדריכים וכל תוכן אחר, הינו מידע כללי בלבד ואינו מהווה ייעוץ משפטי או תחליף להתייעצות עם עורך דין.",
            "גלישה באתר, קריאת מאמרים או פנייה דרך טופס \"צור קשר\" אינם יוצרים יחסי עורך דין ולקוח.",
            "יחסי עורך דין ולקוח נוצרים אך ורק לאחר חתימה על הסכם שכר טרחה מפורש ובכתב.",
            "תוצאות שהושגו בתיקים קודמים אינן מבטיחות תוצאות דומות בתיקים אחרים.",
        ],
    },
    LegalSection {
        title: "השירותים באתר",
        intro: Some("האתר מספק מידע אודות תחומי הפעילות של המשרד, מאמרים מקצועיים ודרכי יצירת קשר. האתר אינו מספק שירותי ייעוץ משפטי מקוון."),
        items: &[],
    },
    LegalSection {
        title: "קניין רוחני",
        intro: None,
        items: &[
            "כל התכנים באתר הם קניינו הבלעדי של עו\"ד יונתן בן דוד ומוגנים בחוקי זכויות יוצרים.",
            "אין להעתיק, להפיץ או לעשות שימוש מסחרי בתכני האתר ללא הסכמה מפורשת בכתב מראש.",
            "ציטוט קצר מותר לצרכים אקדמיים או עיתונאיים, בכפוף למתן קרדיט מלא ולינק לאתר.",
        ],
    },
    LegalSection {
        title: "דין וסמכות שיפוט",
        intro: Some("על תנאים אלה יחול הדין הישראלי בלבד, וסמכות השיפוט הבלעדית נתונה לבתי המשפט המוסמכים בתל אביב-יפו."),
        items: &[],
    },
];

impl Route for TermsOfUse {
    fn route_raw(&self) -> &str {
        "/terms-of-use"
    }

    fn render(&self, ctx: &mut PageContext) -> RenderResult {
        layout(
            html! {
                (page_hero("Terms of Use", "תנאי שימוש", Some("עודכנו לאחרונה: פברואר 2026")))
                (legal_document(TERMS_INTRO, TERMS_SECTIONS))
            },
            ctx,
            Some(
                Seo::new(
                    "תנאי שימוש",
                    "תנאי השימוש באתר עו״ד יונתן בן דוד. מידע חשוב על הסרת אחריות, קניין רוחני, וכללי השימוש באתר.",
                )
                .with_breadcrumb("תנאי שימוש", "/terms-of-use"),
            ),
        )
        .into()
    }
}
