pub const SITE_NAME: &str = "עו״ד יונתן בן דוד";
pub const BASE_URL: &str = "https://www.bdyonatan.co.il";
pub const DEFAULT_IMAGE: &str =
    "https://files.manuscdn.com/user_upload_by_module/session_file/99481019/HFdlNVQTAFgMvovG.jpg";
pub const DEFAULT_DESCRIPTION: &str = "עורך דין ויזם נדל״ן. ליווי משפטי בעסקאות נדל״ן, השקעות בארץ ובחו״ל ובדיקות נאותות, בגובה העיניים.";

pub const PHONE: &str = "050-0000000";
pub const EMAIL: &str = "office@bdyonatan.co.il";
pub const ADDRESS: &str = "מנחם בגין 150, מגדל WE, קומה 11, תל אביב";

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    /// Rendered as the highlighted call to action.
    pub highlight: bool,
}

pub const NAV: &[NavItem] = &[
    NavItem { label: "ראשי", href: "/", highlight: false },
    NavItem { label: "אודות", href: "/about", highlight: false },
    NavItem { label: "תחומי עיסוק", href: "/practice-areas", highlight: false },
    NavItem { label: "מאמרים", href: "/articles", highlight: false },
    NavItem { label: "צור קשר", href: "/contact", highlight: true },
];

pub const LEGAL_LINKS: &[(&str, &str)] = &[
    ("מדיניות פרטיות", "/privacy-policy"),
    ("תנאי שימוש", "/terms-of-use"),
    ("הצהרת נגישות", "/accessibility"),
];

/// Slugs rendered when the articles directory cannot be read.
pub const FALLBACK_ARTICLE_SLUGS: &[&str] = &[
    "mistakes-first-contract",
    "georgia-legal-guide",
    "capital-gains-tax-2026",
    "due-diligence-checklist",
    "tama-38-vs-pinui-binui",
    "how-to-choose-real-estate-lawyer",
];

pub const STATIC_ROUTES: &[&str] = &[
    "/",
    "/about",
    "/practice-areas",
    "/articles",
    "/contact",
    "/privacy-policy",
    "/terms-of-use",
    "/accessibility",
    "/404",
];
