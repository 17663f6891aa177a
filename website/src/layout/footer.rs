use maud::{html, Markup};

use crate::site::{ADDRESS, EMAIL, LEGAL_LINKS, NAV, PHONE, SITE_NAME};

pub fn footer() -> Markup {
    html! {
        footer.site-footer dir="rtl" {
            div.container {
                div.footer-brand {
                    p.logo { (SITE_NAME) }
                    p { "עורך דין ויזם נדל״ן. ליווי משפטי אישי, בגובה העיניים." }
                }
                nav aria-label="ניווט משני" {
                    @for item in NAV {
                        a href=(item.href) { (item.label) }
                    }
                }
                address {
                    a href={ "tel:" (PHONE) } { (PHONE) }
                    a href={ "mailto:" (EMAIL) } { (EMAIL) }
                    span { (ADDRESS) }
                }
                div.footer-legal {
                    @for (label, href) in LEGAL_LINKS {
                        a href=(href) { (label) }
                    }
                    p.disclaimer { "האמור באתר אינו מהווה ייעוץ משפטי ואינו תחליף לייעוץ משפטי פרטני." }
                }
            }
        }
    }
}
