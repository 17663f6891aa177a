use maud::{html, Markup};

use crate::site::{NAV, SITE_NAME};

pub fn header(current_path: &str) -> Markup {
    html! {
        a.sr-only."focus:not-sr-only" href="#main-content" { "דלג לתוכן הראשי" }
        header.site-header {
            div.container {
                a.logo href="/" dir="ltr" { (SITE_NAME) }
                nav dir="rtl" aria-label="ניווט ראשי" {
                    @for item in NAV {
                        @if item.highlight {
                            a.nav-link.nav-link-gold href=(item.href) { (item.label) }
                        } @else if item.href == current_path {
                            a.nav-link.active href=(item.href) aria-current="page" { (item.label) }
                        } @else {
                            a.nav-link href=(item.href) { (item.label) }
                        }
                    }
                }
            }
        }
    }
}
