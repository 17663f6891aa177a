use maud::html;
use prerender::route::prelude::*;

use crate::layout::{layout, page_hero, Seo};
use crate::site::{ADDRESS, EMAIL, PHONE};

pub struct Contact;

impl Route for Contact {
    fn route_raw(&self) -> &str {
        "/contact"
    }

    fn render(&self, ctx: &mut PageContext) -> RenderResult {
        layout(
            html! {
                (page_hero("צור קשר", "בואו נדבר", Some("שיחת אפיון קצרה של 20 דקות, בלי התחייבות.")))

                section.contact {
                    div.container {
                        address.contact-details {
                            p { "טלפון: " a href={ "tel:" (PHONE) } { (PHONE) } }
                            p { "דוא״ל: " a href={ "mailto:" (EMAIL) } { (EMAIL) } }
                            p { "כתובת: " (ADDRESS) }
                        }

                        // Submitted by the client application once it hydrates.
                        form.contact-form method="post" action="/contact" {
                            label for="name" { "שם מלא" }
                            input id="name" type="text" name="name" required autocomplete="name";
                            label for="phone" { "טלפון" }
                            input id="phone" type="tel" name="phone" required autocomplete="tel";
                            label for="email" { "דוא״ל" }
                            input id="email" type="email" name="email" autocomplete="email";
                            label for="message" { "במה אוכל לעזור?" }
                            textarea id="message" name="message" rows="5" {}
                            button.btn.btn-gold type="submit" { "שליחה" }
                            p.form-note { "פנייה דרך הטופס אינה יוצרת יחסי עורך דין ולקוח." }
                        }
                    }
                }
            },
            ctx,
            Some(
                Seo::new(
                    "צור קשר",
                    "לתיאום שיחת אפיון עם עו״ד יונתן בן דוד. טלפון, דוא״ל וטופס פנייה.",
                )
                .with_breadcrumb("צור קשר", "/contact"),
            ),
        )
        .into()
    }
}
