use maud::html;
use prerender::route::prelude::*;

use crate::layout::{layout, Seo};

/// Rendered for `/404` and for every path no other route answers to.
pub struct NotFound;

impl Route for NotFound {
    fn route_raw(&self) -> &str {
        "/404"
    }

    fn render(&self, ctx: &mut PageContext) -> RenderResult {
        layout(
            html! {
                section.not-found dir="rtl" {
                    span.not-found-code aria-hidden="true" { "404" }
                    h1 { "העמוד לא נמצא" }
                    p { "הדף שחיפשת לא קיים או שהועבר למיקום אחר. אפשר לחזור לדף הבית ולנווט משם." }
                    div.actions {
                        a.btn.btn-gold href="/" { "חזרה לדף הבית" }
                        a.btn.btn-outline href="/contact" { "צור קשר" }
                    }
                }
            },
            ctx,
            Some(Seo {
                noindex: true,
                ..Seo::new("העמוד לא נמצא", "הדף שחיפשת לא קיים או שהועבר למיקום אחר.")
            }),
        )
        .into()
    }
}
