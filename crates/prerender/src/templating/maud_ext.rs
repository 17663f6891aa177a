use maud::{Markup, PreEscaped, Render};

use crate::{motion::Motion, route::RenderResult};

impl Render for Motion {
    fn render(&self) -> Markup {
        PreEscaped(self.to_html())
    }
}

impl Motion {
    /// Sets the children from a Maud template.
    pub fn content(self, markup: Markup) -> Self {
        self.children(markup.into_string())
    }
}

impl From<Markup> for RenderResult {
    fn from(val: Markup) -> Self {
        RenderResult::Text(val.into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MotionTag;
    use maud::html;

    #[test]
    fn test_motion_renders_inside_maud() {
        let markup = html! {
            main {
                (Motion::new(MotionTag::H1).prop("animate", "{ y: 0 }").content(html! { "שלום" }))
            }
        };

        assert_eq!(markup.into_string(), "<main><h1>שלום</h1></main>");
    }

    #[test]
    fn test_markup_into_render_result() {
        let result: RenderResult = html! { p { "x" } }.into();
        assert!(matches!(result, RenderResult::Text(ref html) if html == "<p>x</p>"));
    }
}
