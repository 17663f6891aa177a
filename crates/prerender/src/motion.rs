//! Inert stand-ins for animated elements.
//!
//! The interactive site wraps many elements in animation components. When pre-rendering, those wrappers
//! must produce exactly the element they wrap, without any animation-only configuration, so the markup
//! crawlers see is the final resting state and not a frame in the middle of an animation.
//!
//! Every supported tag is listed in [`MotionTag`]; props named in [`ANIMATION_PROPS`] are dropped when
//! the element is rendered, everything else is written as a regular attribute.
//!
//! ## Example
//! ```rust
//! use prerender::motion::{Motion, MotionTag};
//!
//! let heading = Motion::new(MotionTag::H1)
//!     .class("hero-title")
//!     .prop("initial", "{ opacity: 0, y: 15 }")
//!     .prop("transition", "{ duration: 0.5 }")
//!     .children("Welcome");
//!
//! assert_eq!(heading.to_html(), r#"<h1 class="hero-title">Welcome</h1>"#);
//! ```
use crate::escape::write_attrs;

/// Props that only configure animations and never reach the rendered element.
pub const ANIMATION_PROPS: &[&str] = &[
    "initial",
    "animate",
    "exit",
    "whileInView",
    "whileHover",
    "whileTap",
    "whileFocus",
    "whileDrag",
    "variants",
    "transition",
    "viewport",
    "layout",
    "layoutId",
    "layoutDependency",
    "layoutScroll",
    "onAnimationStart",
    "onAnimationComplete",
    "onUpdate",
    "drag",
    "dragConstraints",
    "dragElastic",
    "dragMomentum",
    "dragTransition",
    "dragListener",
    "dragControls",
    "dragSnapToOrigin",
    "dragPropagation",
    "onDrag",
    "onDragStart",
    "onDragEnd",
    "onDirectionLock",
    "custom",
    "inherit",
];

pub fn is_animation_prop(name: &str) -> bool {
    ANIMATION_PROPS.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionTag {
    Div,
    Section,
    Article,
    Header,
    Footer,
    Nav,
    Aside,
    Main,
    H1,
    H2,
    H3,
    H4,
    P,
    Span,
    Ul,
    Ol,
    Li,
    A,
    Img,
    Button,
    Form,
    Blockquote,
}

impl MotionTag {
    pub const fn element(self) -> &'static str {
        match self {
            MotionTag::Div => "div",
            MotionTag::Section => "section",
            MotionTag::Article => "article",
            MotionTag::Header => "header",
            MotionTag::Footer => "footer",
            MotionTag::Nav => "nav",
            MotionTag::Aside => "aside",
            MotionTag::Main => "main",
            MotionTag::H1 => "h1",
            MotionTag::H2 => "h2",
            MotionTag::H3 => "h3",
            MotionTag::H4 => "h4",
            MotionTag::P => "p",
            MotionTag::Span => "span",
            MotionTag::Ul => "ul",
            MotionTag::Ol => "ol",
            MotionTag::Li => "li",
            MotionTag::A => "a",
            MotionTag::Img => "img",
            MotionTag::Button => "button",
            MotionTag::Form => "form",
            MotionTag::Blockquote => "blockquote",
        }
    }

    /// Void elements have no closing tag and ignore children.
    pub const fn is_void(self) -> bool {
        matches!(self, MotionTag::Img)
    }
}

#[derive(Debug, Clone)]
pub struct Motion {
    tag: MotionTag,
    props: Vec<(String, String)>,
    children: String,
}

impl Motion {
    pub fn new(tag: MotionTag) -> Self {
        Self {
            tag,
            props: Vec::new(),
            children: String::new(),
        }
    }

    pub fn tag(&self) -> MotionTag {
        self.tag
    }

    /// Sets a prop. Animation props are accepted so page code can be shared with the interactive
    /// version, but they are not rendered.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.push((name.into(), value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.prop("class", class)
    }

    /// Sets the already serialized inner HTML.
    pub fn children(mut self, html: impl Into<String>) -> Self {
        self.children = html.into();
        self
    }

    pub fn to_html(&self) -> String {
        let element = self.tag.element();
        let attrs: Vec<(String, String)> = self
            .props
            .iter()
            .filter(|(name, _)| !is_animation_prop(name))
            .cloned()
            .collect();

        let mut out = String::with_capacity(self.children.len() + 32);
        out.push('<');
        out.push_str(element);
        write_attrs(&mut out, &attrs);
        out.push('>');

        if self.tag.is_void() {
            return out;
        }

        out.push_str(&self.children);
        out.push_str("</");
        out.push_str(element);
        out.push('>');
        out
    }
}

/// Presence, config and lazy-loading wrappers render their children unchanged.
pub fn pass_through(children: impl Into<String>) -> String {
    children.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_props_are_stripped() {
        let html = Motion::new(MotionTag::Div)
            .prop("initial", "{ opacity: 0 }")
            .prop("whileInView", "{ opacity: 1 }")
            .prop("viewport", "{ once: true }")
            .prop("id", "hero")
            .class("container")
            .children("<p>text</p>")
            .to_html();

        assert_eq!(html, r#"<div id="hero" class="container"><p>text</p></div>"#);
    }

    #[test]
    fn test_every_animation_prop_is_stripped() {
        let mut motion = Motion::new(MotionTag::Span);
        for prop in ANIMATION_PROPS {
            motion = motion.prop(*prop, "x");
        }

        assert_eq!(motion.to_html(), "<span></span>");
    }

    #[test]
    fn test_structural_element_matches_tag() {
        for (tag, element) in [
            (MotionTag::Section, "section"),
            (MotionTag::Article, "article"),
            (MotionTag::H2, "h2"),
            (MotionTag::Li, "li"),
            (MotionTag::A, "a"),
        ] {
            let html = Motion::new(tag).children("x").to_html();
            assert_eq!(html, format!("<{element}>x</{element}>"));
        }
    }

    #[test]
    fn test_void_element_ignores_children() {
        let html = Motion::new(MotionTag::Img)
            .prop("src", "/avatar.jpg")
            .prop("alt", "עו״ד")
            .prop("animate", "{ scale: 1 }")
            .children("ignored")
            .to_html();

        assert_eq!(html, r#"<img src="/avatar.jpg" alt="עו״ד">"#);
    }

    #[test]
    fn test_prop_values_are_escaped() {
        let html = Motion::new(MotionTag::A)
            .prop("href", "/search?q=\"a\"&b")
            .children("link")
            .to_html();

        assert_eq!(html, r#"<a href="/search?q=&quot;a&quot;&amp;b">link</a>"#);
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(pass_through("<div>x</div>"), "<div>x</div>");
    }
}
