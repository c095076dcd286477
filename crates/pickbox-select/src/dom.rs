//! A minimal element tree for the custom surface.
//!
//! Only what the select needs: tag, classes, attributes, text, children,
//! and serialization to HTML for assertions.

use std::fmt::Write;

/// Class names of the generated markup. Stylesheets and tests key on these.
pub mod class {
    pub const CONTAINER: &str = "custom-select-container";
    pub const VALUE: &str = "custom-select-value";
    pub const OPTIONS: &str = "custom-select-options";
    pub const OPTION: &str = "custom-select-option";
    pub const SELECTED: &str = "selected";
    pub const SHOW: &str = "show";
}

/// Attribute carrying an item's option value.
pub const DATA_VALUE: &str = "data-value";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.set_class(class, true);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add or remove `class`. Adding twice keeps one copy.
    pub fn set_class(&mut self, class: &str, on: bool) {
        let present = self.has_class(class);
        if on && !present {
            self.classes.push(class.to_string());
        } else if !on && present {
            self.classes.retain(|c| c != class);
        }
    }

    /// Flip `class`, returning whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        let on = !self.has_class(class);
        self.set_class(class, on);
        on
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index)
    }

    /// Serialize to HTML. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        out.push_str(&escape(&self.text));
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_class_is_idempotent() {
        let mut el = Element::new("li").with_class("a");
        el.set_class("a", true);
        assert_eq!(el.classes().count(), 1);
        el.set_class("a", false);
        el.set_class("a", false);
        assert!(!el.has_class("a"));
    }

    #[test]
    fn toggle_class_reports_new_state() {
        let mut el = Element::new("ul");
        assert!(el.toggle_class(class::SHOW));
        assert!(!el.toggle_class(class::SHOW));
    }

    #[test]
    fn attributes_overwrite() {
        let mut el = Element::new("li").with_attribute(DATA_VALUE, "OH");
        el.set_attribute(DATA_VALUE, "CA");
        assert_eq!(el.attribute(DATA_VALUE), Some("CA"));
        assert_eq!(el.attribute("id"), None);
    }

    #[test]
    fn html_escapes_text_and_attributes() {
        let mut root = Element::new("ul").with_class(class::OPTIONS);
        root.push_child(
            Element::new("li")
                .with_attribute(DATA_VALUE, "a\"b")
                .with_text("Tom & Jerry <3"),
        );
        assert_eq!(
            root.to_html(),
            "<ul class=\"custom-select-options\"><li data-value=\"a&quot;b\">Tom &amp; Jerry &lt;3</li></ul>"
        );
    }
}
