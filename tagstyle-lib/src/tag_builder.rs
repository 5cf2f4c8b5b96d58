//! A fluent builder for a single HTML element carrying an inline `style` attribute.
//!
//! Declarations are appended in call order and never merged, so setting the same
//! property twice renders it twice. Tag, content, and values are written out
//! verbatim: callers must sanitise untrusted input themselves.

use crate::style::declaration::Declaration;
use crate::style::properties::is_known_property;
use log::{debug, trace};
use std::fmt::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBuilder {
    tag: String,
    inner_html: String,
    declarations: Vec<Declaration>,
}

impl StyleBuilder {
    /// Creates a builder for `<tag>inner_html</tag>` with no declarations.
    ///
    /// # Arguments
    ///
    /// * `tag` - Name of the element (div, span, a, p, ...).
    /// * `inner_html` - Text or markup placed between the opening and closing tags.
    pub fn new(tag: impl Into<String>, inner_html: impl Into<String>) -> Self {
        StyleBuilder {
            tag: tag.into(),
            inner_html: inner_html.into(),
            declarations: Vec::new(),
        }
    }

    /// Appends `property:value` and returns the same builder for chaining.
    ///
    /// Every typed setter goes through here. Unknown property names are accepted as-is.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let decl = Declaration::new(property, value);
        trace!("<{}> += {}", self.tag, decl);
        self.declarations.push(decl);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Renders `style="p1:v1;p2:v2;"`. With no declarations this is `style=""`.
    pub fn style_attribute(&self) -> String {
        let mut attr = String::from("style=\"");
        for decl in &self.declarations {
            // writing into a String cannot fail
            let _ = write!(attr, "{}", decl);
        }
        attr.push('"');
        attr
    }

    /// Renders the element as `<tag style="...">inner_html</tag>`.
    ///
    /// Pure: calling it repeatedly without new declarations yields the same string.
    pub fn build(&self) -> String {
        debug!(
            "rendering <{}> with {} declaration(s)",
            self.tag,
            self.declarations.len()
        );
        format!(
            "<{tag} {style}>{inner}</{tag}>",
            tag = self.tag,
            style = self.style_attribute(),
            inner = self.inner_html
        )
    }

    /// Properties in call order that have no typed setter. Rendering ignores this.
    pub fn unknown_properties(&self) -> Vec<&str> {
        self.declarations
            .iter()
            .map(|decl| decl.property.as_str())
            .filter(|property| !is_known_property(property))
            .collect()
    }
}

impl Extend<Declaration> for StyleBuilder {
    fn extend<I: IntoIterator<Item = Declaration>>(&mut self, iter: I) {
        for decl in iter {
            self.set(decl.property, decl.value);
        }
    }
}

impl fmt::Display for StyleBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_builder_renders_empty_style() {
        let builder = StyleBuilder::new("div", "content");
        assert!(builder.is_empty());
        assert_eq!(builder.build(), r#"<div style="">content</div>"#);
    }

    #[test]
    fn test_tag_and_inner_html_are_kept_verbatim() {
        let mut builder = StyleBuilder::new("my-widget", "  <em>a & b</em> ");
        builder.color("red");
        assert_eq!(builder.tag(), "my-widget");
        assert_eq!(builder.inner_html(), "  <em>a & b</em> ");
        assert_eq!(
            builder.build(),
            r#"<my-widget style="color:red;">  <em>a & b</em> </my-widget>"#
        );
    }

    #[test]
    fn test_empty_tag_and_content() {
        assert_eq!(StyleBuilder::new("", "").build(), r#"< style=""></>"#);
    }

    #[test]
    fn test_generic_set_chains_into_same_builder() {
        let mut builder = StyleBuilder::new("span", "hi");
        builder.set("color", "red").set("--accent", "#f00");
        assert_eq!(builder.len(), 2);
        assert_eq!(
            builder.build(),
            r#"<span style="color:red;--accent:#f00;">hi</span>"#
        );
    }

    #[test]
    fn test_style_attribute_alone() {
        let mut builder = StyleBuilder::new("div", "");
        assert_eq!(builder.style_attribute(), r#"style="""#);
        builder.set("margin", "0").set("margin", "1px");
        assert_eq!(builder.style_attribute(), r#"style="margin:0;margin:1px;""#);
    }

    #[test]
    fn test_display_matches_build() {
        let mut builder = StyleBuilder::new("p", "text");
        builder.set("opacity", "0.5");
        assert_eq!(builder.to_string(), builder.build());
    }

    #[test]
    fn test_unknown_properties_keeps_order_and_duplicates() {
        let mut builder = StyleBuilder::new("div", "");
        builder
            .set("colour", "red")
            .set("color", "red")
            .set("--gap", "4px")
            .set("colour", "blue");
        assert_eq!(builder.unknown_properties(), ["colour", "--gap", "colour"]);
        assert_eq!(
            builder.build(),
            r#"<div style="colour:red;color:red;--gap:4px;colour:blue;"></div>"#
        );
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut builder = StyleBuilder::new("div", "");
        builder.set("display", "flex");
        builder.extend(vec![
            Declaration::new("gap", "1em"),
            Declaration::new("display", "grid"),
        ]);
        assert_eq!(
            builder.declarations(),
            &[
                Declaration::new("display", "flex"),
                Declaration::new("gap", "1em"),
                Declaration::new("display", "grid"),
            ]
        );
    }
}
