//! Typecraft - typographic components rendered to utility-class HTML
//!
//! This library provides headings, body text, block quotes, inline code,
//! links and keyboard keys. Each component resolves a variant against a rule
//! table to a list of utility classes and renders a native element.
//!
//! # Example
//!
//! ```rust
//! use typecraft::{render, Heading, HeadingLevel};
//!
//! let html = render(Heading::new().level(HeadingLevel::H3).child("Chapter"));
//! assert!(html.starts_with("<h3 class=\""));
//! assert!(html.contains("text-4xl"));
//! ```

pub mod components;
pub mod document;
pub mod element;
pub mod error;
pub mod renderer;
pub mod showcase;
pub mod theme;
pub mod variant;

pub use components::{Blockquote, Code, Component, Heading, Kbd, Link, Props, Text};
pub use document::{render_document, DocumentSettings};
pub use element::{Element, Node};
pub use error::ThemeError;
pub use renderer::{render_html, HtmlConfig};
pub use theme::Theme;
pub use variant::{
    merge_classes, resolve, BlockquoteVariant, CodeVariant, HeadingLevel, Kind, KbdVariant,
    LinkVariant, TextTag, TextVariant, UnknownKind, Variant, VariantTable, VariantTables,
};

/// Configuration for the render pipeline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderConfig {
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Document settings and variant tables
    pub theme: Theme,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Render a node to HTML with the built-in tables
///
/// # Example
///
/// ```rust
/// use typecraft::{render, Link, LinkVariant};
///
/// let html = render(Link::new("/").variant(LinkVariant::Subtle).child("Learn more"));
/// assert!(html.contains("href=\"/\">Learn more</a>"));
/// assert!(html.contains("decoration-foreground"));
/// ```
pub fn render(node: impl Into<Node>) -> String {
    render_with_config(node, &RenderConfig::default())
}

/// Render a node to HTML with custom configuration
///
/// # Example
///
/// ```rust
/// use typecraft::{render_with_config, Code, HtmlConfig, RenderConfig, Theme};
///
/// let theme: Theme = r#"
///     [variants.code]
///     base = ["font-mono"]
///     default = "plain"
///
///     [variants.code.variants]
///     plain = "text-sm"
/// "#
/// .parse()
/// .unwrap();
///
/// let config = RenderConfig::new()
///     .with_theme(theme)
///     .with_html(HtmlConfig::new().with_pretty_print(false));
///
/// let html = render_with_config(Code::new().child("x"), &config);
/// assert_eq!(html, r#"<code class="font-mono text-sm">x</code>"#);
/// ```
pub fn render_with_config(node: impl Into<Node>, config: &RenderConfig) -> String {
    render_html(&node.into(), &config.html, &config.theme.tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple_component() {
        let html = render(Kbd::new().child("⌘ K"));
        assert!(html.starts_with("<kbd class=\""));
        assert!(html.ends_with(">⌘ K</kbd>"));
    }

    #[test]
    fn test_render_plain_element() {
        assert_eq!(render(Element::new("hr")), "<hr>");
    }

    #[test]
    fn test_render_text_node() {
        assert_eq!(render("a & b"), "a &amp; b");
    }

    #[test]
    fn test_render_with_theme_tables() {
        let tables = VariantTables::default()
            .with_table(
                Kind::Kbd,
                VariantTable {
                    base: vec!["font-mono".into()],
                    variants: [("flat".to_string(), "bg-muted".to_string())].into(),
                    default: Some("flat".into()),
                },
            )
            .expect("Should accept table");
        let config = RenderConfig::new().with_theme(Theme::default().with_tables(tables));

        assert_eq!(
            render_with_config(Kbd::new().child("K"), &config),
            r#"<kbd class="font-mono bg-muted">K</kbd>"#
        );
    }

    #[test]
    fn test_render_config_builder() {
        let config = RenderConfig::new().with_html(HtmlConfig::new().with_indent_width(4));
        assert_eq!(config.html.indent_width, 4);
        assert_eq!(config.theme, Theme::default());
    }
}
