//! HTML generation from element trees

use crate::element::{Element, Node};
use crate::variant::VariantTables;

use super::HtmlConfig;

/// Elements that never have content or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Build HTML incrementally
///
/// An element whose children are all elements places each child on its own
/// indented line. An element with any text child writes its content inline,
/// so whitespace inside prose is preserved exactly.
pub struct HtmlBuilder<'a> {
    config: &'a HtmlConfig,
    tables: &'a VariantTables,
    output: String,
    indent: usize,
}

impl<'a> HtmlBuilder<'a> {
    /// Create a new HTML builder
    pub fn new(config: &'a HtmlConfig, tables: &'a VariantTables) -> Self {
        Self {
            config,
            tables,
            output: String::new(),
            indent: 0,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            " ".repeat(self.indent * self.config.indent_width)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Write raw markup on its own line, without escaping
    pub fn add_raw_line(&mut self, markup: &str) {
        let line = format!("{}{}{}", self.indent_str(), markup, self.newline());
        self.output.push_str(&line);
    }

    /// Write a node starting on a fresh line
    pub fn add_node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => {
                let line = format!("{}{}{}", self.indent_str(), escape_html(text), self.newline());
                self.output.push_str(&line);
            }
            Node::Element(element) => self.add_element(element),
            Node::Component(component) => {
                let element = component.render(self.tables);
                self.add_element(&element);
            }
        }
    }

    /// Write an element starting on a fresh line
    pub fn add_element(&mut self, element: &Element) {
        self.output.push_str(&self.indent_str());
        self.output.push_str(&open_tag(element));

        if is_void(element) {
            self.output.push_str(self.newline());
            return;
        }

        let inline = !self.config.pretty_print
            || element.children.is_empty()
            || element
                .children
                .iter()
                .any(|child| matches!(child, Node::Text(_)));

        if inline {
            for child in &element.children {
                self.add_inline(child);
            }
        } else {
            self.output.push_str(self.newline());
            self.indent += 1;
            for child in &element.children {
                self.add_node(child);
            }
            self.indent -= 1;
            self.output.push_str(&self.indent_str());
        }

        self.output.push_str(&format!("</{}>", element.tag));
        self.output.push_str(self.newline());
    }

    fn add_inline(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.output.push_str(&escape_html(text)),
            Node::Element(element) => self.add_inline_element(element),
            Node::Component(component) => {
                let element = component.render(self.tables);
                self.add_inline_element(&element);
            }
        }
    }

    fn add_inline_element(&mut self, element: &Element) {
        self.output.push_str(&open_tag(element));
        if is_void(element) {
            return;
        }
        for child in &element.children {
            self.add_inline(child);
        }
        self.output.push_str(&format!("</{}>", element.tag));
    }

    /// Finish and return the HTML, without a trailing newline
    pub fn build(mut self) -> String {
        let len = self.output.trim_end_matches('\n').len();
        self.output.truncate(len);
        self.output
    }
}

/// Render a node tree to HTML, lowering components through `tables`
pub fn render_html(node: &Node, config: &HtmlConfig, tables: &VariantTables) -> String {
    let mut builder = HtmlBuilder::new(config, tables);
    builder.add_node(node);
    builder.build()
}

fn is_void(element: &Element) -> bool {
    VOID_ELEMENTS.contains(&element.tag.as_str())
}

fn open_tag(element: &Element) -> String {
    let attributes: String = element
        .attributes
        .iter()
        .map(|(name, value)| format!(r#" {}="{}""#, name, escape_html(value)))
        .collect();
    format!("<{}{}>", element.tag, attributes)
}

/// Escape special HTML characters in text and attribute values
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
