//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlConfig {
    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,

    /// Spaces per nesting level when pretty printing
    pub indent_width: usize,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            pretty_print: true,
            indent_width: 2,
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HtmlConfig::default();
        assert!(config.pretty_print);
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_builder_pattern() {
        let config = HtmlConfig::new()
            .with_pretty_print(false)
            .with_indent_width(4);

        assert!(!config.pretty_print);
        assert_eq!(config.indent_width, 4);
    }
}
