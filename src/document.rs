//! Document shell around rendered content
//!
//! Wraps a body in `html`/`head`/`body`/`main`, loads the sans and mono
//! font families and exposes them as `--font-sans` and `--font-mono`.

use serde::Deserialize;

use crate::element::{Element, Node};
use crate::renderer::HtmlBuilder;
use crate::RenderConfig;

const BODY_CLASSES: &str = "min-h-screen bg-background font-sans antialiased text-base";
const MAIN_CLASSES: &str = "min-h-dvh mx-auto px-4 py-32";
const GOOGLE_FONTS: &str = "https://fonts.googleapis.com/css2";

/// Settings for the surrounding HTML document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentSettings {
    pub title: String,
    pub description: String,
    pub lang: String,
    /// Adds the `dark` class to the root element
    pub dark: bool,
    pub font_sans: String,
    pub font_mono: String,
    /// Weights requested for the mono family
    pub font_mono_weights: Vec<u16>,
    /// Compiled utility stylesheet to link, if any
    pub stylesheet: Option<String>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            title: "Typography".to_string(),
            description: "Headings, text, quotes, code, links and keyboard keys".to_string(),
            lang: "en".to_string(),
            dark: true,
            font_sans: "Schibsted Grotesk".to_string(),
            font_mono: "IBM Plex Mono".to_string(),
            font_mono_weights: vec![400, 500],
            stylesheet: None,
        }
    }
}

impl DocumentSettings {
    /// Google Fonts URL loading both families
    pub fn fonts_href(&self) -> String {
        let family = |name: &str| name.split_whitespace().collect::<Vec<_>>().join("+");
        let weights = self
            .font_mono_weights
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(";");

        let mono = if weights.is_empty() {
            family(&self.font_mono)
        } else {
            format!("{}:wght@{}", family(&self.font_mono), weights)
        };

        format!(
            "{}?family={}&family={}&display=swap",
            GOOGLE_FONTS,
            family(&self.font_sans),
            mono
        )
    }

    fn font_variables(&self) -> String {
        format!(
            ":root {{ --font-sans: '{}', sans-serif; --font-mono: '{}', monospace; }}",
            self.font_sans, self.font_mono
        )
    }

    fn head(&self) -> Element {
        let mut head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").child(self.title.as_str()))
            .child(
                Element::new("meta")
                    .attr("name", "description")
                    .attr("content", self.description.as_str()),
            )
            .child(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", self.fonts_href()),
            );

        if let Some(stylesheet) = &self.stylesheet {
            head = head.child(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", stylesheet.as_str()),
            );
        }

        head.child(Element::new("style").child(self.font_variables()))
    }
}

/// Render `body` inside a complete HTML document
///
/// # Example
///
/// ```rust
/// use typecraft::{render_document, Heading, RenderConfig};
///
/// let html = render_document(Heading::new().child("Hello"), &RenderConfig::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("<main class=\"min-h-dvh mx-auto px-4 py-32\">"));
/// ```
pub fn render_document(body: impl Into<Node>, config: &RenderConfig) -> String {
    let settings = &config.theme.document;
    tracing::debug!(title = %settings.title, dark = settings.dark, "rendering document");

    let mut html = Element::new("html").attr("lang", settings.lang.as_str());
    if settings.dark {
        html = html.class("dark");
    }

    let body = Element::new("body")
        .class(BODY_CLASSES)
        .child(Element::new("main").class(MAIN_CLASSES).child(body));

    let mut builder = HtmlBuilder::new(&config.html, &config.theme.tables);
    builder.add_raw_line("<!DOCTYPE html>");
    builder.add_node(&Node::from(html.child(settings.head()).child(body)));
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::HtmlConfig;
    use crate::theme::Theme;

    #[test]
    fn test_fonts_href() {
        let settings = DocumentSettings::default();
        assert_eq!(
            settings.fonts_href(),
            "https://fonts.googleapis.com/css2?family=Schibsted+Grotesk\
             &family=IBM+Plex+Mono:wght@400;500&display=swap"
        );
    }

    #[test]
    fn test_fonts_href_without_weights() {
        let settings = DocumentSettings {
            font_mono: "Fira Code".into(),
            font_mono_weights: Vec::new(),
            ..DocumentSettings::default()
        };
        assert!(settings.fonts_href().contains("&family=Fira+Code&display=swap"));
    }

    #[test]
    fn test_document_shell() {
        let html = render_document("Hello", &RenderConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\">"));
        assert!(html.contains("<title>Typography</title>"));
        assert!(html.contains(
            "<body class=\"min-h-screen bg-background font-sans antialiased text-base\">"
        ));
        assert!(html.contains("<main class=\"min-h-dvh mx-auto px-4 py-32\">Hello</main>"));
        assert!(html.contains("--font-mono: 'IBM Plex Mono', monospace;"));
        assert!(html.contains("family=Schibsted+Grotesk&amp;family="));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_light_document_has_no_dark_class() {
        let theme = Theme::default().with_document(DocumentSettings {
            dark: false,
            stylesheet: Some("/app.css".into()),
            ..DocumentSettings::default()
        });
        let config = RenderConfig::new().with_theme(theme);
        let html = render_document("x", &config);
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/app.css\">"));
    }

    #[test]
    fn test_compact_document() {
        let config = RenderConfig::new().with_html(HtmlConfig::new().with_pretty_print(false));
        let html = render_document("x", &config);
        assert!(html.starts_with("<!DOCTYPE html><html"));
        assert!(!html.contains('\n'));
    }
}
