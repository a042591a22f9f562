//! Body text

use super::{forward_props, lower, Props};
use crate::element::Element;
use crate::variant::{TextTag, TextVariant, VariantTables};

/// Body text, a `p` unless the tag is set to `span`
///
/// With no variant the text is plain body copy: only the base classes apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    variant: Option<TextVariant>,
    tag: TextTag,
    props: Props,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn tag(mut self, tag: TextTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn class_name(&self, tables: &VariantTables) -> String {
        tables.resolve_variant(self.variant, self.props.class.as_deref())
    }

    pub fn render(&self, tables: &VariantTables) -> Element {
        lower(self.tag.tag(), self.class_name(tables), Vec::new(), &self.props)
    }
}

forward_props!(Text);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_has_base_classes_only() {
        let tables = VariantTables::builtin();
        assert_eq!(
            Text::new().class_name(tables),
            "-tracking-wide text-base [&_em]:italic [&_em]:font-serif [&_strong]:font-bold"
        );
    }

    #[test]
    fn test_small_replaces_base_size() {
        let tables = VariantTables::builtin();
        let class = Text::new().variant(TextVariant::Small).class_name(tables);
        assert!(class.ends_with("text-sm font-medium leading-none"));
        assert!(!class.contains("text-base"));
    }

    #[test]
    fn test_span_tag() {
        let element = Text::new()
            .tag(TextTag::Span)
            .variant(TextVariant::Muted)
            .render(VariantTables::builtin());
        assert_eq!(element.tag, "span");
    }
}
