//! Block quote with a left rule and typographic quote marks

use super::{forward_props, lower, Props};
use crate::element::Element;
use crate::variant::{BlockquoteVariant, Kind, VariantTables};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blockquote {
    variant: Option<BlockquoteVariant>,
    props: Props,
}

impl Blockquote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: BlockquoteVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn class_name(&self, tables: &VariantTables) -> String {
        tables.resolve_variant(self.variant, self.props.class.as_deref())
    }

    pub fn render(&self, tables: &VariantTables) -> Element {
        lower(
            Kind::Blockquote.default_tag(),
            self.class_name(tables),
            Vec::new(),
            &self.props,
        )
    }
}

forward_props!(Blockquote);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_border_replaces_base_border_color() {
        let tables = VariantTables::builtin();
        let primary = Blockquote::new().class_name(tables);
        assert!(primary.ends_with("border-primary/90"));
        assert!(!primary.contains("border-border"));
        assert!(primary.contains("border-l-[6px]"));

        let subtle = Blockquote::new()
            .variant(BlockquoteVariant::Subtle)
            .class_name(tables);
        assert!(subtle.ends_with("border-muted-foreground"));
    }

    #[test]
    fn test_renders_blockquote_tag() {
        let element = Blockquote::new()
            .child("Perfect typography")
            .render(VariantTables::builtin());
        assert_eq!(element.tag, "blockquote");
    }
}
