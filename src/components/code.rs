//! Inline code

use super::{forward_props, lower, Props};
use crate::element::Element;
use crate::variant::{CodeVariant, Kind, VariantTables};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Code {
    variant: Option<CodeVariant>,
    props: Props,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    /// `soft` when unset
    pub fn variant(mut self, variant: CodeVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn class_name(&self, tables: &VariantTables) -> String {
        tables.resolve_variant(self.variant, self.props.class.as_deref())
    }

    pub fn render(&self, tables: &VariantTables) -> Element {
        lower(
            Kind::Code.default_tag(),
            self.class_name(tables),
            Vec::new(),
            &self.props,
        )
    }
}

forward_props!(Code);
