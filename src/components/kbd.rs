//! Keyboard key indicator

use super::{forward_props, lower, Props};
use crate::element::Element;
use crate::variant::{KbdVariant, Kind, VariantTables};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kbd {
    variant: Option<KbdVariant>,
    props: Props,
}

impl Kbd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: KbdVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn class_name(&self, tables: &VariantTables) -> String {
        tables.resolve_variant(self.variant, self.props.class.as_deref())
    }

    pub fn render(&self, tables: &VariantTables) -> Element {
        lower(
            Kind::Kbd.default_tag(),
            self.class_name(tables),
            Vec::new(),
            &self.props,
        )
    }
}

forward_props!(Kbd);
