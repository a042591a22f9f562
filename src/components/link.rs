//! Navigation link

use super::{forward_props, lower, Props};
use crate::element::Element;
use crate::variant::{Kind, LinkVariant, VariantTables};

/// An anchor pointing at `href`
///
/// The target is forwarded as the first attribute and plays no part in the
/// class descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    href: String,
    variant: Option<LinkVariant>,
    props: Props,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            variant: None,
            props: Props::default(),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn variant(mut self, variant: LinkVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn class_name(&self, tables: &VariantTables) -> String {
        tables.resolve_variant(self.variant, self.props.class.as_deref())
    }

    pub fn render(&self, tables: &VariantTables) -> Element {
        lower(
            Kind::Link.default_tag(),
            self.class_name(tables),
            vec![("href".to_string(), self.href.clone())],
            &self.props,
        )
    }
}

forward_props!(Link);
