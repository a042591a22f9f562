//! Heading: `h1`..`h6`, sized by its level

use super::{forward_props, lower, Props};
use crate::element::Element;
use crate::variant::{HeadingLevel, VariantTables};

/// A heading whose tag level also selects its size
///
/// `h1` is the largest (`text-6xl`) and `h6` the smallest (`text-xl`).
/// A caller class such as `text-3xl` replaces the level's size while the tag
/// stays the same.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Heading {
    level: Option<HeadingLevel>,
    props: Props,
}

impl Heading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag level, `h1` when unset
    pub fn level(mut self, level: HeadingLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn tag(&self) -> &'static str {
        self.level.unwrap_or_default().tag()
    }

    pub fn class_name(&self, tables: &VariantTables) -> String {
        tables.resolve_variant(self.level, self.props.class.as_deref())
    }

    pub fn render(&self, tables: &VariantTables) -> Element {
        lower(self.tag(), self.class_name(tables), Vec::new(), &self.props)
    }
}

forward_props!(Heading);
