//! Variant resolution: rule tables, typed variants and class merging

pub mod kind;
pub mod merge;
pub mod table;

pub use kind::{
    BlockquoteVariant, CodeVariant, HeadingLevel, Kind, KbdVariant, LinkVariant, TextTag,
    TextVariant, UnknownKind, Variant,
};
pub use merge::merge_classes;
pub use table::{resolve, VariantTable, VariantTables};
