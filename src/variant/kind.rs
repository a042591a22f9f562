//! Component kinds and their typed variant names

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A name that does not match any component kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown component kind '{name}' (expected one of: {})", Kind::names().join(", "))]
pub struct UnknownKind {
    pub name: String,
}

/// The six typographic component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Heading,
    Text,
    Blockquote,
    Code,
    Kbd,
    Link,
}

impl Kind {
    /// Every kind, in declaration order
    pub const ALL: [Kind; 6] = [
        Kind::Heading,
        Kind::Text,
        Kind::Blockquote,
        Kind::Code,
        Kind::Kbd,
        Kind::Link,
    ];

    /// Lowercase name used in theme files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Heading => "heading",
            Kind::Text => "text",
            Kind::Blockquote => "blockquote",
            Kind::Code => "code",
            Kind::Kbd => "kbd",
            Kind::Link => "link",
        }
    }

    /// Tag emitted when neither a tag override nor a host element is given
    pub fn default_tag(&self) -> &'static str {
        match self {
            Kind::Heading => "h1",
            Kind::Text => "p",
            Kind::Blockquote => "blockquote",
            Kind::Code => "code",
            Kind::Kbd => "kbd",
            Kind::Link => "a",
        }
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Kind::name).collect()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKind { name: s.to_string() })
    }
}

/// A typed variant of one component kind
pub trait Variant: Copy {
    /// The kind whose rule table this variant indexes
    const KIND: Kind;

    /// Key of this variant in the kind's rule table
    fn name(&self) -> &'static str;
}

/// Heading level; doubles as the heading's size variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    #[default]
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn tag(&self) -> &'static str {
        self.name()
    }
}

impl Variant for HeadingLevel {
    const KIND: Kind = Kind::Heading;

    fn name(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

/// Text variants. Leaving the variant unset renders plain body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextVariant {
    Small,
    Lead,
    Large,
    Muted,
}

impl Variant for TextVariant {
    const KIND: Kind = Kind::Text;

    fn name(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Lead => "lead",
            Self::Large => "large",
            Self::Muted => "muted",
        }
    }
}

/// Tags a `Text` may render as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextTag {
    #[default]
    P,
    Span,
}

impl TextTag {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::P => "p",
            Self::Span => "span",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlockquoteVariant {
    #[default]
    Primary,
    Subtle,
}

impl Variant for BlockquoteVariant {
    const KIND: Kind = Kind::Blockquote;

    fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Subtle => "subtle",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CodeVariant {
    Solid,
    #[default]
    Soft,
    Ghost,
}

impl Variant for CodeVariant {
    const KIND: Kind = Kind::Code;

    fn name(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Soft => "soft",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KbdVariant {
    #[default]
    Default,
}

impl Variant for KbdVariant {
    const KIND: Kind = Kind::Kbd;

    fn name(&self) -> &'static str {
        "default"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LinkVariant {
    #[default]
    Primary,
    Subtle,
}

impl Variant for LinkVariant {
    const KIND: Kind = Kind::Link;

    fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Subtle => "subtle",
        }
    }
}
