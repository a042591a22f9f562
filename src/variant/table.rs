//! Variant rule tables
//!
//! Each component kind owns one table: base class fragments that are always
//! applied, a map from variant name to a class fragment, and an optional
//! default variant. The built-in tables are embedded as TOML and parsed once.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Deserialize;

use super::kind::{Kind, UnknownKind, Variant};
use super::merge::merge_classes;
use crate::error::ThemeError;

/// Built-in rule tables for all six kinds
pub(crate) const DEFAULT_TABLES: &str = r##"
[heading]
base = [
    "font-bold scroll-m-20 tracking-tight text-balance",
    "[&_em]:italic [&_em]:font-serif [&_strong]:font-bold",
]
default = "h1"

[heading.variants]
h6 = "text-xl"
h5 = "text-2xl"
h4 = "text-3xl"
h3 = "text-4xl"
h2 = "text-5xl"
h1 = "text-6xl"

# No default: an unset variant is plain body text
[text]
base = [
    "-tracking-wide text-base",
    "[&_em]:italic [&_em]:font-serif [&_strong]:font-bold",
]

[text.variants]
small = "text-sm font-medium leading-none"
lead = "text-lg text-muted-foreground"
large = "text-lg font-semibold"
muted = "text-sm text-muted-foreground"

[blockquote]
base = [
    "-tracking-wide text-base",
    "border-border border-l-[6px] pl-4",
    "before:content-[open-quote] after:content-[close-quote] before:font-serif after:font-serif",
    "[&_em]:italic [&_em]:font-serif [&_strong]:font-bold",
]
default = "primary"

[blockquote.variants]
primary = "border-primary/90"
subtle = "border-muted-foreground"

[code]
base = [
    "-tracking-wide font-mono rounded-lg px-1.5 py-0.5 text-[0.9em] whitespace-nowrap w-fit",
    "relative bottom-[0.1em]",
    "[&_em]:nont-italic [&_em]:font-sans [&_strong]:font-normal",
]
default = "soft"

[code.variants]
solid = "bg-primary/90 text-primary-foreground"
soft = "bg-primary/10 text-primary"
ghost = "text-primary/90 font-medium before:content-['`'] after:content-['`']"

[kbd]
base = [
    "rounded-lg px-1.5 py-0.5 text-[0.85em] font-medium whitespace-nowrap -tracking-widest w-fit",
    "relative bottom-[0.1em] drop-shadow border-border mx-1 [word-spacing:-0.2em] align-text-top",
    "[&_em]:nont-italic [&_em]:font-sans [&_strong]:font-medium",
]
default = "default"

[kbd.variants]
default = "bg-muted text-muted-foreground"

[link]
base = [
    "-tracking-wide underline transition-colors duration-300 underline-offset-4 decoration-transparent whitespace-nowrap w-fit",
    "[&_em]:italic [&_em]:font-serif [&_strong]:font-bold",
]
default = "primary"

[link.variants]
primary = "text-primary hover:decoration-primary"
subtle = "text-foreground decoration-foreground hover:text-muted-foreground hover:decoration-muted-foreground"
"##;

/// Rule table for one component kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantTable {
    /// Class fragments applied regardless of variant
    #[serde(default)]
    pub base: Vec<String>,
    /// Variant name -> class fragment
    #[serde(default)]
    pub variants: BTreeMap<String, String>,
    /// Variant used when none is requested
    #[serde(default)]
    pub default: Option<String>,
}

impl VariantTable {
    /// Class fragment of a named variant, if the table defines it
    pub fn variant_class(&self, name: &str) -> Option<&str> {
        self.variants.get(name).map(String::as_str)
    }

    pub fn default_variant(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Compute the class descriptor: base, then variant, then `extra`
    ///
    /// An unset or empty variant falls back to the table's default. A name
    /// the table does not define contributes no classes and does not fall back.
    pub fn resolve(&self, requested: Option<&str>, extra: Option<&str>) -> String {
        let variant = requested
            .filter(|name| !name.is_empty())
            .or(self.default_variant())
            .and_then(|name| self.variant_class(name));

        merge_classes(
            self.base
                .iter()
                .map(String::as_str)
                .chain(variant)
                .chain(extra),
        )
    }

    /// Every kind except Text must name a default it defines
    fn validate(&self, kind: Kind) -> Result<(), ThemeError> {
        match &self.default {
            Some(default) if !self.variants.contains_key(default) => {
                Err(ThemeError::InvalidDefault {
                    kind,
                    variant: default.clone(),
                })
            }
            None if kind != Kind::Text => Err(ThemeError::MissingDefault { kind }),
            _ => Ok(()),
        }
    }
}

/// One rule table per component kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTables {
    heading: VariantTable,
    text: VariantTable,
    blockquote: VariantTable,
    code: VariantTable,
    kbd: VariantTable,
    link: VariantTable,
}

impl VariantTables {
    /// The built-in tables, parsed on first use
    pub fn builtin() -> &'static VariantTables {
        static BUILTIN: OnceLock<VariantTables> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_str(DEFAULT_TABLES).expect("Built-in variant tables should be valid TOML")
        })
    }

    pub fn get(&self, kind: Kind) -> &VariantTable {
        match kind {
            Kind::Heading => &self.heading,
            Kind::Text => &self.text,
            Kind::Blockquote => &self.blockquote,
            Kind::Code => &self.code,
            Kind::Kbd => &self.kbd,
            Kind::Link => &self.link,
        }
    }

    fn get_mut(&mut self, kind: Kind) -> &mut VariantTable {
        match kind {
            Kind::Heading => &mut self.heading,
            Kind::Text => &mut self.text,
            Kind::Blockquote => &mut self.blockquote,
            Kind::Code => &mut self.code,
            Kind::Kbd => &mut self.kbd,
            Kind::Link => &mut self.link,
        }
    }

    /// Replace the table of one kind
    pub fn with_table(mut self, kind: Kind, table: VariantTable) -> Result<Self, ThemeError> {
        table.validate(kind)?;
        *self.get_mut(kind) = table;
        Ok(self)
    }

    /// Apply `[<kind>]` tables keyed by kind name over these tables
    pub(crate) fn with_overrides(
        mut self,
        overrides: HashMap<String, VariantTable>,
    ) -> Result<Self, ThemeError> {
        for (name, table) in overrides {
            let kind: Kind = name.parse()?;
            self = self.with_table(kind, table)?;
        }
        Ok(self)
    }

    /// Class descriptor for `kind` with a variant given by name
    pub fn resolve(&self, kind: Kind, requested: Option<&str>, extra: Option<&str>) -> String {
        self.get(kind).resolve(requested, extra)
    }

    /// Class descriptor for a typed variant
    pub fn resolve_variant<V: Variant>(&self, variant: Option<V>, extra: Option<&str>) -> String {
        self.resolve(V::KIND, variant.as_ref().map(Variant::name), extra)
    }
}

impl FromStr for VariantTables {
    type Err = ThemeError;

    /// Parse a complete set of tables; every kind must be present
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut parsed: HashMap<String, VariantTable> = toml::from_str(content)?;

        let mut take = |kind: Kind| -> Result<VariantTable, ThemeError> {
            let table = parsed
                .remove(kind.name())
                .ok_or(ThemeError::MissingKind { kind })?;
            table.validate(kind)?;
            Ok(table)
        };

        let tables = VariantTables {
            heading: take(Kind::Heading)?,
            text: take(Kind::Text)?,
            blockquote: take(Kind::Blockquote)?,
            code: take(Kind::Code)?,
            kbd: take(Kind::Kbd)?,
            link: take(Kind::Link)?,
        };

        if let Some(name) = parsed.into_keys().next() {
            return Err(UnknownKind { name }.into());
        }

        Ok(tables)
    }
}

impl Default for VariantTables {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Class descriptor from the built-in tables
///
/// # Example
///
/// ```rust
/// use typecraft::{resolve, Kind};
///
/// let class = resolve(Kind::Heading, Some("h3"), None);
/// assert!(class.ends_with("text-4xl"));
/// ```
pub fn resolve(kind: Kind, requested: Option<&str>, extra: Option<&str>) -> String {
    VariantTables::builtin().resolve(kind, requested, extra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::kind::{CodeVariant, HeadingLevel};

    #[test]
    fn test_builtin_tables_parse() {
        let tables = VariantTables::builtin();
        assert_eq!(tables.get(Kind::Heading).default_variant(), Some("h1"));
        assert_eq!(tables.get(Kind::Text).default_variant(), None);
        assert_eq!(tables.get(Kind::Code).default_variant(), Some("soft"));
        assert_eq!(tables.get(Kind::Kbd).variants.len(), 1);
    }

    #[test]
    fn test_heading_levels_map_to_sizes() {
        let tables = VariantTables::builtin();
        let sizes: Vec<&str> = ["h1", "h2", "h3", "h4", "h5", "h6"]
            .iter()
            .filter_map(|level| tables.get(Kind::Heading).variant_class(level))
            .collect();
        assert_eq!(
            sizes,
            vec!["text-6xl", "text-5xl", "text-4xl", "text-3xl", "text-2xl", "text-xl"]
        );
    }

    #[test]
    fn test_unset_variant_uses_default() {
        let tables = VariantTables::builtin();
        assert_eq!(
            tables.resolve(Kind::Code, None, None),
            tables.resolve(Kind::Code, Some("soft"), None)
        );
    }

    #[test]
    fn test_unknown_variant_contributes_nothing() {
        let table = VariantTables::builtin().get(Kind::Code);
        let resolved = table.resolve(Some("neon"), None);
        assert_eq!(resolved, merge_classes(table.base.iter().map(String::as_str)));
        assert!(!resolved.contains("bg-primary/10"));
    }

    #[test]
    fn test_typed_variants_resolve_by_name() {
        let tables = VariantTables::builtin();
        assert_eq!(
            tables.resolve_variant(Some(CodeVariant::Ghost), None),
            tables.resolve(Kind::Code, Some("ghost"), None)
        );
        assert_eq!(
            tables.resolve_variant::<HeadingLevel>(None, None),
            tables.resolve(Kind::Heading, Some("h1"), None)
        );
    }

    #[test]
    fn test_with_table_rejects_unknown_default() {
        let table = VariantTable {
            base: vec!["font-mono".into()],
            variants: BTreeMap::from([("loud".to_string(), "text-xl".to_string())]),
            default: Some("quiet".into()),
        };
        let err = VariantTables::default()
            .with_table(Kind::Code, table)
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::InvalidDefault { kind: Kind::Code, ref variant } if variant == "quiet"
        ));
    }

    #[test]
    fn test_with_overrides_rejects_unknown_kind() {
        let overrides = HashMap::from([("button".to_string(), VariantTable::default())]);
        let err = VariantTables::default()
            .with_overrides(overrides)
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownKind(_)));
    }

    #[test]
    fn test_empty_variant_uses_default() {
        let tables = VariantTables::builtin();
        assert_eq!(
            tables.resolve(Kind::Blockquote, Some(""), None),
            tables.resolve(Kind::Blockquote, None, None)
        );
        assert!(tables
            .resolve(Kind::Blockquote, Some(""), None)
            .ends_with("border-primary/90"));
    }

    #[test]
    fn test_with_table_requires_default_except_for_text() {
        let table = VariantTable {
            base: vec!["font-mono".into()],
            variants: BTreeMap::from([("flat".to_string(), "bg-muted".to_string())]),
            default: None,
        };
        let err = VariantTables::default()
            .with_table(Kind::Kbd, table.clone())
            .unwrap_err();
        assert!(matches!(err, ThemeError::MissingDefault { kind: Kind::Kbd }));

        let tables = VariantTables::default()
            .with_table(Kind::Text, table)
            .expect("Text may omit its default");
        assert_eq!(tables.resolve(Kind::Text, None, None), "font-mono");
    }

    #[test]
    fn test_builtin_defaults_follow_kind_rules() {
        for kind in Kind::ALL {
            let has_default = VariantTables::builtin().get(kind).default_variant().is_some();
            assert_eq!(has_default, kind != Kind::Text, "{}", kind);
        }
    }

    #[test]
    fn test_from_str_requires_every_kind() {
        let err = VariantTables::from_str("[text]\nbase = []\n").unwrap_err();
        assert!(matches!(err, ThemeError::MissingKind { kind: Kind::Heading }));
    }

    #[test]
    fn test_from_str_rejects_unknown_fields() {
        let content = DEFAULT_TABLES.replace("default = \"soft\"", "fallback = \"soft\"");
        assert!(matches!(
            VariantTables::from_str(&content),
            Err(ThemeError::Parse(_))
        ));
    }
}
