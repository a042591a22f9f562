//! Theme files: document settings and variant table overrides
//!
//! A theme is a TOML file. Every section is optional; kinds without a
//! `[variants.<kind>]` table keep their built-in rules.
//!
//! ```toml
//! [metadata]
//! name = "Quiet"
//!
//! [document]
//! title = "Release notes"
//! dark = false
//!
//! [variants.code]
//! base = ["font-mono rounded px-1"]
//! default = "soft"
//!
//! [variants.code.variants]
//! soft = "bg-muted"
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::document::DocumentSettings;
use crate::error::ThemeError;
use crate::variant::{VariantTable, VariantTables};

/// Document settings and variant tables used for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub document: DocumentSettings,
    pub tables: VariantTables,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    document: DocumentSettings,
    #[serde(default)]
    variants: HashMap<String, VariantTable>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        let theme: Theme = content.parse()?;
        tracing::debug!(
            path = %path.display(),
            name = theme.name.as_deref().unwrap_or("<unnamed>"),
            "loaded theme"
        );
        Ok(theme)
    }

    /// Replace the document settings
    pub fn with_document(mut self, document: DocumentSettings) -> Self {
        self.document = document;
        self
    }

    /// Replace the variant tables
    pub fn with_tables(mut self, tables: VariantTables) -> Self {
        self.tables = tables;
        self
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    /// Parse a theme from TOML, falling back to built-in tables per kind
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlTheme = toml::from_str(content)?;

        let overridden: Vec<String> = parsed.variants.keys().cloned().collect();
        let tables = VariantTables::default().with_overrides(parsed.variants)?;
        if !overridden.is_empty() {
            tracing::debug!(kinds = ?overridden, "theme overrides variant tables");
        }

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            document: parsed.document,
            tables,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            document: DocumentSettings::default(),
            tables: VariantTables::default(),
        }
    }
}
