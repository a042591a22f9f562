//! Error types for theme loading and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::variant::{Kind, UnknownKind};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur when loading a theme or replacing variant tables
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `[variants.<name>]` table whose name is not a component kind
    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),

    /// A complete table set without an entry for `kind`
    #[error("missing variant table for '{kind}'")]
    MissingKind { kind: Kind },

    /// A table other than Text's without a default variant
    #[error("variant table for '{kind}' has no default variant")]
    MissingDefault { kind: Kind },

    /// A table whose default names a variant it does not define
    #[error("default variant '{variant}' of '{kind}' is not one of its variants")]
    InvalidDefault { kind: Kind, variant: String },
}

impl ThemeError {
    /// Source location of the error, when one is known
    pub fn span(&self) -> Option<Span> {
        match self {
            ThemeError::Parse(err) => err.span(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a source location fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };

        let message = match self {
            ThemeError::Parse(err) => err.message().to_string(),
            other => other.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid theme")
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
