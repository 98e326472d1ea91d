use thiserror::Error;

/// Failures turning user-supplied names into domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown colour scheme '{0}' (expected light, dark or auto)")]
    UnknownColorScheme(String),
    #[error("unknown slug style '{0}' (expected unicode, ascii or transliterate)")]
    UnknownSlugStyle(String),
}
