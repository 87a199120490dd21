use thiserror::Error;

use crate::model::Field;

/// A raw field value that cannot be stored in the draft.
///
/// Shown inline next to the field; the previous value is kept.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldParseError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: Field, value: String },

    #[error("{field} must be a date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { field: Field, value: String },

    #[error("{field} must be true or false, got '{value}'")]
    InvalidFlag { field: Field, value: String },
}

impl FieldParseError {
    /// Stable i18n key for the inline message.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FieldParseError::UnknownField(_) => "error/inventory/unknown_field",
            FieldParseError::InvalidNumber { .. } => "error/inventory/invalid_number",
            FieldParseError::InvalidDate { .. } => "error/inventory/invalid_date",
            FieldParseError::InvalidFlag { .. } => "error/inventory/invalid_flag",
        }
    }
}

/// Errors from the ambient layers: config files and host scripts.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("script line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("no inventory with id '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Field(#[from] FieldParseError),
}
