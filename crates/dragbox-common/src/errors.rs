use std::path::PathBuf;

use crate::id::PanelId;
use crate::types::Unit;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("{0} was attached without a parent container")]
    MissingParent(PanelId),

    #[error("{0} is not attached to a parent container")]
    NotAttached(PanelId),

    #[error("invalid {unit} value for `{field}`: {value:?} is not a number")]
    InvalidValue {
        field: &'static str,
        value: String,
        unit: Unit,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
