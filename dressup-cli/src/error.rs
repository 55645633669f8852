use dressup_catalog::CatalogError;
use dressup_compositor::ComposeError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Asset directory could not be scanned
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Stage or image failure
    #[error("{0}")]
    Compose(#[from] ComposeError),

    /// Category not present in the wardrobe
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn unknown_category(msg: impl Into<String>) -> Self {
        Self::UnknownCategory(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
