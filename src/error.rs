//! Error types for the quest UI layer

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestUiError {
    /// A view was built without the factory that creates its widgets.
    /// Nothing can be displayed until the configuration is fixed.
    #[error("no widget factory configured for the {view}")]
    MissingFactory { view: &'static str },

    /// The view still holds subscriptions on a different lifecycle source
    #[error("the {view} is attached to another quest source, detach it first")]
    AttachedElsewhere { view: &'static str },

    #[error("failed to load quest UI config {path:?}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("invalid color '{0}' (expected #rrggbb or #rrggbbaa)")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, QuestUiError>;
