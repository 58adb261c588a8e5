use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by a completion collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ClaiError {
    #[error("no {setting} set for this directory and no default found: export {env}")]
    MissingSetting {
        setting: &'static str,
        env: &'static str,
    },

    #[error("{0}")]
    Usage(String),

    #[error("completion request failed")]
    Completion(#[source] BoxError),

    #[error("workspace {} still contains {} after removing all clai files", path.display(), leftovers.join(", "))]
    WorkspaceNotEmpty {
        path: PathBuf,
        leftovers: Vec<String>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClaiError>;
