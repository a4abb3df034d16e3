use std::path::PathBuf;

use geoqc_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to access project file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize project: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to read column list: {0}")]
    Columns(#[from] csv::Error),

    #[error("no project file given (use --project or set {var})")]
    NoProject { var: &'static str },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
