/// Configuration core error types
use std::path::PathBuf;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read manifest {path}: {error}")]
    ManifestRead {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Invalid JSON in manifest {path}: {error}")]
    ManifestParse {
        path: PathBuf,
        error: serde_json::Error,
    },

    #[error("Variant not found: {0}")]
    VariantNotFound(String),

    #[error("Duplicate variant: {0}")]
    DuplicateVariant(String),

    #[error("Variant '{name}' does not specify a {axis} axis")]
    IncompleteVariant { name: String, axis: &'static str },

    #[error("No '{kind}' registration matches variant '{variant}'")]
    ManagerNotFound { kind: String, variant: String },
}

impl ConfigError {
    /// Create a manifest read error
    pub fn manifest_read(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::ManifestRead {
            path: path.into(),
            error,
        }
    }

    /// Create a manifest parse error
    pub fn manifest_parse(path: impl Into<PathBuf>, error: serde_json::Error) -> Self {
        Self::ManifestParse {
            path: path.into(),
            error,
        }
    }

    /// Create a manager lookup error
    pub fn manager_not_found(kind: impl Into<String>, variant: impl Into<String>) -> Self {
        Self::ManagerNotFound {
            kind: kind.into(),
            variant: variant.into(),
        }
    }
}
