/// Orchestration error types
use kiln_config::ConfigError;
use thiserror::Error;

pub type BuildResult<T> = Result<T, BuildError>;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{operation} failed for variant '{variant}': {error}")]
    Collaborator {
        operation: String,
        variant: String,
        error: String,
    },
}

impl BuildError {
    /// Create a collaborator failure, propagated upward unmodified
    pub fn collaborator(
        operation: impl Into<String>,
        variant: impl Into<String>,
        error: impl ToString,
    ) -> Self {
        Self::Collaborator {
            operation: operation.into(),
            variant: variant.into(),
            error: error.to_string(),
        }
    }
}
