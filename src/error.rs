use std::path::PathBuf;

/// Errors raised by the simulator and its file-facing helpers.
#[derive(Debug, thiserror::Error)]
pub enum DdaError {
    /// The estimation window was never seeded. A caller bug, not a runtime
    /// condition: seed the model before asking for an estimate.
    #[error("illegal state: estimation window is empty, seed at least one temporary level")]
    EmptyWindow,

    #[error("invalid scenario: {reason}")]
    InvalidScenario { reason: String },

    #[error("failed to parse config at {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type DdaResult<T> = Result<T, DdaError>;
