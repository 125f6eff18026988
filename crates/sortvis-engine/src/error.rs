//! Error types for sortvis-engine.

use thiserror::Error;

/// Result type for sortvis-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported back to the control surface.
///
/// None of these are fatal: the engine stays usable after any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The selected algorithm name is not recognized.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Start was requested with no algorithm selected.
    #[error("no algorithm selected")]
    NoAlgorithm,

    /// Requested array size is outside the configured range.
    #[error("invalid array size {size}: expected 1..={max}")]
    InvalidSize { size: usize, max: usize },

    /// The intent needs a trace but none has been built.
    #[error("no trace loaded")]
    NoTrace,

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// The session task has stopped.
    #[error("playback session closed")]
    SessionClosed,
}

impl From<sortvis_trace::Error> for Error {
    fn from(e: sortvis_trace::Error) -> Self {
        match e {
            sortvis_trace::Error::UnknownAlgorithm(name) => Error::UnknownAlgorithm(name),
        }
    }
}
