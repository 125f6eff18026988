//! Error types for sortvis-trace.

use thiserror::Error;

/// Result type for sortvis-trace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when selecting a trace generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name does not match any known algorithm.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
