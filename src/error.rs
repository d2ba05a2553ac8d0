//! Crate-scoped error handling for lexorank.
//!
//! This module provides a unified error type for public APIs while keeping
//! the precise per-module error kinds inspectable.

use thiserror::Error;

use crate::alphabet::AlphabetError;
use crate::bucket::BucketError;
use crate::generator::GeneratorError;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type exposed to users of the crate.
///
/// Every failure is local and recoverable; nothing in the library panics
/// or retries internally. Match on the wrapped module error to inspect the
/// specific kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Errors from alphabet construction or validation
    #[error("alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Errors from key generation
    #[error("key generation error: {0}")]
    Generator(#[from] GeneratorError),

    /// Errors from the bucket namespacing layer
    #[error("bucket error: {0}")]
    Bucket(#[from] BucketError),
}
