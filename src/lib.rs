//! # lexorank
//!
//! Lexicographically sortable key generation for position-preserving
//! ordered lists.
//!
//! The crate generates string keys ("ranks") that let a caller insert an
//! item before, after, or strictly between any two existing items of an
//! ordered collection without renumbering anything else. Storage only ever
//! compares keys as plain strings, so any backend with string ordering can
//! keep the list sorted.
//!
//! - [`Alphabet`] — ordered character set with successor/predecessor and a
//!   circular midpoint operation
//! - [`KeyGenerator`] — computes a [`Key`] between two optional bounds,
//!   growing the key when no fixed-length midpoint exists
//! - [`Bucket`] — namespaces keys as `"<tag><separator><key>"` so
//!   independent lists share one generator without colliding
//!
//! ## Usage
//!
//! ```
//! use lexorank::KeyGenerator;
//!
//! # fn main() -> lexorank::Result<()> {
//! let generator = KeyGenerator::new()?;
//!
//! let first = generator.between(None, None)?;
//! let second = generator.after(&first)?;
//! let wedged = generator.between(Some(&first), Some(&second))?;
//! assert!(first < wedged && wedged < second);
//! # Ok(())
//! # }
//! ```
//!
//! Every operation is pure and synchronous. All types are immutable once
//! built, so a single instance is safe for unsynchronized concurrent use;
//! when the key space between two bounds is exhausted the engine reports a
//! recoverable [`Error`] and leaves rebalancing to the caller.

pub mod alphabet;
pub mod bucket;
pub mod error;
pub mod generator;
pub mod key;

// Re-export common types for convenience
pub use alphabet::{Alphabet, AlphabetError, ALPHANUMERIC};
pub use bucket::{Bucket, BucketConfig, BucketError};
pub use error::{Error, Result};
pub use generator::{GeneratorConfig, GeneratorError, KeyGenerator};
pub use key::{BucketKey, Key};
