//! Key newtypes.
//!
//! A [`Key`] is an ordered character sequence drawn from an alphabet; a
//! [`BucketKey`] prefixes a key with a namespace tag and a separator. Both
//! compare lexicographically as plain strings, which is the entire point:
//! any store that can order strings can order these keys.

use std::fmt;

/// A lexicographically sortable key.
///
/// Keys are immutable values; the generator always allocates a fresh key
/// rather than rewriting an existing one. Ordering is standard
/// lexicographic comparison of the inner string, where a key that is a
/// prefix of another sorts first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Key(String);

impl Key {
    /// Wraps a raw string as a key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A [`Key`] within a bucket namespace, `"<tag><separator><key>"`.
///
/// Bucket keys from the same tag order exactly like their bare keys; keys
/// from different tags never interleave because the tag prefix dominates
/// the comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BucketKey(String);

impl BucketKey {
    /// Wraps a raw string as a bucket key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The bucket key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the bucket key, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BucketKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BucketKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for BucketKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
