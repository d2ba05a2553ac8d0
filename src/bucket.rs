//! Bucket namespacing for keys.
//!
//! A [`Bucket`] partitions the key space into independent ordered lists: a
//! bucket key is `"<tag><separator><key>"`, compared as a plain string, so
//! keys from different tags never interleave. For each operation the
//! bucket unwraps its bounds to bare keys, delegates ordering to its
//! [`KeyGenerator`], and re-attaches the resolved tag to the result.

use std::sync::Arc;

use thiserror::Error;

use crate::error::Result;
use crate::generator::KeyGenerator;
use crate::key::{BucketKey, Key};

/// Default separator between tag and key.
const DEFAULT_SEPARATOR: char = '|';

/// Default tag, used when both bounds are absent.
const DEFAULT_TAG: &str = "0";

/// Errors specific to the bucket layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BucketError {
    /// The configured default tag was empty
    #[error("default tag must not be empty")]
    EmptyDefaultTag,

    /// A bucket key had no tag/separator structure
    #[error("{key:?} is not a \"<tag>{separator}<key>\" bucket key")]
    MalformedKey { key: String, separator: char },

    /// The two bounds carried different tags
    #[error("bucket mismatch: {prev_tag:?} != {next_tag:?}")]
    Mismatch { prev_tag: String, next_tag: String },
}

/// Configuration for a [`Bucket`].
#[derive(Debug, Clone)]
pub struct BucketConfig {
    /// Separator between the tag and the key. Defaults to `'|'`.
    pub separator: char,

    /// Tag attached to generated keys when both bounds are absent.
    /// Defaults to `"0"`; must not be empty.
    pub default_tag: String,

    /// Generator backing this bucket.
    ///
    /// Shared, so several buckets can be driven by one generator; `None`
    /// builds a default generator.
    pub generator: Option<Arc<KeyGenerator>>,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            default_tag: DEFAULT_TAG.to_string(),
            generator: None,
        }
    }
}

/// Namespacing layer over a [`KeyGenerator`].
///
/// Immutable once built, like the generator it wraps.
#[derive(Debug, Clone)]
pub struct Bucket {
    separator: char,
    default_tag: String,
    generator: Arc<KeyGenerator>,
}

impl Bucket {
    /// Bucket with the default configuration: `'|'` separator, `"0"` tag,
    /// and a freshly built default generator.
    pub fn new() -> Result<Self> {
        Self::with_config(BucketConfig::default())
    }

    /// Bucket from an explicit configuration.
    pub fn with_config(config: BucketConfig) -> Result<Self> {
        let BucketConfig {
            separator,
            default_tag,
            generator,
        } = config;
        if default_tag.is_empty() {
            return Err(BucketError::EmptyDefaultTag.into());
        }
        let generator = match generator {
            Some(generator) => generator,
            None => Arc::new(KeyGenerator::new()?),
        };
        Ok(Self {
            separator,
            default_tag,
            generator,
        })
    }

    /// The generator backing this bucket.
    pub fn generator(&self) -> &KeyGenerator {
        &self.generator
    }

    /// Generates a bucket key strictly between the two bounds.
    ///
    /// Bounds that are present must carry the same tag. The result carries
    /// that tag, the tag of the single present bound, or the default tag
    /// when both bounds are absent.
    pub fn between(&self, prev: Option<&BucketKey>, next: Option<&BucketKey>) -> Result<BucketKey> {
        let prev = prev.map(|key| self.split(key)).transpose()?;
        let next = next.map(|key| self.split(key)).transpose()?;

        if let (Some((prev_tag, _)), Some((next_tag, _))) = (&prev, &next) {
            if prev_tag != next_tag {
                return Err(BucketError::Mismatch {
                    prev_tag: prev_tag.clone(),
                    next_tag: next_tag.clone(),
                }
                .into());
            }
        }

        let tag = prev
            .as_ref()
            .or(next.as_ref())
            .map(|(tag, _)| tag.as_str())
            .unwrap_or(self.default_tag.as_str());

        let key = self.generator.between(
            prev.as_ref().map(|(_, key)| key),
            next.as_ref().map(|(_, key)| key),
        )?;
        Ok(self.join(tag, &key))
    }

    /// Generates a bucket key that sorts after `key` within its tag.
    pub fn after(&self, key: &BucketKey) -> Result<BucketKey> {
        self.between(Some(key), None)
    }

    /// Generates a bucket key that sorts before `key` within its tag.
    pub fn before(&self, key: &BucketKey) -> Result<BucketKey> {
        self.between(None, Some(key))
    }

    /// Splits a bucket key into its tag and bare key.
    ///
    /// The split happens at the first separator occurrence, so a tag that
    /// itself contains the separator will not round-trip. A key with no
    /// separator, or with nothing before it, is malformed.
    pub fn split(&self, key: &BucketKey) -> Result<(String, Key)> {
        match key.as_str().split_once(self.separator) {
            Some((tag, bare)) if !tag.is_empty() => Ok((tag.to_string(), Key::from(bare))),
            _ => Err(BucketError::MalformedKey {
                key: key.to_string(),
                separator: self.separator,
            }
            .into()),
        }
    }

    /// Composes a bucket key from a tag and a bare key.
    pub fn join(&self, tag: &str, key: &Key) -> BucketKey {
        BucketKey::new(format!("{}{}{}", tag, self.separator, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::error::Error;
    use crate::generator::GeneratorConfig;

    fn bucket() -> Bucket {
        let alphabet = Alphabet::alphanumeric().unwrap();
        let generator =
            KeyGenerator::with_config(GeneratorConfig::new(alphabet).with_initial("555")).unwrap();
        Bucket::with_config(BucketConfig {
            generator: Some(Arc::new(generator)),
            ..BucketConfig::default()
        })
        .unwrap()
    }

    fn between(bucket: &Bucket, prev: Option<&str>, next: Option<&str>) -> Result<BucketKey> {
        let prev = prev.map(BucketKey::from);
        let next = next.map(BucketKey::from);
        bucket.between(prev.as_ref(), next.as_ref())
    }

    #[test]
    fn test_between_resolves_tags() {
        let bucket = bucket();

        // both absent: default tag and initial key
        assert_eq!(between(&bucket, None, None).unwrap().as_str(), "0|555");
        // one bound present: its tag is kept
        assert_eq!(
            between(&bucket, Some("0|555"), None).unwrap().as_str(),
            "0|556"
        );
        assert_eq!(
            between(&bucket, None, Some("1|555")).unwrap().as_str(),
            "1|554"
        );
        // both present with the same tag
        assert_eq!(
            between(&bucket, Some("2|555"), Some("2|557"))
                .unwrap()
                .as_str(),
            "2|556"
        );
    }

    #[test]
    fn test_mismatched_tags_are_rejected() {
        let bucket = bucket();
        assert!(matches!(
            between(&bucket, Some("0|555"), Some("1|555")),
            Err(Error::Bucket(BucketError::Mismatch { .. }))
        ));
    }

    #[test]
    fn test_malformed_keys_are_rejected() {
        let bucket = bucket();

        // no separator at all
        assert!(matches!(
            between(&bucket, Some("555"), None),
            Err(Error::Bucket(BucketError::MalformedKey { .. }))
        ));
        // nothing before the separator
        assert!(matches!(
            between(&bucket, None, Some("|555")),
            Err(Error::Bucket(BucketError::MalformedKey { .. }))
        ));
    }

    #[test]
    fn test_split_takes_first_separator() {
        let bucket = bucket();
        let (tag, key) = bucket.split(&BucketKey::from("a|b|c")).unwrap();
        assert_eq!(tag, "a");
        assert_eq!(key.as_str(), "b|c");
    }

    #[test]
    fn test_join_split_round_trip() {
        let bucket = bucket();
        let joined = bucket.join("todo", &Key::from("555"));
        assert_eq!(joined.as_str(), "todo|555");

        let (tag, key) = bucket.split(&joined).unwrap();
        assert_eq!(tag, "todo");
        assert_eq!(key.as_str(), "555");
    }

    #[test]
    fn test_after_and_before_wrappers() {
        let bucket = bucket();
        assert_eq!(
            bucket.after(&BucketKey::from("0|555")).unwrap().as_str(),
            "0|556"
        );
        assert_eq!(
            bucket.before(&BucketKey::from("0|555")).unwrap().as_str(),
            "0|554"
        );
    }

    #[test]
    fn test_custom_separator_and_tag() {
        let alphabet = Alphabet::alphanumeric().unwrap();
        let generator =
            KeyGenerator::with_config(GeneratorConfig::new(alphabet).with_initial("555")).unwrap();
        let bucket = Bucket::with_config(BucketConfig {
            separator: ':',
            default_tag: "inbox".to_string(),
            generator: Some(Arc::new(generator)),
        })
        .unwrap();

        assert_eq!(between(&bucket, None, None).unwrap().as_str(), "inbox:555");
        assert_eq!(
            between(&bucket, Some("inbox:555"), None).unwrap().as_str(),
            "inbox:556"
        );
    }

    #[test]
    fn test_one_generator_backs_many_buckets() {
        let generator = Arc::new(KeyGenerator::new().unwrap());
        let todo = Bucket::with_config(BucketConfig {
            default_tag: "todo".to_string(),
            generator: Some(Arc::clone(&generator)),
            ..BucketConfig::default()
        })
        .unwrap();
        let done = Bucket::with_config(BucketConfig {
            default_tag: "done".to_string(),
            generator: Some(Arc::clone(&generator)),
            ..BucketConfig::default()
        })
        .unwrap();

        // same generator, independent namespaces
        assert_eq!(between(&todo, None, None).unwrap().as_str(), "todo|UUUUUU");
        assert_eq!(between(&done, None, None).unwrap().as_str(), "done|UUUUUU");
    }

    #[test]
    fn test_empty_default_tag_is_rejected() {
        let result = Bucket::with_config(BucketConfig {
            default_tag: String::new(),
            ..BucketConfig::default()
        });
        assert!(matches!(
            result,
            Err(Error::Bucket(BucketError::EmptyDefaultTag))
        ));
    }
}
