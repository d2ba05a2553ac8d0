//! Key generation between optional bounds.
//!
//! A [`KeyGenerator`] owns an [`Alphabet`] and an initial key, and computes
//! a key strictly between two optional bounds. When no fixed-length key
//! fits, the result grows by one character; growth is what guarantees any
//! gap can be subdivided again later, no matter how densely keys have been
//! inserted.

use thiserror::Error;
use tracing::trace;

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::key::Key;

/// Length of the derived initial key.
const INITIAL_KEY_LENGTH: usize = 6;

/// Errors specific to key generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// An explicit initial key was empty
    #[error("initial key must not be empty")]
    EmptyInitial,

    /// A key contained a character that is not in the alphabet
    #[error("character {0:?} is not in the alphabet")]
    UnknownCharacter(char),

    /// The bounds were not in strictly ascending order
    #[error("prev key {prev:?} must be strictly less than next key {next:?}")]
    InvalidRange { prev: String, next: String },

    /// The alphabet has no character above its minimum to extend with
    #[error("alphabet has no character above its minimum; cannot extend {0:?}")]
    NoSuccessor(String),

    /// No key sorts before a key made entirely of minimum characters
    #[error("no key sorts before {0:?}: every character is the alphabet minimum")]
    AllMinimal(String),

    /// The bounds are adjacent: no key exists strictly between them
    #[error("no key exists strictly between {prev:?} and {next:?}")]
    NothingBetween { prev: String, next: String },
}

/// Configuration for a [`KeyGenerator`].
///
/// Plain struct with named fields, validated once when the generator is
/// built.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Character set keys are drawn from.
    pub alphabet: Alphabet,

    /// Key returned by `between` when both bounds are absent.
    ///
    /// `None` derives the default: the alphabet's midpoint character
    /// repeated six times.
    pub initial: Option<String>,
}

impl GeneratorConfig {
    /// Configuration with the given alphabet and the derived initial key.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            initial: None,
        }
    }

    /// Sets an explicit initial key.
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }
}

/// Generates lexicographically sortable keys between optional bounds.
///
/// Immutable once built: every operation reads only the configuration and
/// its arguments and allocates a fresh [`Key`], so a single generator is
/// safe for unsynchronized concurrent use.
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    alphabet: Alphabet,
    initial: Key,
}

impl KeyGenerator {
    /// Generator over the built-in alphanumeric alphabet with the derived
    /// initial key.
    pub fn new() -> Result<Self> {
        Self::with_config(GeneratorConfig::new(Alphabet::alphanumeric()?))
    }

    /// Generator from an explicit configuration.
    ///
    /// An explicit initial key must be non-empty and drawn entirely from
    /// the configured alphabet.
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        let GeneratorConfig { alphabet, initial } = config;
        let initial = match initial {
            Some(initial) => {
                if initial.is_empty() {
                    return Err(GeneratorError::EmptyInitial.into());
                }
                for c in initial.chars() {
                    if alphabet.rank(c).is_none() {
                        return Err(GeneratorError::UnknownCharacter(c).into());
                    }
                }
                Key::new(initial)
            }
            None => {
                let mid = alphabet.mid_rank();
                Key::new(alphabet.string_from_ranks(&[mid; INITIAL_KEY_LENGTH]))
            }
        };
        Ok(Self { alphabet, initial })
    }

    /// The configured alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The key returned when both bounds are absent.
    pub fn initial(&self) -> &Key {
        &self.initial
    }

    /// Generates a key strictly between the two bounds.
    ///
    /// An absent bound is unbounded in that direction. The result is
    /// strictly greater than `prev` (when present) and strictly less than
    /// `next` (when present); with both bounds absent it is the configured
    /// initial key.
    pub fn between(&self, prev: Option<&Key>, next: Option<&Key>) -> Result<Key> {
        match (prev, next) {
            (None, None) => Ok(self.initial.clone()),
            (Some(prev), None) => self.increment(prev),
            (None, Some(next)) => self.decrement(next),
            (Some(prev), Some(next)) => self.split(prev, next),
        }
    }

    /// Generates a key that sorts after `key`.
    pub fn after(&self, key: &Key) -> Result<Key> {
        self.between(Some(key), None)
    }

    /// Generates a key that sorts before `key`.
    pub fn before(&self, key: &Key) -> Result<Key> {
        self.between(None, Some(key))
    }

    /// Maps a key to alphabet ranks, rejecting foreign characters.
    fn ranks(&self, key: &Key) -> Result<Vec<usize>> {
        key.as_str()
            .chars()
            .map(|c| {
                self.alphabet
                    .rank(c)
                    .ok_or_else(|| GeneratorError::UnknownCharacter(c).into())
            })
            .collect()
    }

    // The first position from the right with room steps up one rank; the
    // tail resets to the minimum.
    fn increment(&self, prev: &Key) -> Result<Key> {
        let mut ranks = self.ranks(prev)?;
        let top = self.alphabet.len() - 1;
        for i in (0..ranks.len()).rev() {
            if ranks[i] < top {
                ranks[i] += 1;
                for rank in &mut ranks[i + 1..] {
                    *rank = 0;
                }
                return Ok(Key::new(self.alphabet.string_from_ranks(&ranks)));
            }
        }
        // Every character is already the maximum. Appending the minimum
        // would make the result adjacent to `prev` with no room for a later
        // insert between them, so the key grows with the second-smallest
        // character instead.
        if self.alphabet.len() < 2 {
            return Err(GeneratorError::NoSuccessor(prev.to_string()).into());
        }
        trace!(prev = %prev, "all characters at maximum, extending key");
        ranks.push(1);
        Ok(Key::new(self.alphabet.string_from_ranks(&ranks)))
    }

    // Mirror image of `increment`: step down at the first position from
    // the right with room, resetting the tail to the maximum.
    fn decrement(&self, next: &Key) -> Result<Key> {
        let mut ranks = self.ranks(next)?;
        let top = self.alphabet.len() - 1;
        for i in (0..ranks.len()).rev() {
            if ranks[i] > 0 {
                ranks[i] -= 1;
                for rank in &mut ranks[i + 1..] {
                    *rank = top;
                }
                return Ok(Key::new(self.alphabet.string_from_ranks(&ranks)));
            }
        }
        Err(GeneratorError::AllMinimal(next.to_string()).into())
    }

    fn split(&self, prev: &Key, next: &Key) -> Result<Key> {
        if prev.as_str() >= next.as_str() {
            return Err(GeneratorError::InvalidRange {
                prev: prev.to_string(),
                next: next.to_string(),
            }
            .into());
        }

        let mut prev_ranks = self.ranks(prev)?;
        let mut next_ranks = self.ranks(next)?;
        // Right-pad the shorter key with the minimum character; padding
        // never changes the relative order of the two keys.
        let width = prev_ranks.len().max(next_ranks.len());
        prev_ranks.resize(width, 0);
        next_ranks.resize(width, 0);

        if prev_ranks == next_ranks {
            // `next` is `prev` plus minimum padding; nothing fits between.
            return Err(GeneratorError::NothingBetween {
                prev: prev.to_string(),
                next: next.to_string(),
            }
            .into());
        }

        // Scan left to right for the first position whose circular
        // midpoint strictly clears prev's character. At the first
        // differing position the midpoint is always below next's
        // character; at later positions the prefix is already strictly
        // smaller than next's, so any upward step works.
        for i in 0..width {
            if prev_ranks[i] == next_ranks[i] {
                continue;
            }
            let mid = self.alphabet.midpoint_rank(prev_ranks[i], next_ranks[i]);
            if mid > prev_ranks[i] {
                let mut ranks = prev_ranks[..i].to_vec();
                ranks.push(mid);
                ranks.resize(width, 0);
                return Ok(Key::new(self.alphabet.string_from_ranks(&ranks)));
            }
        }

        // Adjacent at every position: no fixed-length key fits, so the
        // result grows by one character.
        trace!(prev = %prev, next = %next, "no fixed-length split, growing key");
        prev_ranks.push(self.alphabet.mid_rank());
        Ok(Key::new(self.alphabet.string_from_ranks(&prev_ranks)))
    }
}
