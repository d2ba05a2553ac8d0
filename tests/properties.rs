//! Property tests for the key generation invariants.

use lexorank::{Alphabet, GeneratorConfig, Key, KeyGenerator};
use proptest::prelude::*;

fn digits() -> KeyGenerator {
    let alphabet = Alphabet::new("0123456789").unwrap();
    KeyGenerator::with_config(GeneratorConfig::new(alphabet).with_initial("555")).unwrap()
}

proptest! {
    /// Walking an arbitrary insertion path, every generated key stays
    /// strictly inside the bounds it was generated for.
    #[test]
    fn between_stays_strictly_bounded(path in prop::collection::vec(any::<bool>(), 1..48)) {
        let generator = KeyGenerator::new().unwrap();
        let mut prev: Option<Key> = None;
        let mut next: Option<Key> = None;

        for descend_left in path {
            let key = generator.between(prev.as_ref(), next.as_ref()).unwrap();
            if let Some(prev) = &prev {
                prop_assert!(prev < &key);
            }
            if let Some(next) = &next {
                prop_assert!(&key < next);
            }
            if descend_left {
                next = Some(key);
            } else {
                prev = Some(key);
            }
        }
    }

    /// `between` is a pure function of its configuration and arguments.
    #[test]
    fn between_is_deterministic(prev in "[0-9A-Za-z]{1,8}", next in "[0-9A-Za-z]{1,8}") {
        let generator = KeyGenerator::new().unwrap();
        let prev = Key::from(prev);
        let next = Key::from(next);

        let first = generator.between(Some(&prev), Some(&next));
        let second = generator.between(Some(&prev), Some(&next));
        prop_assert_eq!(first, second);
    }

    /// Generated keys only ever contain alphabet characters.
    #[test]
    fn generated_keys_stay_in_the_alphabet(path in prop::collection::vec(any::<bool>(), 1..32)) {
        let generator = digits();
        let mut prev: Option<Key> = None;
        let mut next: Option<Key> = None;

        for descend_left in path {
            let key = generator.between(prev.as_ref(), next.as_ref()).unwrap();
            prop_assert!(
                key.as_str().chars().all(|c| generator.alphabet().rank(c).is_some()),
                "{} contains characters outside the alphabet", key
            );
            if descend_left {
                next = Some(key);
            } else {
                prev = Some(key);
            }
        }
    }

    /// One-sided generation brackets the input key correctly.
    #[test]
    fn after_and_before_bound_correctly(key in "[1-9][0-9]{0,6}") {
        let generator = digits();
        let key = Key::from(key);

        let after = generator.after(&key).unwrap();
        prop_assert!(key < after);

        let before = generator.before(&key).unwrap();
        prop_assert!(before < key);
    }
}
