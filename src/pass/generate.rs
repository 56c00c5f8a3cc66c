//! Password generation.

use thiserror::Error;

use super::charset::ClassSet;
use crate::rand::Rand;

/// No character class is enabled, so the sampling pool is empty.
/// Checked before any draw happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Select at least one character set")]
pub struct EmptyAlphabet;

/// Generate one password of `length` characters drawn uniformly, with
/// replacement, from the enabled classes.
///
/// `length` is expected to be validated by the caller; this function only
/// guards the pool itself.
pub fn generate(classes: &ClassSet, length: usize) -> Result<String, EmptyAlphabet> {
    if !classes.any_enabled() {
        return Err(EmptyAlphabet);
    }

    let mut pool = classes.pool();
    shuffle(&mut pool);

    let bytes: Vec<u8> = (0..length).map(|_| random_byte(&pool, Rand::get())).collect();
    // Safety: pool is all ASCII
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}

#[inline]
fn random_byte(pool: &[u8], rng: usize) -> u8 {
    pool[rng % pool.len()]
}

#[inline]
fn shuffle(pool: &mut [u8]) {
    for i in (1..pool.len()).rev() {
        let j = Rand::get() % (i + 1);
        pool.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

    fn only(lowercase: bool, uppercase: bool, digits: bool, symbols: bool) -> ClassSet {
        ClassSet {
            lowercase,
            uppercase,
            digits,
            symbols,
        }
    }

    fn in_class(class: &str, c: char) -> bool {
        class.contains(c)
    }

    #[test]
    fn result_has_requested_length() {
        for length in 4..=16 {
            let pass = generate(&ClassSet::default(), length).unwrap();
            assert_eq!(pass.chars().count(), length);
        }
    }

    #[test]
    fn lowercase_only_never_leaks_other_classes() {
        let pass = generate(&only(true, false, false, false), 12).unwrap();
        assert!(pass.chars().all(|c| in_class(LOWERCASE, c)));
    }

    #[test]
    fn digits_only_at_minimum_length() {
        // Boundary: length 4, only digits enabled.
        let pass = generate(&only(false, false, true, false), 4).unwrap();
        assert_eq!(pass.len(), 4);
        assert!(pass.chars().all(|c| in_class(DIGITS, c)));
    }

    #[test]
    fn all_classes_at_maximum_length() {
        // Boundary: length 16, all four classes, 73-char pool.
        let set = only(true, true, true, true);
        assert_eq!(set.size(), 73);
        let pass = generate(&set, 16).unwrap();
        assert_eq!(pass.len(), 16);
        assert!(pass.chars().all(|c| {
            in_class(LOWERCASE, c)
                || in_class(UPPERCASE, c)
                || in_class(DIGITS, c)
                || in_class(SYMBOLS, c)
        }));
    }

    #[test]
    fn empty_class_set_fails_before_sampling() {
        assert_eq!(
            generate(&only(false, false, false, false), 8),
            Err(EmptyAlphabet)
        );
    }

    #[test]
    fn repeated_calls_both_satisfy_contract() {
        // Outputs may differ (no caching), but each independently holds the
        // length and membership properties.
        let set = only(true, false, true, false);
        let a = generate(&set, 10).unwrap();
        let b = generate(&set, 10).unwrap();
        for pass in [&a, &b] {
            assert_eq!(pass.len(), 10);
            assert!(pass
                .chars()
                .all(|c| in_class(LOWERCASE, c) || in_class(DIGITS, c)));
        }
    }
}
