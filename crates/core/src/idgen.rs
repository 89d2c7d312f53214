//! Identifier synthesis for chats and messages.
//!
//! Raw values come from an [`IdSource`] and are mapped onto the
//! non-negative identifier space by [`normalize`]. The distribution of the
//! source is opaque to the rest of the crate.

use rand::Rng;

/// Source of raw signed 64-bit values used to mint identifiers.
///
/// Injected into the service at construction time so tests can substitute
/// a deterministic sequence for the thread-local generator.
pub trait IdSource: Send + Sync {
    /// Return the next raw value. May be negative; callers normalize.
    fn next_raw(&self) -> i64;
}

/// Production source backed by the thread-local rng.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngIdSource;

impl IdSource for ThreadRngIdSource {
    fn next_raw(&self) -> i64 {
        rand::thread_rng().gen()
    }
}

/// Map a raw signed value onto the non-negative identifier space.
///
/// `i64::MIN` has no positive two's-complement counterpart, so it maps to
/// `i64::MAX` instead of negating. Total over the full input domain.
pub fn normalize(raw: i64) -> i64 {
    if raw == i64::MIN {
        return i64::MAX;
    }

    if raw < 0 {
        return -raw;
    }

    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_non_negatives() {
        assert_eq!(normalize(0), 0);
        assert_eq!(normalize(1), 1);
        assert_eq!(normalize(42), 42);
        assert_eq!(normalize(i64::MAX), i64::MAX);
    }

    #[test]
    fn normalize_negates_negatives() {
        assert_eq!(normalize(-1), 1);
        assert_eq!(normalize(-42), 42);
        assert_eq!(normalize(i64::MIN + 1), i64::MAX);
    }

    #[test]
    fn normalize_maps_min_to_max() {
        assert_eq!(normalize(i64::MIN), i64::MAX);
    }

    #[test]
    fn normalize_output_is_never_negative() {
        let samples = [
            i64::MIN,
            i64::MIN + 1,
            -1_000_000_007,
            -1,
            0,
            1,
            1_000_000_007,
            i64::MAX - 1,
            i64::MAX,
        ];

        for raw in samples {
            assert!(normalize(raw) >= 0, "normalize({raw}) was negative");
        }
    }

    #[test]
    fn thread_rng_source_output_normalizes() {
        let source = ThreadRngIdSource;

        for _ in 0..64 {
            assert!(normalize(source.next_raw()) >= 0);
        }
    }
}
