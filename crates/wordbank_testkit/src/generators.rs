//! Property-based test generators using proptest.
//!
//! Strategies for generating word lists and capacities that exercise the
//! packing invariants.

use proptest::prelude::*;
use wordbank_core::WordRecord;

/// Strategy for a single lowercase dictionary word.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,24}").expect("Invalid regex")
}

/// Strategy for a word record.
pub fn record_strategy() -> impl Strategy<Value = WordRecord> {
    word_strategy().prop_map(WordRecord::new)
}

/// Strategy for an ordered word list of up to `max_len` words.
pub fn word_list_strategy(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..max_len)
}

/// Strategy for bank capacities small enough to force rollovers.
pub fn capacity_strategy() -> impl Strategy<Value = usize> {
    1usize..128
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn words_are_lowercase_and_nonempty(word in word_strategy()) {
            prop_assert!(!word.is_empty());
            prop_assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        }

        #[test]
        fn capacities_are_positive(capacity in capacity_strategy()) {
            prop_assert!(capacity > 0);
        }

        #[test]
        fn records_match_their_text(record in record_strategy()) {
            prop_assert_eq!(record.len(), record.as_str().len());
        }
    }
}
