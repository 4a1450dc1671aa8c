//! Canonical word-list fixtures for deterministic tests.

/// Three short words that split into two banks at capacity 5.
#[must_use]
pub fn short_words() -> Vec<String> {
    ["ab", "cd", "ef"].iter().map(|w| w.to_string()).collect()
}

/// A small word list in dictionary order.
#[must_use]
pub fn sample_words() -> Vec<String> {
    [
        "aardvark", "abacus", "badger", "bramble", "cairn", "cobble", "dapple", "ember", "fjord",
        "gorse", "heather", "inkling", "juniper", "kestrel", "lichen", "marrow", "nettle",
        "osprey", "pewter", "quill", "rowan", "sorrel", "thistle", "umber", "vetch", "wicker",
        "yarrow", "zephyr",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

/// A single word of the given length, for oversize-record tests.
#[must_use]
pub fn long_word(len: usize) -> String {
    "a".repeat(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_words_are_sorted_and_normalized() {
        let words = sample_words();
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted);
        assert!(words.iter().all(|w| *w == w.trim().to_lowercase()));
    }

    #[test]
    fn long_word_has_requested_length() {
        assert_eq!(long_word(100).len(), 100);
    }
}
