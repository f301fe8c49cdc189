// Sliding-window n-gram extraction over normalized text.
//
// Words are the space-separated chunks the normalizer produces. Each word of
// length >= n yields every contiguous n-character substring; shorter words
// yield nothing. Window boundaries are character boundaries, not bytes, so
// accented and non-Latin letters count as one position each.

use tracing::warn;

/// Default width when the requested one is out of range.
pub const DEFAULT_WIDTH: u8 = 2;

/// The n-gram width for a comparison run. Always in 1..=3.
///
/// All corpora in one comparison set share a single width; a histogram key
/// is only comparable to keys produced with the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramWidth(u8);

impl NgramWidth {
    /// Build a width from user input, coercing out-of-range values to the
    /// default of 2 rather than rejecting them.
    pub fn new(requested: u8) -> Self {
        if (1..=3).contains(&requested) {
            Self(requested)
        } else {
            warn!(
                requested,
                fallback = DEFAULT_WIDTH,
                "N-gram width out of range, using default"
            );
            Self(DEFAULT_WIDTH)
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for NgramWidth {
    fn default() -> Self {
        Self(DEFAULT_WIDTH)
    }
}

/// Iterate the n-grams of normalized text.
///
/// Lazy: nothing is allocated until the iterator is consumed. A word of
/// length L produces L - n + 1 tokens, each of exactly n characters,
/// overlapping its neighbor by n - 1.
pub fn ngrams(text: &str, width: NgramWidth) -> impl Iterator<Item = String> + '_ {
    let n = width.get();
    text.split(' ').flat_map(move |word| {
        let chars: Vec<char> = word.chars().collect();
        let count = if chars.len() >= n { chars.len() - n + 1 } else { 0 };
        (0..count)
            .map(move |i| chars[i..i + n].iter().collect::<String>())
            .collect::<Vec<_>>()
            .into_iter()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str, n: u8) -> Vec<String> {
        ngrams(text, NgramWidth::new(n)).collect()
    }

    #[test]
    fn test_window_count_and_overlap() {
        // Length 5, width 2 -> 4 windows overlapping by 1
        let tokens = collect("quick", 2);
        assert_eq!(tokens, vec!["qu", "ui", "ic", "ck"]);
        for t in &tokens {
            assert_eq!(t.chars().count(), 2);
        }
    }

    #[test]
    fn test_trigram_window_count() {
        // L - n + 1 = 3 for L=5, n=3
        assert_eq!(collect("brown", 3), vec!["bro", "row", "own"]);
    }

    #[test]
    fn test_short_words_are_dropped() {
        assert_eq!(collect("a to fox", 3), vec!["fox"]);
    }

    #[test]
    fn test_word_exactly_width_long() {
        assert_eq!(collect("ab", 2), vec!["ab"]);
    }

    #[test]
    fn test_unigrams() {
        assert_eq!(collect("ab c", 1), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(collect("", 2).is_empty());
    }

    #[test]
    fn test_multibyte_characters_count_as_one() {
        // "über" is 4 characters, so 3 bigrams
        assert_eq!(collect("über", 2), vec!["üb", "be", "er"]);
    }

    #[test]
    fn test_out_of_range_width_coerces_to_default() {
        assert_eq!(NgramWidth::new(0).get(), 2);
        assert_eq!(NgramWidth::new(7).get(), 2);
        assert_eq!(NgramWidth::new(3).get(), 3);
    }
}
