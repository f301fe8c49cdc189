// Corpus — the n-gram frequency vector for one language (or the unknown
// sample).
//
// Construction is a single atomic pipeline: normalize -> tokenize ->
// histogram -> magnitude. The constructing task owns the histogram
// exclusively; once `build` returns, the corpus is immutable and can be
// shared freely across comparison tasks without locking.

use std::collections::HashMap;

use crate::text::ngram::{ngrams, NgramWidth};
use crate::text::normalize::normalize_units;

/// A fully constructed n-gram frequency vector.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Human-readable language name, or the unknown-sample label
    pub label: String,
    /// The n-gram width this corpus was built with
    pub width: NgramWidth,
    /// Normalized concatenation of all source units
    pub text: String,
    /// n-gram -> occurrence count; every key is exactly `width` chars
    pub histogram: HashMap<String, u32>,
    /// Euclidean norm of the histogram viewed as a sparse count vector.
    /// Zero iff the histogram is empty.
    pub magnitude: f64,
}

impl Corpus {
    /// Build a corpus from zero or more raw text units.
    ///
    /// An empty unit set is legal and yields an empty histogram with zero
    /// magnitude (a degenerate corpus — e.g. a language folder with no
    /// readable files). Unreadable units never reach this function; the
    /// loader skips them.
    pub fn build(label: impl Into<String>, width: NgramWidth, units: &[String]) -> Self {
        let text = normalize_units(units);

        let mut histogram: HashMap<String, u32> = HashMap::new();
        for token in ngrams(&text, width) {
            *histogram.entry(token).or_insert(0) += 1;
        }

        let magnitude = magnitude_of(&histogram);

        Self {
            label: label.into(),
            width,
            text,
            histogram,
            magnitude,
        }
    }

    /// Total number of tokens counted into the histogram.
    pub fn token_count(&self) -> u64 {
        self.histogram.values().map(|&c| c as u64).sum()
    }

    /// True when the corpus produced no qualifying tokens at all.
    pub fn is_degenerate(&self) -> bool {
        self.histogram.is_empty()
    }

    /// The `top` most frequent n-grams, ties broken alphabetically.
    pub fn top_ngrams(&self, top: usize) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .histogram
            .iter()
            .map(|(k, &v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(top);
        entries
    }
}

/// sqrt of the sum of squared counts.
fn magnitude_of(histogram: &HashMap<String, u32>) -> f64 {
    let sum_squares: f64 = histogram
        .values()
        .map(|&count| {
            let c = count as f64;
            c * c
        })
        .sum();
    sum_squares.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bigram() -> NgramWidth {
        NgramWidth::new(2)
    }

    #[test]
    fn test_histogram_counts_match_token_total() {
        let corpus = Corpus::build(
            "test",
            bigram(),
            &["the quick brown fox".to_string()],
        );
        // "the"->2, "quick"->4, "brown"->4, "fox"->2 tokens
        assert_eq!(corpus.token_count(), 12);
        let emitted = ngrams(&corpus.text, corpus.width).count() as u64;
        assert_eq!(corpus.token_count(), emitted);
    }

    #[test]
    fn test_all_keys_have_exact_width() {
        let corpus = Corpus::build("test", NgramWidth::new(3), &["normalization".to_string()]);
        for key in corpus.histogram.keys() {
            assert_eq!(key.chars().count(), 3);
        }
    }

    #[test]
    fn test_empty_units_build_degenerate_corpus() {
        let corpus = Corpus::build("empty", bigram(), &[]);
        assert!(corpus.is_degenerate());
        assert_eq!(corpus.magnitude, 0.0);
        assert_eq!(corpus.token_count(), 0);
    }

    #[test]
    fn test_magnitude_zero_iff_empty() {
        let empty = Corpus::build("empty", bigram(), &["a".to_string()]);
        assert!(empty.is_degenerate());
        assert_eq!(empty.magnitude, 0.0);

        let nonempty = Corpus::build("full", bigram(), &["ab".to_string()]);
        assert!(!nonempty.is_degenerate());
        assert!(nonempty.magnitude > 0.0);
    }

    #[test]
    fn test_magnitude_grows_with_repetition() {
        let once = Corpus::build("once", bigram(), &["ab".to_string()]);
        let thrice = Corpus::build("thrice", bigram(), &["ab ab ab".to_string()]);
        assert!(thrice.magnitude > once.magnitude);
        assert_eq!(thrice.magnitude, 3.0);
    }

    #[test]
    fn test_magnitude_is_euclidean_norm() {
        // "aba" with n=2 -> "ab":1, "ba":1 -> sqrt(2)
        let corpus = Corpus::build("test", bigram(), &["aba".to_string()]);
        assert!((corpus.magnitude - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_units_are_separated_before_tokenizing() {
        // No bigram may span the unit boundary: "ax" + "xb" must not
        // produce "xx"
        let corpus = Corpus::build(
            "test",
            bigram(),
            &["ax".to_string(), "xb".to_string()],
        );
        assert!(!corpus.histogram.contains_key("xx"));
        assert_eq!(corpus.histogram["ax"], 1);
        assert_eq!(corpus.histogram["xb"], 1);
    }

    #[test]
    fn test_top_ngrams_ordering() {
        let corpus = Corpus::build("test", bigram(), &["abab cd".to_string()]);
        // "ab":2, "ba":1, "cd":1
        let top = corpus.top_ngrams(2);
        assert_eq!(top[0], ("ab", 2));
        assert_eq!(top[1], ("ba", 1));
    }
}
