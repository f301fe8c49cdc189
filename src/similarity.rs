// Cosine similarity between two n-gram frequency vectors.
//
// The dot product runs over the intersection of the two histograms only —
// n-grams present on one side contribute zero, so iterating the smaller
// histogram and probing the larger is exact and cheap. Similarity and angle
// are rounded to 5 decimal places before being reported so that downstream
// tie comparisons are exact rather than floating-point-fragile.

use serde::Serialize;
use tracing::warn;

use crate::corpus::Corpus;

/// Number of decimal places scores are rounded to before reporting.
const PRECISION: f64 = 100_000.0;

/// The similarity of one (unknown, reference) pair.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResult {
    /// The reference language's label
    pub label: String,
    /// Cosine similarity, clamped to [-1, 1] and rounded to 5 decimals
    pub similarity: f64,
    /// Angular distance in degrees, rounded to 5 decimals
    pub angle: f64,
}

/// Compare the unknown sample against one reference corpus.
///
/// If either side has zero magnitude (no qualifying tokens) the cosine is
/// undefined; the policy here is similarity 0.0 / angle 90.0 — orthogonal —
/// rather than letting NaN leak into the output.
pub fn compare(unknown: &Corpus, reference: &Corpus) -> SimilarityResult {
    if unknown.magnitude == 0.0 || reference.magnitude == 0.0 {
        let degenerate = if unknown.magnitude == 0.0 {
            &unknown.label
        } else {
            &reference.label
        };
        warn!(
            corpus = %degenerate,
            "Corpus has no qualifying tokens, reporting zero similarity"
        );
        return SimilarityResult {
            label: reference.label.clone(),
            similarity: 0.0,
            angle: 90.0,
        };
    }

    let dot = dot_product(unknown, reference);

    // Clamp before arccos: accumulated rounding can push the quotient a
    // hair outside [-1, 1], which would make acos return NaN
    let similarity = (dot / (unknown.magnitude * reference.magnitude)).clamp(-1.0, 1.0);
    let angle = similarity.acos().to_degrees();

    SimilarityResult {
        label: reference.label.clone(),
        similarity: round5(similarity),
        angle: round5(angle),
    }
}

/// Sparse dot product over the histogram intersection.
fn dot_product(a: &Corpus, b: &Corpus) -> f64 {
    let (small, large) = if a.histogram.len() <= b.histogram.len() {
        (a, b)
    } else {
        (b, a)
    };

    small
        .histogram
        .iter()
        .filter_map(|(token, &count)| {
            large
                .histogram
                .get(token)
                .map(|&other| count as f64 * other as f64)
        })
        .sum()
}

/// Round to 5 decimal places.
pub fn round5(value: f64) -> f64 {
    (value * PRECISION).round() / PRECISION
}
