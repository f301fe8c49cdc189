// Tie-aware ranking over a set of similarity results.
//
// A pure reduction: find the maximum similarity (exact equality on the
// already-rounded values), partition labels by whether they hit it, and
// classify the outcome. The reported angle always comes from a winning
// result — the minimum angle among the tied winners — never from an
// independent minimum over all results, so the verdict's similarity and
// angle can never refer to different languages.

use serde::Serialize;

use crate::similarity::SimilarityResult;

/// The verdict for one identification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RankedOutcome {
    /// The result set was empty — nothing to match against
    NoMatch,
    /// Exactly one language at the maximum similarity
    UniqueMatch {
        label: String,
        similarity: f64,
        angle: f64,
    },
    /// Two or more languages share the maximum similarity
    TiedMatch {
        labels: Vec<String>,
        similarity: f64,
        angle: f64,
    },
}

/// Reduce a result set to its verdict.
///
/// Order-independent and commutative over the input; an empty set is a
/// valid terminal case, not an error.
pub fn rank(results: &[SimilarityResult]) -> RankedOutcome {
    if results.is_empty() {
        return RankedOutcome::NoMatch;
    }

    let max_similarity = results
        .iter()
        .map(|r| r.similarity)
        .fold(f64::NEG_INFINITY, f64::max);

    let winners: Vec<&SimilarityResult> = results
        .iter()
        .filter(|r| r.similarity == max_similarity)
        .collect();

    // Angle of the winning result; for ties, the smallest among winners
    let angle = winners
        .iter()
        .map(|r| r.angle)
        .fold(f64::INFINITY, f64::min);

    let mut labels: Vec<String> = winners.iter().map(|r| r.label.clone()).collect();
    labels.sort();

    if labels.len() == 1 {
        RankedOutcome::UniqueMatch {
            label: labels.into_iter().next().unwrap_or_default(),
            similarity: max_similarity,
            angle,
        }
    } else {
        RankedOutcome::TiedMatch {
            labels,
            similarity: max_similarity,
            angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: &str, similarity: f64, angle: f64) -> SimilarityResult {
        SimilarityResult {
            label: label.to_string(),
            similarity,
            angle,
        }
    }

    #[test]
    fn test_empty_set_is_no_match() {
        assert_eq!(rank(&[]), RankedOutcome::NoMatch);
    }

    #[test]
    fn test_unique_match() {
        let results = vec![result("English", 0.95, 18.19487), result("French", 0.80, 36.86990)];
        match rank(&results) {
            RankedOutcome::UniqueMatch {
                label,
                similarity,
                angle,
            } => {
                assert_eq!(label, "English");
                assert_eq!(similarity, 0.95);
                assert_eq!(angle, 18.19487);
            }
            other => panic!("Expected UniqueMatch, got {other:?}"),
        }
    }

    #[test]
    fn test_tied_match() {
        let results = vec![
            result("English", 0.9, 25.84193),
            result("French", 0.9, 25.84193),
            result("German", 0.5, 60.0),
        ];
        match rank(&results) {
            RankedOutcome::TiedMatch {
                labels,
                similarity,
                angle,
            } => {
                assert_eq!(labels, vec!["English", "French"]);
                assert_eq!(similarity, 0.9);
                assert_eq!(angle, 25.84193);
            }
            other => panic!("Expected TiedMatch, got {other:?}"),
        }
    }

    #[test]
    fn test_angle_comes_from_winner_not_global_minimum() {
        // The loser has the smaller angle here (an artifact scenario);
        // the verdict must still report the winner's angle
        let results = vec![result("English", 0.9, 30.0), result("French", 0.5, 10.0)];
        match rank(&results) {
            RankedOutcome::UniqueMatch { label, angle, .. } => {
                assert_eq!(label, "English");
                assert_eq!(angle, 30.0);
            }
            other => panic!("Expected UniqueMatch, got {other:?}"),
        }
    }

    #[test]
    fn test_rank_is_order_independent() {
        let mut results = vec![
            result("German", 0.5, 60.0),
            result("French", 0.9, 25.84193),
            result("English", 0.9, 25.84193),
        ];
        let forward = rank(&results);
        results.reverse();
        assert_eq!(forward, rank(&results));
    }

    #[test]
    fn test_single_result_is_unique() {
        let results = vec![result("Greek", 0.3, 72.54239)];
        assert!(matches!(
            rank(&results),
            RankedOutcome::UniqueMatch { ref label, .. } if label == "Greek"
        ));
    }
}
