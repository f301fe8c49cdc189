// Output formatting — terminal display of results and verdicts.

pub mod terminal;

/// Format a score with the fixed 5-decimal precision used everywhere in
/// the output.
pub fn format_score(value: f64) -> String {
    format!("{value:.5}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_pads_to_five_decimals() {
        assert_eq!(format_score(1.0), "1.00000");
        assert_eq!(format_score(0.9), "0.90000");
        assert_eq!(format_score(25.84193), "25.84193");
    }
}
