// Colored terminal output for similarity tables and verdicts.
//
// All terminal-specific formatting lives here: colors, column layout,
// verdict phrasing. main.rs delegates to these functions.

use colored::Colorize;

use crate::corpus::Corpus;
use crate::rank::RankedOutcome;
use crate::similarity::SimilarityResult;

use super::format_score;

/// Display the per-language similarity table, highest similarity first.
pub fn display_results(results: &[SimilarityResult]) {
    if results.is_empty() {
        println!("No reference languages found under the root directory.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Similarity ({} languages) ===", results.len()).bold()
    );
    println!();
    println!(
        "  {:<20} {:>12} {:>12}",
        "Language".dimmed(),
        "Similarity".dimmed(),
        "Angle".dimmed(),
    );
    println!("  {}", "-".repeat(46).dimmed());

    for result in results {
        println!(
            "  {:<20} {:>12} {:>12}",
            result.label,
            colorize_similarity(result.similarity),
            format_score(result.angle),
        );
    }
}

/// Display the final verdict.
pub fn display_outcome(outcome: &RankedOutcome) {
    match outcome {
        RankedOutcome::NoMatch => {
            println!("\n{}", "No language matches the unknown sample.".yellow());
        }
        RankedOutcome::UniqueMatch {
            label,
            similarity,
            angle,
        } => {
            println!(
                "\nExactly one nearest language: {}, similarity={}, angle={}",
                label.green().bold(),
                format_score(*similarity),
                format_score(*angle),
            );
        }
        RankedOutcome::TiedMatch {
            labels,
            similarity,
            angle,
        } => {
            println!(
                "\n{} languages tied at the highest similarity: {}, similarity={}, angle={}",
                labels.len(),
                labels.join(", ").yellow().bold(),
                format_score(*similarity),
                format_score(*angle),
            );
        }
    }
}

/// Display one corpus's histogram summary (the `inspect` command).
pub fn display_corpus(corpus: &Corpus, top: usize) {
    println!("\n{}", format!("=== Corpus: {} ===", corpus.label).bold());
    println!("  N-gram width:     {}", corpus.width.get());
    println!("  Distinct n-grams: {}", corpus.histogram.len());
    println!("  Total tokens:     {}", corpus.token_count());
    println!("  Magnitude:        {}", format_score(corpus.magnitude));

    if corpus.is_degenerate() {
        println!("\n  {}", "No qualifying tokens in this folder.".yellow());
        return;
    }

    println!("\n  Top {top} n-grams:");
    for (token, count) in corpus.top_ngrams(top) {
        println!("    {:<6} {}", token.bold(), count.to_string().dimmed());
    }
}

/// Color a similarity value: strong matches green, weak ones dimmed.
fn colorize_similarity(similarity: f64) -> colored::ColoredString {
    let text = format_score(similarity);
    if similarity >= 0.9 {
        text.green().bold()
    } else if similarity >= 0.5 {
        text.normal()
    } else {
        text.dimmed()
    }
}
