// Identification pipeline: build every corpus, compare the unknown sample
// against each reference, rank the results.
//
// Two fan-out stages. Stage 1 builds one corpus per language folder on the
// blocking pool (corpus construction is CPU-bound); all builds must finish
// before stage 2 starts, because comparison reads finalized magnitudes.
// Stage 2 fans out one comparison per reference and collects the results
// into a plain value — there is no process-wide result map. A failed worker
// in either stage aborts the run instead of silently dropping its result.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use crate::corpus::Corpus;
use crate::loader::{CorpusSource, LoadedSources};
use crate::rank::{rank, RankedOutcome};
use crate::similarity::{compare, SimilarityResult};
use crate::text::ngram::NgramWidth;

/// The full output of one identification run.
#[derive(Debug, Serialize)]
pub struct IdentifyReport {
    /// One entry per reference language, highest similarity first
    pub results: Vec<SimilarityResult>,
    /// The tie-aware verdict
    pub outcome: RankedOutcome,
}

/// Run the pipeline over already-loaded sources.
///
/// Separated from filesystem loading so the whole flow is testable with
/// in-memory text units.
pub async fn run(
    sources: LoadedSources,
    width: NgramWidth,
    concurrency: usize,
) -> Result<IdentifyReport> {
    let LoadedSources {
        unknown,
        references,
    } = sources;

    // Stage 1: one build task per corpus, wait for all of them
    let pb = ProgressBar::new(references.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Corpora [{bar:30}] {pos}/{len}")
            .unwrap(),
    );

    let unknown_task = spawn_build(unknown, width);
    let reference_tasks: Vec<_> = references
        .into_iter()
        .map(|source| spawn_build(source, width))
        .collect();

    let unknown_corpus = Arc::new(
        unknown_task
            .await
            .context("Corpus construction task failed")?,
    );
    pb.inc(1);

    let mut reference_corpora = Vec::with_capacity(reference_tasks.len());
    for task in reference_tasks {
        reference_corpora.push(task.await.context("Corpus construction task failed")?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        references = reference_corpora.len(),
        unknown_tokens = unknown_corpus.token_count(),
        width = width.get(),
        "Corpora built"
    );

    // Stage 2: one comparison per (unknown, reference) pair. Corpora are
    // immutable now, so tasks share them read-only.
    let raw: Vec<SimilarityResult> = stream::iter(reference_corpora.into_iter().map(|reference| {
        let unknown = Arc::clone(&unknown_corpus);
        async move { compare(&unknown, &reference) }
    }))
    .buffer_unordered(concurrency)
    .collect()
    .await;

    // Labels are unique per run (one folder per language); if two folders
    // mapped to the same label anyway, last write wins
    let mut by_label: HashMap<String, SimilarityResult> = HashMap::new();
    for result in raw {
        by_label.insert(result.label.clone(), result);
    }

    let mut results: Vec<SimilarityResult> = by_label.into_values().collect();
    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });

    let outcome = rank(&results);

    Ok(IdentifyReport { results, outcome })
}

fn spawn_build(source: CorpusSource, width: NgramWidth) -> tokio::task::JoinHandle<Corpus> {
    tokio::task::spawn_blocking(move || Corpus::build(source.label, width, &source.units))
}
