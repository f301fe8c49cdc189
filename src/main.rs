use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use glossa::config::Config;
use glossa::corpus::Corpus;
use glossa::text::ngram::NgramWidth;

/// Glossa: language identification via character n-gram frequency vectors.
///
/// Compares an unknown text sample against a set of reference language
/// folders using cosine similarity over n-gram histograms.
#[derive(Parser)]
#[command(name = "glossa", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify the unknown sample against every reference language
    Identify {
        /// Root directory: one subdirectory per language plus the
        /// unknown-sample subdirectory
        #[arg(long)]
        root: PathBuf,

        /// N-gram width, 1-3 (out-of-range values fall back to 2)
        #[arg(long, default_value = "2")]
        ngram: u8,

        /// Name of the unknown-sample subdirectory (overrides GLOSSA_UNKNOWN_DIR)
        #[arg(long)]
        unknown_dir: Option<String>,

        /// Number of comparisons to run in parallel (overrides GLOSSA_CONCURRENCY)
        #[arg(long)]
        concurrency: Option<usize>,

        /// Emit the full report as JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Build a single corpus from one folder and show its histogram
    Inspect {
        /// The language folder to inspect
        dir: PathBuf,

        /// N-gram width, 1-3 (out-of-range values fall back to 2)
        #[arg(long, default_value = "2")]
        ngram: u8,

        /// How many of the most frequent n-grams to show
        #[arg(long, default_value = "20")]
        top: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("glossa=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Identify {
            root,
            ngram,
            unknown_dir,
            concurrency,
            json,
        } => {
            let config = Config::load()?;
            let width = NgramWidth::new(ngram);
            let unknown_dir = unknown_dir.unwrap_or_else(|| config.unknown_dir.clone());
            let concurrency = concurrency.unwrap_or(config.concurrency);

            let labels = config.label_table()?;
            let sources = glossa::loader::load_sources(&root, &unknown_dir, &labels)?;

            let report = glossa::pipeline::identify::run(sources, width, concurrency).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                glossa::output::terminal::display_results(&report.results);
                glossa::output::terminal::display_outcome(&report.outcome);
            }
        }

        Commands::Inspect { dir, ngram, top } => {
            let config = Config::load()?;
            let width = NgramWidth::new(ngram);
            let labels = config.label_table()?;

            let folder_name = dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| dir.display().to_string());
            let label = labels.resolve(&folder_name).to_string();

            let units = glossa::loader::read_folder_units(&dir)?;
            let corpus = Corpus::build(label, width, &units);

            glossa::output::terminal::display_corpus(&corpus, top);
        }
    }

    Ok(())
}
