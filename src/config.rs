use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::labels::LabelTable;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override these values where both exist.
pub struct Config {
    /// Name of the subdirectory holding the unknown sample
    /// (GLOSSA_UNKNOWN_DIR, default "mystery")
    pub unknown_dir: String,
    /// Optional path to a JSON label-table override (GLOSSA_LABELS)
    pub labels_path: Option<PathBuf>,
    /// How many comparisons run concurrently (GLOSSA_CONCURRENCY, default 8)
    pub concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables. Everything has a
    /// default; nothing is required.
    pub fn load() -> Result<Self> {
        let concurrency = env::var("GLOSSA_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&c| c > 0)
            .unwrap_or(8);

        Ok(Self {
            unknown_dir: env::var("GLOSSA_UNKNOWN_DIR").unwrap_or_else(|_| "mystery".to_string()),
            labels_path: env::var("GLOSSA_LABELS").map(PathBuf::from).ok(),
            concurrency,
        })
    }

    /// Build the label table: builtin entries plus the configured override
    /// file, if any.
    pub fn label_table(&self) -> Result<LabelTable> {
        let mut table = LabelTable::builtin();
        if let Some(path) = &self.labels_path {
            table.merge_from_file(path)?;
        }
        Ok(table)
    }
}
