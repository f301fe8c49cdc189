// Directory-name to display-label resolution.
//
// Language folders are named with short codes ("en", "fr"); the table maps
// them to human-readable names. Unmapped names pass through unchanged, so a
// folder called "catalan" simply labels itself. The builtin table can be
// extended (or overridden) from a JSON object file.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Lookup table from folder name to display label.
#[derive(Debug, Clone)]
pub struct LabelTable {
    entries: HashMap<String, String>,
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LabelTable {
    /// The builtin two-letter-code table.
    pub fn builtin() -> Self {
        let entries = [
            ("al", "Albanian"),
            ("de", "German"),
            ("en", "English"),
            ("fr", "French"),
            ("gr", "Greek"),
            ("it", "Italian"),
        ]
        .into_iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();

        Self { entries }
    }

    /// Merge entries from a JSON object file ({"code": "Label", ...}) over
    /// the current table. Entries in the file win on collision.
    pub fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read label table {}", path.display()))?;
        let overrides: HashMap<String, String> = serde_json::from_str(&json)
            .with_context(|| format!("Invalid label table JSON in {}", path.display()))?;

        info!(count = overrides.len(), path = %path.display(), "Merging label overrides");
        self.entries.extend(overrides);
        Ok(())
    }

    /// Resolve a folder name to its display label.
    pub fn resolve<'a>(&'a self, folder_name: &'a str) -> &'a str {
        self.entries
            .get(folder_name)
            .map(String::as_str)
            .unwrap_or(folder_name)
    }
}
