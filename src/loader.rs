// Filesystem corpus loading.
//
// Traversal is kept separate from corpus construction: this module only
// lists (label, text units) groups, so the core pipeline stays testable
// without touching a filesystem. One subdirectory per reference language,
// plus one designated subdirectory holding the unknown sample; each holds
// zero or more .txt files read as (lossy) UTF-8.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::labels::LabelTable;

/// Label used for the unknown sample's corpus.
pub const UNKNOWN_LABEL: &str = "unknown";

/// One language folder's worth of raw text, ready for corpus construction.
#[derive(Debug, Clone)]
pub struct CorpusSource {
    pub label: String,
    pub units: Vec<String>,
}

/// Everything `load_sources` found under the root.
#[derive(Debug)]
pub struct LoadedSources {
    /// The unknown sample's text units
    pub unknown: CorpusSource,
    /// One source per reference language folder
    pub references: Vec<CorpusSource>,
}

/// Walk the root directory and collect text units per language folder.
///
/// The subdirectory named `unknown_dir` becomes the unknown sample; every
/// other subdirectory becomes a reference language labeled through the
/// table. A missing or unreadable root is fatal; a missing unknown folder
/// is fatal too (there is nothing to identify). Individual unreadable files
/// are skipped with a warning.
pub fn load_sources(root: &Path, unknown_dir: &str, labels: &LabelTable) -> Result<LoadedSources> {
    if !root.is_dir() {
        bail!("Root directory not found: {}", root.display());
    }

    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read root directory {}", root.display()))?;

    let mut unknown: Option<CorpusSource> = None;
    let mut references = Vec::new();

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", root.display()))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let folder_name = entry.file_name().to_string_lossy().to_string();
        let units = read_text_units(&path, &folder_name);

        if folder_name == unknown_dir {
            unknown = Some(CorpusSource {
                label: UNKNOWN_LABEL.to_string(),
                units,
            });
        } else {
            references.push(CorpusSource {
                label: labels.resolve(&folder_name).to_string(),
                units,
            });
        }
    }

    let Some(unknown) = unknown else {
        bail!(
            "No '{unknown_dir}' subdirectory under {} — nothing to identify",
            root.display()
        );
    };

    info!(
        references = references.len(),
        unknown_units = unknown.units.len(),
        "Loaded corpus sources"
    );

    Ok(LoadedSources {
        unknown,
        references,
    })
}

/// Read one folder's .txt units directly (the `inspect` command). A missing
/// folder is an error here; there is no sibling corpus to fall back on.
pub fn read_folder_units(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        bail!("Directory not found: {}", dir.display());
    }
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(read_text_units(dir, &name))
}

/// Read every .txt file in one folder. Unreadable files are skipped with a
/// warning; the folder still contributes whatever units succeeded.
fn read_text_units(dir: &Path, folder_name: &str) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(folder = folder_name, error = %e, "Failed to list folder, treating as empty");
            return Vec::new();
        }
    };

    let mut units = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if !path.is_file() || !is_txt {
            continue;
        }

        match fs::read(&path) {
            Ok(bytes) => units.push(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                warn!(
                    file = %path.display(),
                    folder = folder_name,
                    error = %e,
                    "Failed to read file, skipping"
                );
            }
        }
    }

    units
}
