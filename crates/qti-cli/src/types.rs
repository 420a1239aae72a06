use std::path::PathBuf;

use serde::Serialize;

use qti_model::{ManifestEntry, MissingField, Record};

/// Outcome of one conversion run.
#[derive(Debug, Serialize)]
pub struct ConversionResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub rows_read: usize,
    /// `None` on dry runs.
    pub manifest: Option<PathBuf>,
    /// Items in the manifest, in input order.
    pub items: Vec<WrittenItem>,
    pub skipped: Vec<SkippedRow>,
    pub failed: Vec<FailedItem>,
}

impl ConversionResult {
    /// True when an item could not be written.
    pub fn has_errors(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Manifest entries of the written items, in input order.
    pub fn manifest_entries(&self) -> Vec<ManifestEntry> {
        self.items.iter().map(|item| item.entry.clone()).collect()
    }
}

/// An item listed in the manifest (planned only, on dry runs).
#[derive(Debug, Clone, Serialize)]
pub struct WrittenItem {
    pub row: usize,
    #[serde(flatten)]
    pub entry: ManifestEntry,
}

/// A row left out because it failed validation.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRow {
    pub row: usize,
    pub line: u64,
    pub missing: Vec<MissingField>,
    pub record: Record,
}

/// A valid item whose file could not be written.
#[derive(Debug, Clone, Serialize)]
pub struct FailedItem {
    pub row: usize,
    pub identifier: String,
    pub path: PathBuf,
    pub message: String,
}
