//! Conversion pipeline: CSV rows in, QTI package out.
//!
//! Rows are processed strictly in input order:
//!
//! 1. **Read**: stream records from the input CSV
//! 2. **Validate**: build an [`Item`] or skip the row with a diagnostic
//! 3. **Write item**: `Items/Item_<id>/<id>.xml`, collecting a manifest entry
//! 4. **Write manifest**: `imsmanifest.xml` listing every written item
//!
//! A row is validated before any directory is created for it. An item that
//! cannot be written is left out of the manifest and the run carries on; a
//! manifest that cannot be written fails the run.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, debug_span, error, info, info_span, warn};

use qti_ingest::{RecordSource, SourceRow};
use qti_model::{Item, TextMode, identifier_has_path_separator, item_dir};
use qti_output::{ensure_output_dir, write_item, write_manifest};

use crate::types::{ConversionResult, FailedItem, SkippedRow, WrittenItem};

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "quiz_questions.csv";

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "output_qti";

/// Options for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub text_mode: TextMode,
    /// Validate and report without touching the filesystem.
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            text_mode: TextMode::default(),
            dry_run: false,
        }
    }
}

/// Convert the input CSV into a QTI package under the output directory.
///
/// # Errors
///
/// Fails when the input cannot be opened or read, when the output directory
/// cannot be created, or when the manifest cannot be written. Invalid rows
/// and item write failures are recorded in the result instead.
pub fn convert(options: &ConvertOptions) -> Result<ConversionResult> {
    let span = info_span!(
        "convert",
        input = %options.input.display(),
        output_dir = %options.output_dir.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let source = RecordSource::open(&options.input)
        .with_context(|| format!("open input {}", options.input.display()))?;
    if !options.dry_run {
        ensure_output_dir(&options.output_dir)
            .with_context(|| format!("create output directory {}", options.output_dir.display()))?;
    }

    let mut result = ConversionResult {
        input: options.input.clone(),
        output_dir: options.output_dir.clone(),
        dry_run: options.dry_run,
        rows_read: 0,
        manifest: None,
        items: Vec::new(),
        skipped: Vec::new(),
        failed: Vec::new(),
    };
    let mut seen_ids = HashSet::new();

    for row in source {
        let row = row.with_context(|| format!("read input {}", options.input.display()))?;
        result.rows_read += 1;
        let Some(item) = validate_row(&row, &mut result) else {
            continue;
        };
        if !seen_ids.insert(item.identifier.clone()) {
            warn!(
                item_id = %item.identifier,
                row = row.row,
                "duplicate item identifier, earlier item file is overwritten"
            );
        }
        emit_item(&item, row.row, options, &mut result);
    }
    info!(
        rows = result.rows_read,
        items = result.items.len(),
        skipped = result.skipped.len(),
        failed = result.failed.len(),
        duration_ms = start.elapsed().as_millis(),
        "items processed"
    );

    if !options.dry_run {
        let entries = result.manifest_entries();
        let manifest = write_manifest(&entries, &options.output_dir, options.text_mode)
            .with_context(|| format!("write manifest in {}", options.output_dir.display()))?;
        info!(path = %manifest.display(), entries = result.items.len(), "manifest written");
        result.manifest = Some(manifest);
    }
    Ok(result)
}

fn validate_row(row: &SourceRow, result: &mut ConversionResult) -> Option<Item> {
    match Item::from_record(&row.record) {
        Ok(item) => Some(item),
        Err(err) => {
            warn!(
                row = row.row,
                line = row.line,
                reason = %err,
                record = %row.record,
                "skipping invalid row"
            );
            result.skipped.push(SkippedRow {
                row: row.row,
                line: row.line,
                missing: err.missing,
                record: row.record.clone(),
            });
            None
        }
    }
}

fn emit_item(item: &Item, row: usize, options: &ConvertOptions, result: &mut ConversionResult) {
    let span = debug_span!("item", item_id = %item.identifier);
    let _guard = span.enter();
    if identifier_has_path_separator(&item.identifier) {
        warn!(row, "item identifier contains a path separator, file lands outside Items/");
    }
    if !item.correct_choice_is_listed() {
        debug!(
            correct_choice = %item.correct_choice,
            "correct choice does not name a listed choice"
        );
    }
    let written = WrittenItem {
        row,
        entry: item.manifest_entry(),
    };
    if options.dry_run {
        result.items.push(written);
        return;
    }
    let dir = item_dir(&options.output_dir, &item.identifier);
    match write_item(item, &dir, options.text_mode) {
        Ok(_) => result.items.push(written),
        Err(err) => {
            error!(path = %err.path().display(), error = %err, "failed to write item");
            result.failed.push(FailedItem {
                row,
                identifier: item.identifier.clone(),
                path: err.path().to_path_buf(),
                message: err.to_string(),
            });
        }
    }
}
