//! Streaming CSV reader producing ordered records.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use qti_model::Record;

use crate::error::{IngestError, Result};

/// One data row together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based index among data rows (the header is not counted).
    pub row: usize,
    /// Physical line the row starts on, 1-based.
    pub line: u64,
    pub record: Record,
}

/// Forward-only iterator over the rows of a CSV file.
///
/// The first row is the header. Header cells are matched as written, apart
/// from a leading byte-order mark being removed, so `" Choice A"` is not a
/// choice column. Rows shorter than the header simply lack the trailing
/// columns; cells beyond the header width are dropped. An input without a
/// header row yields no rows.
pub struct RecordSource<R = File> {
    path: PathBuf,
    reader: Reader<R>,
    headers: Vec<String>,
    row: usize,
    finished: bool,
}

impl RecordSource<File> {
    /// Open a CSV file and read its header row.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
        Self::from_reader(path, file)
    }
}

impl<R: Read> RecordSource<R> {
    /// Wrap any reader. `path` is used for diagnostics only.
    pub fn from_reader(path: impl Into<PathBuf>, input: R) -> Result<Self> {
        let path = path.into();
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| IngestError::csv(&path, e))?
            .iter()
            .map(normalize_header)
            .collect();
        let finished = headers.iter().all(String::is_empty);
        if finished {
            warn!(path = %path.display(), "CSV file has no header row, no rows to read");
        } else {
            debug!(path = %path.display(), columns = headers.len(), "read CSV header");
        }
        Ok(Self {
            path,
            reader,
            headers,
            row: 0,
            finished,
        })
    }

    /// Normalized column names in header order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_record(&self, cells: &StringRecord) -> Record {
        Record::from_pairs(
            self.headers
                .iter()
                .zip(cells.iter())
                .map(|(column, value)| (column.as_str(), value)),
        )
    }
}

impl<R: Read> Iterator for RecordSource<R> {
    type Item = Result<SourceRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let mut cells = StringRecord::new();
        match self.reader.read_record(&mut cells) {
            Ok(true) => {
                self.row += 1;
                let line = cells.position().map_or(0, csv::Position::line);
                Some(Ok(SourceRow {
                    row: self.row,
                    line,
                    record: self.to_record(&cells),
                }))
            }
            Ok(false) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(IngestError::csv(&self.path, err)))
            }
        }
    }
}

/// Strip a leading byte-order mark from a header cell.
pub fn normalize_header(raw: &str) -> String {
    raw.strip_prefix('\u{feff}').unwrap_or(raw).to_string()
}
