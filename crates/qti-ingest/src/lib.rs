//! Reading quiz question tables.
//!
//! [`RecordSource`] streams the rows of a CSV file as [`qti_model::Record`]s,
//! keyed by the header row.

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::{RecordSource, SourceRow, normalize_header};
