//! Shared constants and helpers for QTI output.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::escape::{escape, partial_escape};

use qti_model::TextMode;

use crate::error::{OutputError, Result};

/// QTI v2.1 item namespace.
pub const QTI_NS: &str = "http://www.imsglobal.org/xsd/imsqti_v2p1";

/// IMS Content Packaging v1.1 namespace.
pub const IMSCP_NS: &str = "http://www.imsglobal.org/xsd/imscp_v1p1";

/// IEEE LOM metadata namespace.
pub const LOM_NS: &str = "http://ltsc.ieee.org/xsd/LOM";

/// Standard response-processing template for single-answer scoring.
pub const MATCH_CORRECT_TEMPLATE: &str =
    "http://www.imsglobal.org/question/qti_v2p1/rptemplates/match_correct";

/// Fixed identifier of the generated manifest.
pub const MANIFEST_IDENTIFIER: &str = "Manifest_qtiv2p1_EntryTest";

/// Value for use inside a double-quoted attribute.
pub(crate) fn attr_value(value: &str, mode: TextMode) -> Cow<'_, str> {
    match mode {
        TextMode::Escaped => escape(value),
        TextMode::Raw => Cow::Borrowed(value),
    }
}

/// Value for use as element content.
pub(crate) fn text_value(value: &str, mode: TextMode) -> Cow<'_, str> {
    match mode {
        TextMode::Escaped => partial_escape(value),
        TextMode::Raw => Cow::Borrowed(value),
    }
}

/// Create `dir` and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write a rendered document, replacing any existing file.
pub(crate) fn write_document(path: &Path, document: &str) -> Result<()> {
    let to_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(document.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)
}
