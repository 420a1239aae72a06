//! QTI package output generation.
//!
//! - **Assessment items**: one QTI v2.1 `assessmentItem` document per question
//! - **Manifest**: the IMS Content-Packaging `imsmanifest.xml` listing every item
//!
//! Rendering is separated from writing so documents can be inspected without
//! touching the filesystem. Output is fully deterministic.

mod common;
mod error;
mod item_xml;
mod manifest_xml;

pub use common::{
    IMSCP_NS, LOM_NS, MANIFEST_IDENTIFIER, MATCH_CORRECT_TEMPLATE, QTI_NS, ensure_output_dir,
};
pub use error::{OutputError, Result};
pub use item_xml::{render_item, write_item};
pub use manifest_xml::{render_manifest, write_manifest};
