//! Manifest entries and the package path layout.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Directory under the package root holding one folder per item.
pub const ITEMS_DIR: &str = "Items";

/// File name of the content-packaging manifest.
pub const MANIFEST_FILE_NAME: &str = "imsmanifest.xml";

/// One written item as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub identifier: String,
    /// Path relative to the package root, always `/`-separated.
    pub href: String,
}

pub fn item_dir_name(identifier: &str) -> String {
    format!("Item_{identifier}")
}

pub fn item_file_name(identifier: &str) -> String {
    format!("{identifier}.xml")
}

/// `<root>/Items/Item_<id>`
///
/// The identifier is joined as-is, so one containing a path separator (for
/// example `../../x`) resolves outside `<root>/Items`. Callers can detect
/// this with [`identifier_has_path_separator`].
pub fn item_dir(root: &Path, identifier: &str) -> PathBuf {
    root.join(ITEMS_DIR).join(item_dir_name(identifier))
}

/// `Items/Item_<id>/<id>.xml`
pub fn item_href(identifier: &str) -> String {
    format!(
        "{ITEMS_DIR}/{}/{}",
        item_dir_name(identifier),
        item_file_name(identifier)
    )
}

/// Whether `identifier` would add path components to the item layout.
pub fn identifier_has_path_separator(identifier: &str) -> bool {
    identifier.contains(['/', '\\'])
}
