//! IMS Content-Packaging manifest output.

use std::path::{Path, PathBuf};

use tracing::debug;

use qti_model::{MANIFEST_FILE_NAME, ManifestEntry, TextMode};

use crate::common::{
    IMSCP_NS, LOM_NS, MANIFEST_IDENTIFIER, attr_value, ensure_output_dir, text_value,
    write_document,
};
use crate::error::Result;

/// `xsi:schemaLocation` value, kept byte-for-byte (including trailing spaces)
/// so existing packages diff cleanly.
const SCHEMA_LOCATION: &str = "http://www.imsglobal.org/xsd/imscp_v1p1
http://www.imsglobal.org/xsd/qti/qtiv2p1/qtiv2p1_imscpv1p2_v1p0.xsd
http://ltsc.ieee.org/xsd/LOM  
http://www.imsglobal.org/xsd/imsmd_loose_v1p3p2.xsd 
http://www.imsglobal.org/xsd/imsqti_metadata_v2p1
http://www.imsglobal.org/xsd/qti/qtiv2p1/imsqti_metadata_v2p1p1.xsd";

/// Render the manifest listing `entries` in the given order.
pub fn render_manifest(entries: &[ManifestEntry], mode: TextMode) -> String {
    let mut xml = format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<manifest identifier="{MANIFEST_IDENTIFIER}"
xmlns="{IMSCP_NS}"
xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
xsi:schemaLocation="{SCHEMA_LOCATION}">
  <metadata>
    <schema>QTIv2.1 Package</schema>
    <schemaversion>1.0.0</schemaversion>
    <lom xmlns="{LOM_NS}">
      <educational>
        <learningResourceType>
          <source>QTIv2.1</source>
          <value>QTI Package</value>
        </learningResourceType>
      </educational>
      <general>
        <identifier>
          <entry>{MANIFEST_IDENTIFIER}</entry>
        </identifier>
        <title>
          <string>Generated Quiz Questions</string>
        </title>
      </general>
      <lifeCycle>
        <contribute />
        <version>
          <string>1.0</string>
        </version>
      </lifeCycle>
    </lom>
  </metadata>
  <organizations />
  <resources>
"#
    );
    for entry in entries {
        xml.push_str(&render_resource(entry, mode));
    }
    xml.push_str("  </resources>\n</manifest>\n");
    xml
}

fn render_resource(entry: &ManifestEntry, mode: TextMode) -> String {
    let identifier = attr_value(&entry.identifier, mode);
    let href = attr_value(&entry.href, mode);
    let entry_text = text_value(&entry.identifier, mode);
    format!(
        r#"    <resource type="imsqti_item_xmlv2p1" identifier="{identifier}" href="{href}">
      <metadata>
        <lom xmlns="{LOM_NS}">
          <general>
            <identifier>
              <entry>{entry_text}</entry>
            </identifier>
            <title>{entry_text} Question</title>
          </general>
        </lom>
      </metadata>
      <file href="{href}" />
    </resource>
"#
    )
}

/// Write `<root>/imsmanifest.xml`, creating `root` if needed.
pub fn write_manifest(entries: &[ManifestEntry], root: &Path, mode: TextMode) -> Result<PathBuf> {
    ensure_output_dir(root)?;
    let path = root.join(MANIFEST_FILE_NAME);
    write_document(&path, &render_manifest(entries, mode))?;
    debug!(path = %path.display(), entries = entries.len(), "wrote manifest");
    Ok(path)
}
