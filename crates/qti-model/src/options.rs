//! Rendering options.

use serde::Serialize;

/// How free text is embedded into generated XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
    /// Escape markup characters so every document is well-formed.
    #[default]
    Escaped,
    /// Embed text verbatim, as earlier releases did. Input containing `<` or
    /// `&` produces invalid XML.
    Raw,
}
