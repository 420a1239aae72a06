//! QTI v2.1 assessment item output.

use std::path::{Path, PathBuf};

use tracing::debug;

use qti_model::{Item, TextMode, item_file_name};

use crate::common::{
    MATCH_CORRECT_TEMPLATE, QTI_NS, attr_value, ensure_output_dir, text_value, write_document,
};
use crate::error::Result;

/// Render a single-choice `assessmentItem` document.
///
/// Choices appear in the item's choice order. The correct response is the
/// item's correct-choice identifier as given; scoring is delegated to the
/// standard `match_correct` template.
pub fn render_item(item: &Item, mode: TextMode) -> String {
    let identifier = attr_value(&item.identifier, mode);
    let title = attr_value(&item.title, mode);
    let correct_choice = text_value(&item.correct_choice, mode);
    let question = text_value(&item.question, mode);

    let mut xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<assessmentItem xmlns="{QTI_NS}" identifier="{identifier}" title="{title}" adaptive="false" timeDependent="false">
  <responseDeclaration identifier="RESPONSE" cardinality="single" baseType="identifier">
    <correctResponse>
      <value>{correct_choice}</value>
    </correctResponse>
  </responseDeclaration>
  <outcomeDeclaration identifier="SCORE" cardinality="single" baseType="float">
    <defaultValue>
      <value>0</value>
    </defaultValue>
    <normalMaximum>1</normalMaximum>
  </outcomeDeclaration>
  <itemBody>
    <p>{question}</p>
    <choiceInteraction responseIdentifier="RESPONSE" shuffle="false" maxChoices="1">
"#
    );
    for choice in &item.choices {
        xml.push_str(&format!(
            "      <simpleChoice identifier=\"{}\">{}</simpleChoice>\n",
            attr_value(&choice.identifier, mode),
            text_value(&choice.text, mode),
        ));
    }
    xml.push_str(&format!(
        r#"    </choiceInteraction>
  </itemBody>
  <responseProcessing template="{MATCH_CORRECT_TEMPLATE}" />
</assessmentItem>
"#
    ));
    xml
}

/// Write `<dir>/<item id>.xml`, creating `dir` if needed.
pub fn write_item(item: &Item, dir: &Path, mode: TextMode) -> Result<PathBuf> {
    ensure_output_dir(dir)?;
    let path = dir.join(item_file_name(&item.identifier));
    write_document(&path, &render_item(item, mode))?;
    debug!(item_id = %item.identifier, path = %path.display(), "wrote item");
    Ok(path)
}
