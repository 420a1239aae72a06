//! Validated assessment item.

use serde::Serialize;

use crate::choice::{Choices, extract_choices};
use crate::error::{MissingField, RowValidationError};
use crate::manifest::{ManifestEntry, item_href};
use crate::record::{CORRECT_CHOICE_COLUMN, ITEM_ID_COLUMN, QUESTION_COLUMN, Record, TITLE_COLUMN};

/// A single-choice question ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub identifier: String,
    /// May be empty.
    pub title: String,
    pub question: String,
    /// Not checked against `choices`.
    pub correct_choice: String,
    pub choices: Choices,
}

impl Item {
    /// Validate a record into an item.
    ///
    /// All fields are trimmed. The identifier, question, correct choice and
    /// at least one choice must be non-empty; every missing requirement is
    /// reported.
    pub fn from_record(record: &Record) -> Result<Self, RowValidationError> {
        let identifier = record.trimmed(ITEM_ID_COLUMN);
        let title = record.trimmed(TITLE_COLUMN);
        let question = record.trimmed(QUESTION_COLUMN);
        let correct_choice = record.trimmed(CORRECT_CHOICE_COLUMN);
        let choices = extract_choices(record);

        let mut missing = Vec::new();
        if identifier.is_empty() {
            missing.push(MissingField::ItemId);
        }
        if question.is_empty() {
            missing.push(MissingField::Question);
        }
        if correct_choice.is_empty() {
            missing.push(MissingField::CorrectChoice);
        }
        if choices.is_empty() {
            missing.push(MissingField::Choices);
        }
        if !missing.is_empty() {
            return Err(RowValidationError { missing });
        }

        Ok(Self {
            identifier: identifier.to_string(),
            title: title.to_string(),
            question: question.to_string(),
            correct_choice: correct_choice.to_string(),
            choices,
        })
    }

    /// Whether the correct-choice identifier names one of the choices.
    pub fn correct_choice_is_listed(&self) -> bool {
        self.choices.contains(&self.correct_choice)
    }

    /// Manifest entry for this item's file under the package root.
    pub fn manifest_entry(&self) -> ManifestEntry {
        ManifestEntry {
            identifier: self.identifier.clone(),
            href: item_href(&self.identifier),
        }
    }
}
