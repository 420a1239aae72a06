//! Answer choice extraction from `Choice*` columns.

use serde::Serialize;

use crate::record::Record;

/// Literal prefix marking a column as an answer choice.
pub const CHOICE_PREFIX: &str = "Choice";

/// One selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub identifier: String,
    pub text: String,
}

/// Insertion-ordered mapping of choice identifier to text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Choices {
    entries: Vec<Choice>,
}

impl Choices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a choice. An existing identifier keeps its position and takes
    /// the new text.
    pub fn insert(&mut self, identifier: impl Into<String>, text: impl Into<String>) {
        let identifier = identifier.into();
        let text = text.into();
        match self
            .entries
            .iter_mut()
            .find(|choice| choice.identifier == identifier)
        {
            Some(existing) => existing.text = text,
            None => self.entries.push(Choice { identifier, text }),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|choice| choice.identifier == identifier)
            .map(|choice| choice.text.as_str())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Choice> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Choices {
    type Item = &'a Choice;
    type IntoIter = std::slice::Iter<'a, Choice>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Identifier derived from a choice column name.
///
/// Returns `None` unless the column starts with [`CHOICE_PREFIX`]. The
/// identifier is the last character of the name, so `"Choice A"` and
/// `"ChoiceA"` both yield `"A"`. Multi-character suffixes are not parsed:
/// `"Choice AB"` yields `"B"`.
pub fn choice_identifier(column: &str) -> Option<String> {
    if !column.starts_with(CHOICE_PREFIX) {
        return None;
    }
    column.chars().last().map(String::from)
}

/// Collect the non-empty choices of a record in column order.
///
/// Values are trimmed; choice columns whose value is blank are skipped.
pub fn extract_choices(record: &Record) -> Choices {
    let mut choices = Choices::new();
    for (column, value) in record.iter() {
        let Some(identifier) = choice_identifier(column) else {
            continue;
        };
        let text = value.trim();
        if text.is_empty() {
            continue;
        }
        choices.insert(identifier, text);
    }
    choices
}
