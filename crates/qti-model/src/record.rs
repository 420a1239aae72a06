//! Input row representation.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Column holding the item identifier.
pub const ITEM_ID_COLUMN: &str = "Item ID";

/// Column holding the optional item title.
pub const TITLE_COLUMN: &str = "Title";

/// Column holding the question text.
pub const QUESTION_COLUMN: &str = "Question";

/// Column holding the identifier of the correct choice.
pub const CORRECT_CHOICE_COLUMN: &str = "Correct Choice";

/// One input row as ordered `(column, value)` pairs.
///
/// Lookups for a column that is not present return an empty string, so a
/// missing column behaves exactly like an empty cell. When a column name
/// repeats, the last cell wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(column, value)` pairs in column order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.push((column.into(), value.into()));
    }

    /// Raw value for `column`, or `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map_or("", |(_, value)| value.as_str())
    }

    /// Value for `column` with surrounding whitespace removed.
    pub fn trimmed(&self, column: &str) -> &str {
        self.get(column).trim()
    }

    /// Iterate `(column, value)` pairs in input column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (column, value)) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{column:?}: {value:?}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
