//! Row validation errors.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A requirement a row failed to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    ItemId,
    Question,
    CorrectChoice,
    /// No `Choice*` column holds a non-empty value.
    Choices,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ItemId => "Item ID",
            Self::Question => "Question",
            Self::CorrectChoice => "Correct Choice",
            Self::Choices => "choices",
        };
        f.write_str(label)
    }
}

/// A row that cannot become an item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing {}", join_fields(.missing))]
pub struct RowValidationError {
    pub missing: Vec<MissingField>,
}

fn join_fields(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RowValidationError {
            missing: vec![MissingField::ItemId, MissingField::Choices],
        };
        assert_eq!(err.to_string(), "missing Item ID, choices");
    }
}
