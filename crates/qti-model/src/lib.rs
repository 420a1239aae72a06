//! Data model for converting tabular quiz questions to QTI v2.1.
//!
//! A [`Record`] is one input row. [`extract_choices`] derives the answer
//! options from its `Choice*` columns and [`Item::from_record`] validates the
//! row into an [`Item`] ready for rendering. Each written item is tracked by a
//! [`ManifestEntry`].

pub mod choice;
pub mod error;
pub mod item;
pub mod manifest;
pub mod options;
pub mod record;

pub use choice::{CHOICE_PREFIX, Choice, Choices, choice_identifier, extract_choices};
pub use error::{MissingField, RowValidationError};
pub use item::Item;
pub use manifest::{
    ITEMS_DIR, MANIFEST_FILE_NAME, ManifestEntry, identifier_has_path_separator, item_dir,
    item_dir_name, item_file_name, item_href,
};
pub use options::TextMode;
pub use record::{
    CORRECT_CHOICE_COLUMN, ITEM_ID_COLUMN, QUESTION_COLUMN, Record, TITLE_COLUMN,
};
