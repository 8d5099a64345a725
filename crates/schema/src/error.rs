//! Error types for the petra-schema crate.

use std::fmt;

use petra_deck::{DeckError, ValueType};
use petra_raw::RawError;
use petra_units::UnitError;

use crate::context::Issue;

/// Where in the deck a diagnostic applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Keyword name.
    pub keyword: String,
    /// 0-based record index within the keyword.
    pub record: Option<usize>,
    /// 0-based raw field index within the record, after repeat expansion.
    pub field: Option<usize>,
    /// 1-based source line.
    pub line: Option<usize>,
}

impl Location {
    /// Location of a whole keyword starting on `line`.
    pub fn keyword(name: impl Into<String>, line: usize) -> Self {
        Self {
            keyword: name.into(),
            line: Some(line),
            ..Self::default()
        }
    }

    /// Narrows the location to record `index` starting on `line`.
    pub fn with_record(&self, index: usize, line: usize) -> Self {
        Self {
            record: Some(index),
            line: Some(line),
            ..self.clone()
        }
    }

    /// Narrows the location to field `index`.
    pub fn with_field(&self, index: usize) -> Self {
        Self {
            field: Some(index),
            ..self.clone()
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "keyword {}", self.keyword)?;
        if let Some(record) = self.record {
            write!(f, ", record {record}")?;
        }
        if let Some(field) = self.field {
            write!(f, ", field {field}")?;
        }
        if let Some(line) = self.line {
            write!(f, " (line {line})")?;
        }
        Ok(())
    }
}

/// Error type for invalid schema definitions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// Returned when a dimension is attached to an item that does not hold
    /// doubles.
    #[error("item {item}: dimension '{dimension}' on a {value_type} item (only DOUBLE items carry dimensions)")]
    DimensionOnNonDouble {
        /// The item name.
        item: String,
        /// The attached dimension.
        dimension: String,
        /// The item value type.
        value_type: ValueType,
    },

    /// Returned when a default does not match the item value type.
    #[error("item {item}: default of type {actual} for a {expected} item")]
    DefaultTypeMismatch {
        /// The item name.
        item: String,
        /// The item value type.
        expected: ValueType,
        /// The type of the supplied default.
        actual: ValueType,
    },

    /// Returned when a record already holds an item with the same name.
    #[error("duplicate item '{name}' in record")]
    DuplicateItem {
        /// The repeated item name.
        name: String,
    },

    /// Returned when an item is appended after one that consumes all
    /// remaining fields.
    #[error("item {item} follows item {after}, which consumes all remaining fields")]
    ItemAfterAll {
        /// The rejected item.
        item: String,
        /// The preceding `All` item.
        after: String,
    },

    /// Returned for a keyword name the tokenizer could never recognize.
    #[error("invalid keyword name '{name}'")]
    InvalidKeywordName {
        /// The rejected name.
        name: String,
    },

    /// Returned when the minimum record count exceeds the maximum.
    #[error("keyword {keyword}: min_records {min} exceeds max_records {max}")]
    InvalidRecordBounds {
        /// The keyword name.
        keyword: String,
        /// Minimum record count.
        min: usize,
        /// Maximum record count.
        max: usize,
    },

    /// Returned when a repeat-last record has no item to repeat.
    #[error("keyword {keyword}: repeat-last record has no items")]
    EmptyRepeatRecord {
        /// The keyword name.
        keyword: String,
    },
}

/// Error type for a failed parse.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The text could not be tokenized. Always fatal.
    #[error(transparent)]
    Tokenize(#[from] RawError),

    /// A field could not be converted to the item type. Always fatal.
    #[error("{location}: cannot read '{value}' as {expected}")]
    InvalidValue {
        /// Where the field is.
        location: Location,
        /// The field text.
        value: String,
        /// What the field had to be.
        expected: String,
    },

    /// A policy-controlled issue was configured as fatal.
    #[error("{location}: {message} ({issue} is fatal)")]
    Rejected {
        /// The policy category.
        issue: Issue,
        /// Where the issue was found.
        location: Location,
        /// Description of the issue.
        message: String,
    },

    /// A keyword schema was handed a raw keyword of another name.
    #[error("schema for keyword {expected} cannot parse keyword {actual}")]
    KeywordMismatch {
        /// The schema name.
        expected: String,
        /// The raw keyword name.
        actual: String,
    },

    /// A dimension named by the schema is not in the unit system.
    #[error("{location}: {source}")]
    Unit {
        /// The item being parsed.
        location: Location,
        /// The lookup failure.
        source: UnitError,
    },

    /// The typed model rejected an operation.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Location {
        Location::keyword("DATES", 12).with_record(1, 14).with_field(2)
    }

    #[test]
    fn display_location() {
        assert_eq!(location().to_string(), "keyword DATES, record 1, field 2 (line 14)");
        assert_eq!(Location::keyword("TSTEP", 3).to_string(), "keyword TSTEP (line 3)");
    }

    #[test]
    fn display_dimension_on_non_double() {
        let err = SchemaError::DimensionOnNonDouble {
            item: "DAY".to_string(),
            dimension: "Length".to_string(),
            value_type: ValueType::Int,
        };
        assert_eq!(
            err.to_string(),
            "item DAY: dimension 'Length' on a INT item (only DOUBLE items carry dimensions)"
        );
    }

    #[test]
    fn display_default_type_mismatch() {
        let err = SchemaError::DefaultTypeMismatch {
            item: "YEAR".to_string(),
            expected: ValueType::Int,
            actual: ValueType::String,
        };
        assert_eq!(err.to_string(), "item YEAR: default of type STRING for a INT item");
    }

    #[test]
    fn display_record_bounds() {
        let err = SchemaError::InvalidRecordBounds {
            keyword: "EQUIL".to_string(),
            min: 3,
            max: 1,
        };
        assert_eq!(err.to_string(), "keyword EQUIL: min_records 3 exceeds max_records 1");
    }

    #[test]
    fn display_invalid_value() {
        let err = ParseError::InvalidValue {
            location: location(),
            value: "1982X".to_string(),
            expected: "INT".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "keyword DATES, record 1, field 2 (line 14): cannot read '1982X' as INT"
        );
    }

    #[test]
    fn display_rejected() {
        let err = ParseError::Rejected {
            issue: Issue::UnknownKeyword,
            location: Location::keyword("GRUPTREE", 5),
            message: "keyword is not registered".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "keyword GRUPTREE (line 5): keyword is not registered (unknown_keyword is fatal)"
        );
    }

    #[test]
    fn tokenize_errors_are_transparent() {
        let raw = RawError::UnexpectedData {
            line: 2,
            text: "1 2 /".to_string(),
        };
        let err = ParseError::from(raw.clone());
        assert_eq!(err.to_string(), raw.to_string());
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<SchemaError>();
        assert_bounds::<ParseError>();
    }
}
