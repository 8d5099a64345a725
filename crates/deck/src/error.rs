//! Error types for the petra-deck crate.

use crate::value::ValueType;

/// Error type for all fallible operations in the petra-deck crate.
///
/// These are contract violations by the caller (reading a slot that does
/// not exist, asking for the wrong type); no strictness policy applies.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeckError {
    /// Returned when an index does not address a retrievable element.
    #[error("index {index} out of range for {target} (size {size})")]
    OutOfRange {
        /// What was indexed, e.g. `item DAY` or `keyword DATES`.
        target: String,
        /// The requested index.
        index: usize,
        /// Number of addressable elements.
        size: usize,
    },

    /// Returned when a record has no item with the requested name.
    #[error("record has no item named '{name}'")]
    UnknownItem {
        /// The requested item name.
        name: String,
    },

    /// Returned when a deck has no keyword with the requested name.
    #[error("keyword {name} is not in the deck")]
    UnknownKeyword {
        /// The requested keyword name.
        name: String,
    },

    /// Returned when an item is added to a record that already holds one
    /// with the same name.
    #[error("duplicate item name '{name}' in record")]
    DuplicateName {
        /// The repeated item name.
        name: String,
    },

    /// Returned when SI conversion is requested before any dimension was
    /// attached to the item.
    #[error("item {item} has no dimension attached")]
    MissingDimension {
        /// The item name.
        item: String,
    },

    /// Returned when an item is used with a value type it does not hold.
    #[error("item {item} holds {actual} values, not {expected}")]
    TypeMismatch {
        /// The item name.
        item: String,
        /// The type requested by the caller.
        expected: ValueType,
        /// The type the item was created with.
        actual: ValueType,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let err = DeckError::OutOfRange {
            target: "keyword TSTEP".to_string(),
            index: 3,
            size: 2,
        };
        assert_eq!(
            err.to_string(),
            "index 3 out of range for keyword TSTEP (size 2)"
        );
    }

    #[test]
    fn display_unknown_item() {
        let err = DeckError::UnknownItem {
            name: "FOO".to_string(),
        };
        assert_eq!(err.to_string(), "record has no item named 'FOO'");
    }

    #[test]
    fn display_unknown_keyword() {
        let err = DeckError::UnknownKeyword {
            name: "Bjarne".to_string(),
        };
        assert_eq!(err.to_string(), "keyword Bjarne is not in the deck");
    }

    #[test]
    fn display_duplicate_name() {
        let err = DeckError::DuplicateName {
            name: "DAY".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate item name 'DAY' in record");
    }

    #[test]
    fn display_missing_dimension() {
        let err = DeckError::MissingDimension {
            item: "HEI".to_string(),
        };
        assert_eq!(err.to_string(), "item HEI has no dimension attached");
    }

    #[test]
    fn display_type_mismatch() {
        let err = DeckError::TypeMismatch {
            item: "HEI".to_string(),
            expected: ValueType::Double,
            actual: ValueType::Int,
        };
        assert_eq!(err.to_string(), "item HEI holds INT values, not DOUBLE");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<DeckError>();
    }
}
