//! Error types for the petra-raw crate.

/// Error type for all fallible operations in the petra-raw crate.
///
/// Every variant is a hard failure: text that does not tokenize cannot be
/// handed to the schema layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RawError {
    /// Returned when a quote is opened but not closed on the same line.
    #[error("line {line}: unterminated quote in '{text}'")]
    UnterminatedQuote {
        /// 1-based source line.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// Returned for text that is neither a keyword nor part of an open keyword.
    #[error("line {line}: unexpected data '{text}' outside of any keyword")]
    UnexpectedData {
        /// 1-based source line.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// Returned when input ends in the middle of a record.
    #[error("line {line}: record in keyword {keyword} is not terminated by '/'")]
    UnterminatedRecord {
        /// Keyword owning the record.
        keyword: String,
        /// 1-based line where the record started.
        line: usize,
    },

    /// Returned when input ends inside a data block.
    #[error("line {line}: data keyword {keyword} is not terminated by '/'")]
    UnterminatedData {
        /// The data keyword.
        keyword: String,
        /// 1-based line of the keyword.
        line: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unterminated_quote() {
        let err = RawError::UnterminatedQuote {
            line: 3,
            text: "'NODIR 1 /".to_string(),
        };
        assert_eq!(err.to_string(), "line 3: unterminated quote in ''NODIR 1 /'");
    }

    #[test]
    fn display_unexpected_data() {
        let err = RawError::UnexpectedData {
            line: 1,
            text: "1 2 3 /".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 1: unexpected data '1 2 3 /' outside of any keyword"
        );
    }

    #[test]
    fn display_unterminated_record() {
        let err = RawError::UnterminatedRecord {
            keyword: "TSTEP".to_string(),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "line 7: record in keyword TSTEP is not terminated by '/'"
        );
    }

    #[test]
    fn display_unterminated_data() {
        let err = RawError::UnterminatedData {
            keyword: "NOTES".to_string(),
            line: 2,
        };
        assert_eq!(
            err.to_string(),
            "line 2: data keyword NOTES is not terminated by '/'"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<RawError>();
    }
}
