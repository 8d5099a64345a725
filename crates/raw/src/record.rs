//! Raw fields and records.

use std::fmt;

use crate::error::RawError;

/// One whitespace- or quote-delimited field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    text: String,
    quoted: bool,
}

impl RawField {
    /// An unquoted field.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: false,
        }
    }

    /// A field that was written between single quotes.
    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: true,
        }
    }

    /// The field text, without delimiting quotes.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the field was quoted in the source.
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }
}

impl fmt::Display for RawField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "'{}'", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// The fields of one record, plus its source text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<RawField>,
    text: String,
    line: usize,
}

impl RawRecord {
    /// Builds a record from already-tokenized fields.
    pub fn new(fields: Vec<RawField>, text: impl Into<String>, line: usize) -> Self {
        Self {
            fields,
            text: text.into(),
            line,
        }
    }

    /// A data-block line kept verbatim as a single field.
    pub fn verbatim(text: impl Into<String>, line: usize) -> Self {
        let text = text.into();
        Self {
            fields: vec![RawField::new(text.clone())],
            text,
            line,
        }
    }

    /// Tokenizes a single record; a trailing `/` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`RawError::UnterminatedQuote`] for an unclosed quote.
    pub fn parse(text: &str) -> Result<Self, RawError> {
        let mut fields = Vec::new();
        let scan = scan_line(text, 1, &mut fields)?;
        Ok(Self::new(fields, scan.segment, 1))
    }

    /// The fields in source order.
    pub fn fields(&self) -> &[RawField] {
        &self.fields
    }

    /// Returns the field at `index`.
    pub fn get(&self, index: usize) -> Option<&RawField> {
        self.fields.get(index)
    }

    /// Number of fields.
    pub fn size(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` for an empty record (a lone `/`).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The record text as written, without the terminating `/`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based source line where the record started.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{field}")?;
        }
        f.write_str(if self.fields.is_empty() { "/" } else { " /" })
    }
}

/// Outcome of scanning one line of record text.
pub(crate) struct Scan<'a> {
    /// `true` when an unquoted `/` closed the record on this line.
    pub(crate) terminated: bool,
    /// The line text before the terminator, trimmed.
    pub(crate) segment: &'a str,
}

/// Appends the fields found on `line` to `fields`.
///
/// Scanning stops at the first unquoted `/`; the rest of the line is
/// ignored.
pub(crate) fn scan_line<'a>(
    line: &'a str,
    line_no: usize,
    fields: &mut Vec<RawField>,
) -> Result<Scan<'a>, RawError> {
    let bytes = line.as_bytes();
    let mut pos = 0;
    let mut end = line.len();
    let mut terminated = false;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii_whitespace() {
            pos += 1;
        } else if b == b'\'' {
            let start = pos + 1;
            let Some(close) = line[start..].find('\'') else {
                return Err(RawError::UnterminatedQuote {
                    line: line_no,
                    text: line.trim().to_string(),
                });
            };
            fields.push(RawField::quoted(&line[start..start + close]));
            pos = start + close + 1;
        } else if b == b'/' {
            terminated = true;
            end = pos;
            break;
        } else {
            let start = pos;
            while pos < bytes.len()
                && !bytes[pos].is_ascii_whitespace()
                && bytes[pos] != b'/'
                && bytes[pos] != b'\''
            {
                pos += 1;
            }
            fields.push(RawField::new(&line[start..pos]));
        }
    }

    Ok(Scan {
        terminated,
        segment: line[..end].trim(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(record: &RawRecord) -> Vec<&str> {
        record.fields().iter().map(RawField::as_str).collect()
    }

    #[test]
    fn parse_mixed_fields() {
        let record = RawRecord::parse("'NODIR'  'REVERS'  1  20 /").unwrap();
        assert_eq!(texts(&record), vec!["NODIR", "REVERS", "1", "20"]);
        assert_eq!(record.text(), "'NODIR'  'REVERS'  1  20");
        assert!(record.get(0).unwrap().is_quoted());
        assert!(!record.get(2).unwrap().is_quoted());
    }

    #[test]
    fn quoted_whitespace_preserved() {
        let record = RawRecord::parse(" ' VALUE ' ").unwrap();
        assert_eq!(texts(&record), vec![" VALUE "]);
    }

    #[test]
    fn slash_inside_quotes_is_text() {
        let record = RawRecord::parse("'a/b' 3 /").unwrap();
        assert_eq!(texts(&record), vec!["a/b", "3"]);
    }

    #[test]
    fn slash_attached_to_token_terminates() {
        let record = RawRecord::parse("1 2 3/ trailing comment").unwrap();
        assert_eq!(texts(&record), vec!["1", "2", "3"]);
        assert_eq!(record.text(), "1 2 3");
    }

    #[test]
    fn empty_record() {
        let record = RawRecord::parse("/").unwrap();
        assert!(record.is_empty());
        assert_eq!(record.to_string(), "/");
    }

    #[test]
    fn unterminated_quote_fails() {
        let err = RawRecord::parse("'NODIR 1 /").unwrap_err();
        assert!(matches!(err, RawError::UnterminatedQuote { line: 1, .. }));
    }

    #[test]
    fn display_requotes_quoted_fields() {
        let record = RawRecord::parse("'WELL 1' 3*  2.5 /").unwrap();
        assert_eq!(record.to_string(), "'WELL 1' 3* 2.5 /");
    }

    #[test]
    fn verbatim_is_single_field() {
        let record = RawRecord::verbatim("  free text / with slash", 4);
        assert_eq!(record.size(), 1);
        assert_eq!(record.get(0).unwrap().as_str(), "  free text / with slash");
        assert_eq!(record.line(), 4);
    }
}
