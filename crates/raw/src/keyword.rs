//! Raw keyword blocks.

use std::fmt;

use crate::record::RawRecord;

/// Longest keyword name the deck format allows.
const MAX_KEYWORD_LEN: usize = 8;

/// Whether a keyword's records were field-tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKeywordKind {
    /// Zero or more `/`-terminated, field-tokenized records.
    Tabular,
    /// Verbatim lines, one single-field record per line.
    Data,
}

/// A keyword name and the records that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyword {
    name: String,
    kind: RawKeywordKind,
    records: Vec<RawRecord>,
    line: usize,
}

impl RawKeyword {
    /// Creates an empty keyword block starting on `line`.
    pub fn new(name: impl Into<String>, kind: RawKeywordKind, line: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            records: Vec::new(),
            line,
        }
    }

    /// The keyword name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tabular or data.
    pub fn kind(&self) -> RawKeywordKind {
        self.kind
    }

    /// Returns `true` for a data block.
    pub fn is_data(&self) -> bool {
        self.kind == RawKeywordKind::Data
    }

    /// Appends a record.
    pub fn add_record(&mut self, record: RawRecord) {
        self.records.push(record);
    }

    /// Records in source order.
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Number of records.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// 1-based source line of the keyword name.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for RawKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        match self.kind {
            RawKeywordKind::Tabular => {
                for record in &self.records {
                    writeln!(f, " {record}")?;
                }
            }
            RawKeywordKind::Data => {
                for record in &self.records {
                    writeln!(f, "{}", record.text())?;
                }
                writeln!(f, "/")?;
            }
        }
        Ok(())
    }
}

/// Returns `true` if `text` is a valid keyword name.
///
/// A name is an uppercase ASCII letter followed by at most seven uppercase
/// letters, digits, `_`, `-` or `+`.
pub fn is_keyword_name(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_KEYWORD_LEN || !bytes[0].is_ascii_uppercase() {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|&b| b.is_ascii_uppercase() || b.is_ascii_digit() || matches!(b, b'_' | b'-' | b'+'))
}
