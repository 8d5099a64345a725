//! A parsed keyword and its records.

use std::fmt;

use crate::error::DeckError;
use crate::record::DeckRecord;

/// Item name used for the single string item of data-keyword records.
pub const DATA_ITEM: &str = "DATA";

/// Item name used for the single string item of unknown-keyword records.
pub const RAW_ITEM: &str = "RAW";

/// One keyword occurrence in a deck.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckKeyword {
    name: String,
    records: Vec<DeckRecord>,
    known: bool,
    data: bool,
    slash_terminated: bool,
    line: Option<usize>,
}

impl DeckKeyword {
    /// Creates an empty keyword backed by a schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
            known: true,
            data: false,
            slash_terminated: false,
            line: None,
        }
    }

    /// Creates an empty keyword that no schema describes.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            known: false,
            ..Self::new(name)
        }
    }

    /// Sets the source line of the keyword name.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Marks the keyword as closed by a lone `/` after its records.
    pub fn with_slash_terminated(mut self, slash_terminated: bool) -> Self {
        self.slash_terminated = slash_terminated;
        self
    }

    /// The keyword name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if a schema was used to parse the keyword.
    pub fn is_known(&self) -> bool {
        self.known
    }

    /// Marks the keyword as a data block of verbatim lines.
    pub fn set_data_keyword(&mut self, data: bool) {
        self.data = data;
    }

    /// Returns `true` for a data block.
    pub fn is_data_keyword(&self) -> bool {
        self.data
    }

    /// Returns `true` if the record list ends with a lone `/`.
    pub fn is_slash_terminated(&self) -> bool {
        self.slash_terminated
    }

    /// Source line of the keyword name, if known.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Appends a record.
    pub fn add_record(&mut self, record: DeckRecord) {
        self.records.push(record);
    }

    /// The record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if `index >= size()`.
    pub fn get_record(&self, index: usize) -> Result<&DeckRecord, DeckError> {
        self.records.get(index).ok_or_else(|| DeckError::OutOfRange {
            target: format!("keyword {}", self.name),
            index,
            size: self.records.len(),
        })
    }

    /// Records in source order.
    pub fn records(&self) -> &[DeckRecord] {
        &self.records
    }

    /// Number of records.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the keyword has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, DeckRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a DeckKeyword {
    type Item = &'a DeckRecord;
    type IntoIter = std::slice::Iter<'a, DeckRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for DeckKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        if self.data {
            for record in &self.records {
                let line = record
                    .get_item_by_name(DATA_ITEM)
                    .and_then(|item| item.get_string(0))
                    .unwrap_or_default();
                writeln!(f, "{line}")?;
            }
            return writeln!(f, "/");
        }
        for record in &self.records {
            writeln!(f, " {record}")?;
        }
        if self.slash_terminated {
            writeln!(f, "/")?;
        }
        Ok(())
    }
}
