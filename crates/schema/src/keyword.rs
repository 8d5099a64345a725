//! Keyword schemas.

use petra_deck::{DATA_ITEM, DeckItem, DeckKeyword, DeckRecord, ValueType};
use petra_raw::{RawKeyword, RawShape, is_keyword_name};
use tracing::debug;

use crate::context::Issue;
use crate::env::ParseEnv;
use crate::error::{Location, ParseError, SchemaError};
use crate::messages::MessageContainer;
use crate::record::{ParserRecord, RecordSize};

/// How a keyword's records are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordShape {
    /// A known number of records, each closed by `/`.
    Fixed,
    /// Any number of records, closed by a lone `/`.
    Repeating,
    /// Verbatim lines closed by a line holding only `/`.
    Data,
}

/// Schema for one keyword.
///
/// # Example
///
/// ```
/// use petra_deck::ValueType;
/// use petra_schema::{KeywordShape, ParserItem, ParserKW, ParserRecord};
///
/// let record = ParserRecord::from_items([
///     ParserItem::new("DAY", ValueType::Int),
///     ParserItem::new("MONTH", ValueType::String),
///     ParserItem::new("YEAR", ValueType::Int),
/// ])
/// .unwrap();
/// let dates = ParserKW::repeating("DATES", record);
/// assert!(dates.validate().is_ok());
/// assert_eq!(dates.shape(), KeywordShape::Repeating);
/// assert_eq!(dates.max_records(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParserKW {
    name: String,
    shape: KeywordShape,
    record: ParserRecord,
    min_records: usize,
    max_records: Option<usize>,
}

impl ParserKW {
    /// A keyword with exactly `n_records` records.
    pub fn fixed(name: impl Into<String>, n_records: usize, record: ParserRecord) -> Self {
        Self {
            name: name.into(),
            shape: KeywordShape::Fixed,
            record,
            min_records: n_records,
            max_records: Some(n_records),
        }
    }

    /// A keyword with no body at all.
    pub fn bodyless(name: impl Into<String>) -> Self {
        Self::fixed(name, 0, ParserRecord::new())
    }

    /// A keyword with any number of records closed by a lone `/`.
    pub fn repeating(name: impl Into<String>, record: ParserRecord) -> Self {
        Self {
            name: name.into(),
            shape: KeywordShape::Repeating,
            record,
            min_records: 0,
            max_records: None,
        }
    }

    /// A keyword whose body is kept as verbatim lines.
    pub fn data(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: KeywordShape::Data,
            record: ParserRecord::new(),
            min_records: 0,
            max_records: None,
        }
    }

    /// Sets the minimum record count.
    pub fn with_min_records(mut self, min: usize) -> Self {
        self.min_records = min;
        self
    }

    /// Sets the maximum record count (`None` for unbounded).
    pub fn with_max_records(mut self, max: Option<usize>) -> Self {
        self.max_records = max;
        self
    }

    /// Checks the name and the record bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidKeywordName`],
    /// [`SchemaError::InvalidRecordBounds`] or
    /// [`SchemaError::EmptyRepeatRecord`].
    pub fn validate(&self) -> Result<(), SchemaError> {
        if !is_keyword_name(&self.name) {
            return Err(SchemaError::InvalidKeywordName {
                name: self.name.clone(),
            });
        }
        if let Some(max) = self.max_records
            && self.min_records > max
        {
            return Err(SchemaError::InvalidRecordBounds {
                keyword: self.name.clone(),
                min: self.min_records,
                max,
            });
        }
        if self.record.record_size() == RecordSize::RepeatLast && self.record.is_empty() {
            return Err(SchemaError::EmptyRepeatRecord {
                keyword: self.name.clone(),
            });
        }
        Ok(())
    }

    /// The keyword name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record layout.
    pub fn shape(&self) -> KeywordShape {
        self.shape
    }

    /// The schema every record is parsed with.
    pub fn record(&self) -> &ParserRecord {
        &self.record
    }

    /// Minimum record count.
    pub fn min_records(&self) -> usize {
        self.min_records
    }

    /// Maximum record count, `None` when unbounded.
    pub fn max_records(&self) -> Option<usize> {
        self.max_records
    }

    /// How the tokenizer should delimit the keyword body.
    pub fn raw_shape(&self) -> RawShape {
        match (self.shape, self.max_records) {
            (KeywordShape::Fixed, Some(n)) => RawShape::Records(n),
            (KeywordShape::Fixed, None) | (KeywordShape::Repeating, _) => {
                RawShape::SlashTerminated
            }
            (KeywordShape::Data, _) => RawShape::Data,
        }
    }

    /// Converts a raw keyword into a typed keyword.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::KeywordMismatch`] for a raw keyword of another
    /// name, [`ParseError::Rejected`] when a record-count issue is fatal,
    /// and any error of [`ParserRecord::parse`].
    pub fn parse(
        &self,
        env: &ParseEnv<'_>,
        messages: &mut MessageContainer,
        raw: &RawKeyword,
    ) -> Result<DeckKeyword, ParseError> {
        if raw.name() != self.name {
            return Err(ParseError::KeywordMismatch {
                expected: self.name.clone(),
                actual: raw.name().to_string(),
            });
        }
        let location = Location::keyword(self.name.as_str(), raw.line());
        let mut keyword = DeckKeyword::new(self.name.as_str())
            .with_line(raw.line())
            .with_slash_terminated(self.raw_shape() == RawShape::SlashTerminated);

        if self.shape == KeywordShape::Data {
            keyword.set_data_keyword(true);
            for line in raw.records() {
                let mut item = DeckItem::new(DATA_ITEM, ValueType::String);
                item.push_back(line.text().to_string())?;
                keyword.add_record(DeckRecord::from_items([item])?);
            }
            debug!(keyword = %self.name, n_lines = keyword.size(), "parsed data keyword");
            return Ok(keyword);
        }

        let n_raw = raw.size();
        if n_raw < self.min_records {
            env.context().handle(
                Issue::MissingRecords,
                format!("expected at least {} record(s), found {n_raw}", self.min_records),
                &location,
                messages,
            )?;
        }
        let mut take = n_raw;
        if let Some(max) = self.max_records
            && n_raw > max
        {
            env.context().handle(
                Issue::ExtraRecords,
                format!("expected at most {max} record(s), found {n_raw}"),
                &location,
                messages,
            )?;
            take = max;
        }

        for (index, raw_record) in raw.records()[..take].iter().enumerate() {
            let record_location = location.with_record(index, raw_record.line());
            let record = self
                .record
                .parse(env, messages, &record_location, raw_record)?;
            keyword.add_record(record);
        }
        debug!(keyword = %self.name, n_records = keyword.size(), "parsed keyword");
        Ok(keyword)
    }
}
