//! Record schemas and record parsing.

use petra_deck::DeckRecord;
use petra_raw::RawRecord;
use tracing::trace;

use crate::context::Issue;
use crate::env::ParseEnv;
use crate::error::{Location, ParseError, SchemaError};
use crate::fields::expand;
use crate::item::{ParserItem, SizeType};
use crate::messages::MessageContainer;

/// How a record treats fields beyond its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordSize {
    /// One field per `Single` item; leftovers are extra data.
    #[default]
    Fixed,
    /// Leftover fields keep being converted against the last item.
    RepeatLast,
}

/// Ordered, unique-named item schemas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParserRecord {
    items: Vec<ParserItem>,
    size: RecordSize,
}

impl ParserRecord {
    /// Creates an empty fixed-size record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `items`, in order.
    ///
    /// # Errors
    ///
    /// As for [`add_item`](Self::add_item).
    pub fn from_items(items: impl IntoIterator<Item = ParserItem>) -> Result<Self, SchemaError> {
        let mut record = Self::new();
        for item in items {
            record.add_item(item)?;
        }
        Ok(record)
    }

    /// Sets the record size policy.
    pub fn with_size(mut self, size: RecordSize) -> Self {
        self.size = size;
        self
    }

    /// Appends an item schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateItem`] for a repeated name,
    /// [`SchemaError::ItemAfterAll`] after an `All` item, and any error of
    /// [`ParserItem::validate`].
    pub fn add_item(&mut self, item: ParserItem) -> Result<(), SchemaError> {
        item.validate()?;
        if self.items.iter().any(|i| i.name() == item.name()) {
            return Err(SchemaError::DuplicateItem {
                name: item.name().to_string(),
            });
        }
        if let Some(last) = self.items.last()
            && last.size_type() == SizeType::All
        {
            return Err(SchemaError::ItemAfterAll {
                item: item.name().to_string(),
                after: last.name().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Number of item schemas.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` for a record without items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The record size policy.
    pub fn record_size(&self) -> RecordSize {
        self.size
    }

    /// The item schema at `index`.
    pub fn get(&self, index: usize) -> Option<&ParserItem> {
        self.items.get(index)
    }

    /// The item schema named `name`.
    pub fn get_by_name(&self, name: &str) -> Option<&ParserItem> {
        self.items.iter().find(|i| i.name() == name)
    }

    /// Iterates item schemas in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ParserItem> {
        self.items.iter()
    }

    /// Converts one raw record into a typed record.
    ///
    /// Items missing from the end of the record are defaulted (dummy
    /// defaults when the schema has none) and reported as
    /// [`Issue::MissingItems`]; fields left over after a fixed record are
    /// reported as [`Issue::ExtraData`] and dropped when tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] for a field that does not convert,
    /// [`ParseError::Unit`] for an unknown dimension and
    /// [`ParseError::Rejected`] when a reported issue is fatal.
    pub fn parse(
        &self,
        env: &ParseEnv<'_>,
        messages: &mut MessageContainer,
        location: &Location,
        raw: &RawRecord,
    ) -> Result<DeckRecord, ParseError> {
        let mut fields = expand(raw, location)?;
        let n_fields = fields.remaining();
        let mut missing = Vec::new();
        let mut record = DeckRecord::new();

        for (index, schema) in self.items.iter().enumerate() {
            let mut item = schema.deck_item();
            let is_last = index + 1 == self.items.len();
            let greedy = schema.size_type() == SizeType::All
                || (is_last && self.size == RecordSize::RepeatLast);

            if greedy {
                for (source, field) in fields.by_ref() {
                    schema.push_field(&mut item, field, &location.with_field(source))?;
                }
                if item.is_empty() && schema.size_type() == SizeType::Single {
                    missing.push(schema.name());
                    schema.push_default(&mut item)?;
                }
            } else if let Some((source, field)) = fields.next() {
                schema.push_field(&mut item, field, &location.with_field(source))?;
            } else {
                missing.push(schema.name());
                schema.push_default(&mut item)?;
            }

            schema.attach_dimension(&mut item, env, location)?;
            record.add_item(item)?;
        }

        if !missing.is_empty() {
            env.context().handle(
                Issue::MissingItems,
                format!("record ended early, defaulted {}", missing.join(", ")),
                location,
                messages,
            )?;
        }
        if let Some(source) = fields.source() {
            env.context().handle(
                Issue::ExtraData,
                format!(
                    "{} extra field(s) after the last item",
                    fields.remaining()
                ),
                &location.with_field(source),
                messages,
            )?;
        }
        trace!(%location, n_fields, n_items = record.size(), "parsed record");
        Ok(record)
    }
}
