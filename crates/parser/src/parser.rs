//! The parse orchestrator.

use petra_deck::{Deck, DeckItem, DeckKeyword, DeckRecord, RAW_ITEM, ValueType};
use petra_raw::{RawDeck, RawKeyword, strip_comments};
use petra_schema::{
    Issue, KeywordRegistry, Location, MessageContainer, ParseContext, ParseEnv, ParseError,
    ParserKW, SchemaError,
};
use petra_units::{UnitSystem, UnitSystemKind};
use tracing::{debug, info};

use crate::builtin;

/// Turns deck text into a [`Deck`] using a registry of keyword schemas.
///
/// A `Parser` holds no per-parse state: the strictness policy and the
/// diagnostics sink are passed to every call, so one parser can serve
/// concurrent parses.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    registry: KeywordRegistry,
}

impl Parser {
    /// A parser that knows the built-in keywords.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if a built-in schema fails validation.
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            registry: builtin::registry()?,
        })
    }

    /// A parser that knows no keywords.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers a keyword schema, returning the one it replaces.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the schema fails validation.
    pub fn add_keyword(&mut self, keyword: ParserKW) -> Result<Option<ParserKW>, SchemaError> {
        self.registry.add(keyword)
    }

    /// Returns `true` if a schema named `name` is registered.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// The schema registry.
    pub fn registry(&self) -> &KeywordRegistry {
        &self.registry
    }

    /// Parses deck text.
    ///
    /// `--` comments are stripped before tokenizing.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Tokenize`] for text that does not tokenize and
    /// any error of [`parse_raw`](Self::parse_raw).
    pub fn parse_string(
        &self,
        text: &str,
        context: &ParseContext,
        messages: &mut MessageContainer,
    ) -> Result<Deck, ParseError> {
        let raw = RawDeck::parse(&strip_comments(text), &self.registry)?;
        debug!(n_keywords = raw.size(), "tokenized");
        self.parse_raw(&raw, context, messages)
    }

    /// Converts a tokenized deck.
    ///
    /// Keywords are parsed in order. Unit-system keywords switch the unit
    /// system used for later keywords; unregistered keywords go through
    /// [`Issue::UnknownKeyword`] and, when tolerated, keep their raw fields
    /// as strings.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Rejected`] when an issue is fatal under
    /// `context`, and any error of [`ParserKW::parse`].
    pub fn parse_raw(
        &self,
        raw: &RawDeck,
        context: &ParseContext,
        messages: &mut MessageContainer,
    ) -> Result<Deck, ParseError> {
        let default_units = UnitSystem::metric();
        let mut active_units = UnitSystem::metric();
        let mut deck = Deck::new();

        for raw_keyword in raw {
            if let Some(kind) = UnitSystemKind::from_keyword(raw_keyword.name())
                && kind != active_units.kind()
            {
                debug!(units = kind.keyword(), line = raw_keyword.line(), "unit system switched");
                active_units = UnitSystem::new(kind);
            }

            let keyword = match self.registry.get(raw_keyword.name()) {
                Some(schema) => {
                    let env = ParseEnv::new(context, &active_units, &default_units);
                    schema.parse(&env, messages, raw_keyword)?
                }
                None => {
                    let location = Location::keyword(raw_keyword.name(), raw_keyword.line());
                    context.handle(
                        Issue::UnknownKeyword,
                        "no schema registered for keyword",
                        &location,
                        messages,
                    )?;
                    unknown_keyword(raw_keyword)?
                }
            };
            deck.add_keyword(keyword);
        }

        deck.set_active_unit_system(active_units);
        info!(
            n_keywords = deck.size(),
            n_messages = messages.len(),
            units = deck.active_unit_system().name(),
            "parsed deck"
        );
        Ok(deck)
    }
}

/// Keeps every raw field of an unregistered keyword as a string.
fn unknown_keyword(raw: &RawKeyword) -> Result<DeckKeyword, ParseError> {
    let mut keyword = DeckKeyword::unknown(raw.name()).with_line(raw.line());
    for raw_record in raw.records() {
        let mut item = DeckItem::new(RAW_ITEM, ValueType::String);
        for field in raw_record.fields() {
            item.push_back(field.as_str().to_string())?;
        }
        keyword.add_record(DeckRecord::from_items([item])?);
    }
    debug!(keyword = raw.name(), n_records = keyword.size(), "kept unknown keyword");
    Ok(keyword)
}
