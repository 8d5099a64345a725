//! Name-keyed keyword schema registry.

use std::collections::BTreeMap;

use petra_raw::{RawShape, ShapeLookup};

use crate::error::SchemaError;
use crate::keyword::ParserKW;

/// Keyword schemas by exact name.
///
/// The registry is filled before parsing and only read during a parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordRegistry {
    keywords: BTreeMap<String, ParserKW>,
}

impl KeywordRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `keyword`, returning the schema it replaces.
    ///
    /// # Errors
    ///
    /// Returns any error of [`ParserKW::validate`].
    pub fn add(&mut self, keyword: ParserKW) -> Result<Option<ParserKW>, SchemaError> {
        keyword.validate()?;
        Ok(self.keywords.insert(keyword.name().to_string(), keyword))
    }

    /// The schema named `name`.
    pub fn get(&self, name: &str) -> Option<&ParserKW> {
        self.keywords.get(name)
    }

    /// Returns `true` if a schema named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.keywords.contains_key(name)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keywords.keys().map(String::as_str)
    }

    /// Iterates schemas in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ParserKW> {
        self.keywords.values()
    }
}

impl ShapeLookup for KeywordRegistry {
    fn shape(&self, name: &str) -> Option<RawShape> {
        self.get(name).map(ParserKW::raw_shape)
    }
}
