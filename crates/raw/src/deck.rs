//! Ordered container of raw keywords.

use std::fmt;

use crate::error::RawError;
use crate::keyword::RawKeyword;
use crate::shape::ShapeLookup;
use crate::tokenizer::tokenize;

/// Raw keywords in source order. Names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDeck {
    keywords: Vec<RawKeyword>,
}

impl RawDeck {
    /// Creates an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes `text` using `shapes` to delimit keyword bodies.
    ///
    /// # Errors
    ///
    /// Returns [`RawError`] for malformed quoting or unterminated records.
    pub fn parse(text: &str, shapes: &impl ShapeLookup) -> Result<Self, RawError> {
        tokenize(text, shapes)
    }

    /// Appends a keyword.
    pub fn add_keyword(&mut self, keyword: RawKeyword) {
        self.keywords.push(keyword);
    }

    /// Number of keywords.
    pub fn size(&self) -> usize {
        self.keywords.len()
    }

    /// Returns `true` when the deck holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// First keyword named `name`.
    pub fn get_keyword(&self, name: &str) -> Option<&RawKeyword> {
        self.get_keyword_at(name, 0)
    }

    /// The `occurrence`-th (0-based) keyword named `name`.
    pub fn get_keyword_at(&self, name: &str, occurrence: usize) -> Option<&RawKeyword> {
        self.keywords
            .iter()
            .filter(|kw| kw.name() == name)
            .nth(occurrence)
    }

    /// Keyword at position `index` in the deck.
    pub fn get_keyword_by_index(&self, index: usize) -> Option<&RawKeyword> {
        self.keywords.get(index)
    }

    /// Number of keywords named `name`.
    pub fn count(&self, name: &str) -> usize {
        self.keywords.iter().filter(|kw| kw.name() == name).count()
    }

    /// Iterates keywords in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, RawKeyword> {
        self.keywords.iter()
    }
}

impl<'a> IntoIterator for &'a RawDeck {
    type Item = &'a RawKeyword;
    type IntoIter = std::slice::Iter<'a, RawKeyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.keywords.iter()
    }
}

impl fmt::Display for RawDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, keyword) in self.keywords.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{keyword}")?;
        }
        Ok(())
    }
}
