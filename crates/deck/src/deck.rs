//! The parsed deck.

use std::fmt;

use petra_units::UnitSystem;

use crate::error::DeckError;
use crate::keyword::DeckKeyword;

/// Keywords in source order, plus the unit system in force at the end of
/// the parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    keywords: Vec<DeckKeyword>,
    data_file: Option<String>,
    active_unit_system: UnitSystem,
}

impl Deck {
    /// Creates an empty deck in metric units.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a deck of empty known keywords, one per name.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(DeckKeyword::new).collect()
    }

    /// Appends a keyword.
    pub fn add_keyword(&mut self, keyword: DeckKeyword) {
        self.keywords.push(keyword);
    }

    /// Returns `true` if at least one keyword is named `name`.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.keywords.iter().any(|kw| kw.name() == name)
    }

    /// The last keyword named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnknownKeyword`] if there is none.
    pub fn get_keyword(&self, name: &str) -> Result<&DeckKeyword, DeckError> {
        self.keywords
            .iter()
            .rev()
            .find(|kw| kw.name() == name)
            .ok_or_else(|| DeckError::UnknownKeyword {
                name: name.to_string(),
            })
    }

    /// The `occurrence`-th (0-based) keyword named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if there are not that many.
    pub fn get_keyword_at(&self, name: &str, occurrence: usize) -> Result<&DeckKeyword, DeckError> {
        self.keywords
            .iter()
            .filter(|kw| kw.name() == name)
            .nth(occurrence)
            .ok_or_else(|| DeckError::OutOfRange {
                target: format!("occurrences of keyword {name}"),
                index: occurrence,
                size: self.count(name),
            })
    }

    /// The keyword at position `index` in the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if `index >= size()`.
    pub fn get_keyword_by_index(&self, index: usize) -> Result<&DeckKeyword, DeckError> {
        self.keywords.get(index).ok_or_else(|| DeckError::OutOfRange {
            target: "deck".to_string(),
            index,
            size: self.keywords.len(),
        })
    }

    /// All keywords named `name`, in source order.
    pub fn get_keyword_list(&self, name: &str) -> Vec<&DeckKeyword> {
        self.keywords.iter().filter(|kw| kw.name() == name).collect()
    }

    /// Number of keywords named `name`.
    pub fn count(&self, name: &str) -> usize {
        self.keywords.iter().filter(|kw| kw.name() == name).count()
    }

    /// Number of keywords.
    pub fn size(&self) -> usize {
        self.keywords.len()
    }

    /// Returns `true` when the deck has no keywords.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterates keywords in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, DeckKeyword> {
        self.keywords.iter()
    }

    /// Path of the file the deck was read from, if recorded.
    pub fn data_file(&self) -> Option<&str> {
        self.data_file.as_deref()
    }

    /// Records the file the deck was read from.
    pub fn set_data_file(&mut self, path: impl Into<String>) {
        self.data_file = Some(path.into());
    }

    /// The unit system in force after the last keyword.
    pub fn active_unit_system(&self) -> &UnitSystem {
        &self.active_unit_system
    }

    /// Replaces the active unit system.
    pub fn set_active_unit_system(&mut self, system: UnitSystem) {
        self.active_unit_system = system;
    }
}

impl From<Vec<DeckKeyword>> for Deck {
    fn from(keywords: Vec<DeckKeyword>) -> Self {
        Self {
            keywords,
            ..Self::default()
        }
    }
}

impl FromIterator<DeckKeyword> for Deck {
    fn from_iter<I: IntoIterator<Item = DeckKeyword>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a DeckKeyword;
    type IntoIter = std::slice::Iter<'a, DeckKeyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.keywords.iter()
    }
}

impl fmt::Display for Deck {
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

#[cfg(test)]
mod tests {
    use super::*;
    use petra_units::UnitSystemKind;

    #[test]
    fn from_names() {
        let deck = Deck::from_names(["GRID", "EDIT"]);
        assert_eq!(deck.size(), 2);
        assert_eq!(deck.get_keyword_by_index(0).unwrap().name(), "GRID");
        assert_eq!(deck.get_keyword_by_index(1).unwrap().name(), "EDIT");
    }

    #[test]
    fn empty_deck() {
        let deck = Deck::new();
        assert!(!deck.has_keyword("Bjarne"));
        assert_eq!(
            deck.get_keyword("Bjarne").unwrap_err(),
            DeckError::UnknownKeyword {
                name: "Bjarne".to_string()
            }
        );
        assert!(deck.get_keyword_list("Bjarne").is_empty());
        assert!(deck.get_keyword_by_index(0).is_err());
    }

    #[test]
    fn add_and_count() {
        let mut deck = Deck::new();
        deck.add_keyword(DeckKeyword::new("BJARNE"));
        assert!(deck.has_keyword("BJARNE"));
        assert_eq!(deck.count("BJARNE"), 1);
        deck.add_keyword(DeckKeyword::new("BJARNE"));
        assert_eq!(deck.count("BJARNE"), 2);
        assert_eq!(deck.count("BJARNEX"), 0);
        assert_eq!(deck.size(), 2);
    }

    #[test]
    fn occurrence_out_of_range() {
        let deck = Deck::from_names(["TRULS", "TRULS"]);
        assert!(deck.get_keyword_at("TRULS", 1).is_ok());
        assert_eq!(
            deck.get_keyword_at("TRULS", 3).unwrap_err(),
            DeckError::OutOfRange {
                target: "occurrences of keyword TRULS".to_string(),
                index: 3,
                size: 2,
            }
        );
    }

    #[test]
    fn keyword_list_and_index() {
        let deck = Deck::from_names(["TRULS", "TRULS", "TRULSX"]);
        assert_eq!(deck.get_keyword_list("TRULS").len(), 2);
        assert_eq!(deck.count("TRULSY"), 0);
        assert_eq!(deck.get_keyword_by_index(2).unwrap().name(), "TRULSX");
        assert!(deck.get_keyword_by_index(3).is_err());
    }

    #[test]
    fn get_keyword_returns_last_occurrence() {
        let deck: Deck = [
            DeckKeyword::new("TSTEP").with_line(1),
            DeckKeyword::new("DATES").with_line(2),
            DeckKeyword::new("TSTEP").with_line(3),
        ]
        .into_iter()
        .collect();
        assert_eq!(deck.get_keyword("TSTEP").unwrap().line(), Some(3));
    }

    #[test]
    fn data_file() {
        let mut deck = Deck::new();
        assert_eq!(deck.data_file(), None);
        deck.set_data_file("/path/to/file.DATA");
        assert_eq!(deck.data_file(), Some("/path/to/file.DATA"));
    }

    #[test]
    fn default_unit_system_is_metric() {
        let mut deck = Deck::new();
        assert_eq!(deck.active_unit_system().kind(), UnitSystemKind::Metric);
        deck.set_active_unit_system(UnitSystem::field());
        assert_eq!(deck.active_unit_system().kind(), UnitSystemKind::Field);
    }
}
