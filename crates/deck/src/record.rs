//! Ordered, unique-named items of one record.

use std::fmt;

use crate::error::DeckError;
use crate::item::DeckItem;

/// One parsed record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckRecord {
    items: Vec<DeckItem>,
}

impl DeckRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `items`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateName`] if two items share a name.
    pub fn from_items(items: impl IntoIterator<Item = DeckItem>) -> Result<Self, DeckError> {
        let mut record = Self::new();
        for item in items {
            record.add_item(item)?;
        }
        Ok(record)
    }

    /// Appends an item.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateName`] if an item with the same name is
    /// already present.
    pub fn add_item(&mut self, item: DeckItem) -> Result<(), DeckError> {
        if self.has_item(item.name()) {
            return Err(DeckError::DuplicateName {
                name: item.name().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// The item at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if `index >= size()`.
    pub fn get_item(&self, index: usize) -> Result<&DeckItem, DeckError> {
        self.items.get(index).ok_or_else(|| DeckError::OutOfRange {
            target: "record".to_string(),
            index,
            size: self.items.len(),
        })
    }

    /// The item named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnknownItem`] if there is no such item.
    pub fn get_item_by_name(&self, name: &str) -> Result<&DeckItem, DeckError> {
        self.items
            .iter()
            .find(|item| item.name() == name)
            .ok_or_else(|| DeckError::UnknownItem {
                name: name.to_string(),
            })
    }

    /// Returns `true` if an item named `name` is present.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` for a record without items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, DeckItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a DeckRecord {
    type Item = &'a DeckItem;
    type IntoIter = std::slice::Iter<'a, DeckItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for DeckRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self.items.iter().filter(|item| !item.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
            first = false;
        }
        f.write_str(if first { "/" } else { " /" })
    }
}
