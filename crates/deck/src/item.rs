//! Typed value container for one schema position.

use std::fmt;

use petra_units::Dimension;

use crate::error::DeckError;
use crate::value::{ItemData, ItemValue, Slot, ValueType};

/// The values of one named item in a record.
///
/// Each slot is either a value from the deck, a value supplied by the
/// schema default, or a dummy default that reserves the position without a
/// readable value. Double items may carry `(active, default)` dimension
/// pairs for SI conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckItem {
    name: String,
    data: ItemData,
    dimensions: Vec<(Dimension, Dimension)>,
}

impl DeckItem {
    /// Creates an empty item holding `value_type` values.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            data: ItemData::new(value_type),
            dimensions: Vec::new(),
        }
    }

    /// The item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value type fixed at construction.
    pub fn value_type(&self) -> ValueType {
        self.data.value_type()
    }

    /// The raw slot storage.
    pub fn data(&self) -> &ItemData {
        &self.data
    }

    /// Number of slots, dummy defaults included.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when no slot has been pushed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of slots holding a readable value.
    pub fn value_count(&self) -> usize {
        (0..self.size()).filter(|&i| self.data.has_value(i)).count()
    }

    // ---------------------------------------------------------------------
    // Appending
    // ---------------------------------------------------------------------

    /// Appends a value read from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TypeMismatch`] if `T` is not the item's type.
    pub fn push_back<T: ItemValue>(&mut self, value: T) -> Result<(), DeckError> {
        self.slots_mut::<T>()?.push(Slot::Present(value));
        Ok(())
    }

    /// Appends `count` copies of a value read from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TypeMismatch`] if `T` is not the item's type.
    pub fn push_back_n<T: ItemValue>(&mut self, value: T, count: usize) -> Result<(), DeckError> {
        let slots = self.slots_mut::<T>()?;
        slots.extend(std::iter::repeat_n(Slot::Present(value), count));
        Ok(())
    }

    /// Appends a value supplied by the schema default.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TypeMismatch`] if `T` is not the item's type.
    pub fn push_back_default<T: ItemValue>(&mut self, value: T) -> Result<(), DeckError> {
        self.slots_mut::<T>()?.push(Slot::DefaultedPresent(value));
        Ok(())
    }

    /// Appends a defaulted slot with no readable value.
    pub fn push_back_dummy_default(&mut self) {
        self.data.push_dummy();
    }

    // ---------------------------------------------------------------------
    // Reading
    // ---------------------------------------------------------------------

    /// The value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TypeMismatch`] if `T` is not the item's type and
    /// [`DeckError::OutOfRange`] if `index` is past the end or addresses a
    /// dummy default.
    pub fn get<T: ItemValue>(&self, index: usize) -> Result<&T, DeckError> {
        let slots = self.slots::<T>()?;
        slots
            .get(index)
            .and_then(Slot::value)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// The integer at `index`.
    ///
    /// # Errors
    ///
    /// See [`DeckItem::get`].
    pub fn get_int(&self, index: usize) -> Result<i32, DeckError> {
        self.get::<i32>(index).copied()
    }

    /// The float at `index`, in deck units.
    ///
    /// # Errors
    ///
    /// See [`DeckItem::get`].
    pub fn get_double(&self, index: usize) -> Result<f64, DeckError> {
        self.get::<f64>(index).copied()
    }

    /// The string at `index`.
    ///
    /// # Errors
    ///
    /// See [`DeckItem::get`].
    pub fn get_string(&self, index: usize) -> Result<&str, DeckError> {
        self.get::<String>(index).map(String::as_str)
    }

    /// All readable values in slot order; dummy defaults are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TypeMismatch`] if `T` is not the item's type.
    pub fn get_data<T: ItemValue>(&self) -> Result<Vec<T>, DeckError> {
        Ok(self
            .slots::<T>()?
            .iter()
            .filter_map(Slot::value)
            .cloned()
            .collect())
    }

    /// Returns `true` if the slot at `index` holds a readable value.
    pub fn has_value(&self, index: usize) -> bool {
        self.data.has_value(index)
    }

    /// Returns `true` if the slot at `index` was defaulted (with or without
    /// a value).
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if `index >= size()`.
    pub fn default_applied(&self, index: usize) -> Result<bool, DeckError> {
        self.data
            .is_default(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    // ---------------------------------------------------------------------
    // Dimensions
    // ---------------------------------------------------------------------

    /// Attaches an `(active, default)` dimension pair.
    ///
    /// Pairs are matched to readable slots in order and repeat cyclically
    /// when there are fewer pairs than values.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TypeMismatch`] unless the item holds doubles.
    pub fn push_back_dimension(
        &mut self,
        active: Dimension,
        default: Dimension,
    ) -> Result<(), DeckError> {
        self.slots::<f64>()?;
        self.dimensions.push((active, default));
        Ok(())
    }

    /// Returns `true` once a dimension pair has been attached.
    pub fn has_dimension(&self) -> bool {
        !self.dimensions.is_empty()
    }

    /// The value at `index` converted to SI units.
    ///
    /// A value read from the deck uses the active dimension; a defaulted
    /// value uses the default dimension.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TypeMismatch`] for non-double items,
    /// [`DeckError::MissingDimension`] before any dimension is attached and
    /// [`DeckError::OutOfRange`] as for [`DeckItem::get`].
    pub fn get_si_double(&self, index: usize) -> Result<f64, DeckError> {
        let slots = self.slots::<f64>()?;
        if self.dimensions.is_empty() {
            return Err(DeckError::MissingDimension {
                item: self.name.clone(),
            });
        }
        let slot = slots.get(index).ok_or_else(|| self.out_of_range(index))?;
        let ordinal = slots[..index]
            .iter()
            .filter(|s| s.value().is_some())
            .count();
        let (active, default) = &self.dimensions[ordinal % self.dimensions.len()];
        match slot {
            Slot::Present(v) => Ok(active.to_si(*v)),
            Slot::DefaultedPresent(v) => Ok(default.to_si(*v)),
            Slot::DefaultedAbsent => Err(self.out_of_range(index)),
        }
    }

    /// All readable values converted to SI units, in slot order.
    ///
    /// # Errors
    ///
    /// As for [`DeckItem::get_si_double`].
    pub fn get_si_double_data(&self) -> Result<Vec<f64>, DeckError> {
        let slots = self.slots::<f64>()?;
        if self.dimensions.is_empty() {
            return Err(DeckError::MissingDimension {
                item: self.name.clone(),
            });
        }
        let n_dims = self.dimensions.len();
        Ok(slots
            .iter()
            .filter(|s| s.value().is_some())
            .enumerate()
            .filter_map(|(ordinal, slot)| {
                let (active, default) = &self.dimensions[ordinal % n_dims];
                match slot {
                    Slot::Present(v) => Some(active.to_si(*v)),
                    Slot::DefaultedPresent(v) => Some(default.to_si(*v)),
                    Slot::DefaultedAbsent => None,
                }
            })
            .collect())
    }

    fn slots<T: ItemValue>(&self) -> Result<&[Slot<T>], DeckError> {
        T::slots(&self.data).ok_or_else(|| self.type_mismatch(T::VALUE_TYPE))
    }

    fn slots_mut<T: ItemValue>(&mut self) -> Result<&mut Vec<Slot<T>>, DeckError> {
        let Self { name, data, .. } = self;
        let actual = data.value_type();
        T::slots_mut(data).ok_or_else(|| DeckError::TypeMismatch {
            item: name.clone(),
            expected: T::VALUE_TYPE,
            actual,
        })
    }

    fn type_mismatch(&self, expected: ValueType) -> DeckError {
        DeckError::TypeMismatch {
            item: self.name.clone(),
            expected,
            actual: self.value_type(),
        }
    }

    fn out_of_range(&self, index: usize) -> DeckError {
        DeckError::OutOfRange {
            target: format!("item {}", self.name),
            index,
            size: self.size(),
        }
    }
}

/// Renders a string value, quoting it when it would not survive
/// re-tokenizing as a single field.
fn write_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    if value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '/') {
        write!(f, "'{value}'")
    } else {
        f.write_str(value)
    }
}

impl fmt::Display for DeckItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if self.data.is_default(i).unwrap_or(false) {
                f.write_str("1*")?;
                continue;
            }
            match &self.data {
                ItemData::Int(v) => {
                    if let Some(x) = v[i].value() {
                        write!(f, "{x}")?;
                    }
                }
                ItemData::Double(v) => {
                    if let Some(x) = v[i].value() {
                        write!(f, "{x}")?;
                    }
                }
                ItemData::String(v) => {
                    if let Some(x) = v[i].value() {
                        write_string(f, x)?;
                    }
                }
            }
        }
        Ok(())
    }
}
