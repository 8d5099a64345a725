//! Value types and per-slot storage.

use std::fmt;

/// The three value types a deck item can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 32-bit signed integer.
    Int,
    /// 64-bit float.
    Double,
    /// Free text.
    String,
}

impl ValueType {
    /// Upper-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Double => "DOUBLE",
            Self::String => "STRING",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One position of a deck item.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    /// A value read from the deck.
    Present(T),
    /// A value supplied by the schema default.
    DefaultedPresent(T),
    /// Defaulted, but the schema had no default to supply. Never readable.
    DefaultedAbsent,
}

impl<T> Slot<T> {
    /// The slot value, if one is retrievable.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Present(v) | Self::DefaultedPresent(v) => Some(v),
            Self::DefaultedAbsent => None,
        }
    }

    /// Returns `true` unless the value was read from the deck.
    pub fn is_default(&self) -> bool {
        !matches!(self, Self::Present(_))
    }
}

/// Slot storage of a deck item, tagged by value type.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemData {
    /// Integer slots.
    Int(Vec<Slot<i32>>),
    /// Float slots.
    Double(Vec<Slot<f64>>),
    /// String slots.
    String(Vec<Slot<String>>),
}

impl ItemData {
    /// Empty storage for `value_type`.
    pub fn new(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Int => Self::Int(Vec::new()),
            ValueType::Double => Self::Double(Vec::new()),
            ValueType::String => Self::String(Vec::new()),
        }
    }

    /// The value type of the storage.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Int(_) => ValueType::Int,
            Self::Double(_) => ValueType::Double,
            Self::String(_) => ValueType::String,
        }
    }

    /// Number of slots, dummy defaults included.
    pub fn len(&self) -> usize {
        match self {
            Self::Int(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::String(v) => v.len(),
        }
    }

    /// Returns `true` when no slot has been pushed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the slot at `index` is defaulted, or `None` past the end.
    pub(crate) fn is_default(&self, index: usize) -> Option<bool> {
        match self {
            Self::Int(v) => v.get(index).map(Slot::is_default),
            Self::Double(v) => v.get(index).map(Slot::is_default),
            Self::String(v) => v.get(index).map(Slot::is_default),
        }
    }

    /// Whether the slot at `index` holds a retrievable value.
    pub(crate) fn has_value(&self, index: usize) -> bool {
        match self {
            Self::Int(v) => v.get(index).is_some_and(|s| s.value().is_some()),
            Self::Double(v) => v.get(index).is_some_and(|s| s.value().is_some()),
            Self::String(v) => v.get(index).is_some_and(|s| s.value().is_some()),
        }
    }

    pub(crate) fn push_dummy(&mut self) {
        match self {
            Self::Int(v) => v.push(Slot::DefaultedAbsent),
            Self::Double(v) => v.push(Slot::DefaultedAbsent),
            Self::String(v) => v.push(Slot::DefaultedAbsent),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
}

/// A Rust type that can be stored in a deck item.
///
/// Implemented for `i32`, `f64` and `String`; sealed.
pub trait ItemValue: Clone + sealed::Sealed {
    /// The matching [`ValueType`].
    const VALUE_TYPE: ValueType;

    /// The slots of `data` if it holds this type.
    fn slots(data: &ItemData) -> Option<&[Slot<Self>]>;

    /// Mutable access to the slots of `data` if it holds this type.
    fn slots_mut(data: &mut ItemData) -> Option<&mut Vec<Slot<Self>>>;
}

impl ItemValue for i32 {
    const VALUE_TYPE: ValueType = ValueType::Int;

    fn slots(data: &ItemData) -> Option<&[Slot<Self>]> {
        match data {
            ItemData::Int(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn slots_mut(data: &mut ItemData) -> Option<&mut Vec<Slot<Self>>> {
        match data {
            ItemData::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl ItemValue for f64 {
    const VALUE_TYPE: ValueType = ValueType::Double;

    fn slots(data: &ItemData) -> Option<&[Slot<Self>]> {
        match data {
            ItemData::Double(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn slots_mut(data: &mut ItemData) -> Option<&mut Vec<Slot<Self>>> {
        match data {
            ItemData::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl ItemValue for String {
    const VALUE_TYPE: ValueType = ValueType::String;

    fn slots(data: &ItemData) -> Option<&[Slot<Self>]> {
        match data {
            ItemData::String(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn slots_mut(data: &mut ItemData) -> Option<&mut Vec<Slot<Self>>> {
        match data {
            ItemData::String(v) => Some(v),
            _ => None,
        }
    }
}
