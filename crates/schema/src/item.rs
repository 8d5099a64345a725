//! Item schemas.

use std::fmt;

use petra_deck::{DeckItem, ValueType};
use petra_units::Dimension;

use crate::env::ParseEnv;
use crate::error::{Location, ParseError, SchemaError};
use crate::fields::{Field, parse_double};

/// How many raw fields an item consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeType {
    /// Exactly one field.
    #[default]
    Single,
    /// Every remaining field of the record.
    All,
}

/// A typed schema default.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer default.
    Int(i32),
    /// Float default, in the default unit system.
    Double(f64),
    /// String default.
    String(String),
}

impl Value {
    /// The value type of the default.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Int(_) => ValueType::Int,
            Self::Double(_) => ValueType::Double,
            Self::String(_) => ValueType::String,
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "'{v}'"),
        }
    }
}

/// Schema for one named position of a record.
///
/// # Example
///
/// ```
/// use petra_deck::ValueType;
/// use petra_schema::{ParserItem, SizeType};
///
/// let item = ParserItem::new("STEP_SIZE", ValueType::Double)
///     .with_size_type(SizeType::All)
///     .with_dimension("Timestep");
/// assert!(item.validate().is_ok());
///
/// let bad = ParserItem::new("DAY", ValueType::Int).with_dimension("Length");
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParserItem {
    name: String,
    value_type: ValueType,
    size_type: SizeType,
    default: Option<Value>,
    dimension: Option<String>,
}

impl ParserItem {
    /// A single-field item without default or dimension.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            size_type: SizeType::Single,
            default: None,
            dimension: None,
        }
    }

    /// Sets how many fields the item consumes.
    pub fn with_size_type(mut self, size_type: SizeType) -> Self {
        self.size_type = size_type;
        self
    }

    /// Sets the schema default.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Sets the dimension name or expression (`"Length/Time"`).
    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = Some(dimension.into());
        self
    }

    /// Checks that the default and the dimension fit the value type.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DefaultTypeMismatch`] or
    /// [`SchemaError::DimensionOnNonDouble`].
    pub fn validate(&self) -> Result<(), SchemaError> {
        if let Some(default) = &self.default
            && default.value_type() != self.value_type
        {
            return Err(SchemaError::DefaultTypeMismatch {
                item: self.name.clone(),
                expected: self.value_type,
                actual: default.value_type(),
            });
        }
        if let Some(dimension) = &self.dimension
            && self.value_type != ValueType::Double
        {
            return Err(SchemaError::DimensionOnNonDouble {
                item: self.name.clone(),
                dimension: dimension.clone(),
                value_type: self.value_type,
            });
        }
        Ok(())
    }

    /// The item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value type.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// How many fields the item consumes.
    pub fn size_type(&self) -> SizeType {
        self.size_type
    }

    /// The schema default, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The dimension, if any.
    pub fn dimension(&self) -> Option<&str> {
        self.dimension.as_deref()
    }

    /// Creates the empty deck item this schema fills.
    pub(crate) fn deck_item(&self) -> DeckItem {
        DeckItem::new(self.name.as_str(), self.value_type)
    }

    /// Appends one expanded field to `item`.
    pub(crate) fn push_field(
        &self,
        item: &mut DeckItem,
        field: Field<'_>,
        location: &Location,
    ) -> Result<(), ParseError> {
        let text = match field {
            Field::Default => return self.push_default(item),
            Field::Value(text) => text,
        };
        let invalid = || ParseError::InvalidValue {
            location: location.clone(),
            value: text.to_string(),
            expected: self.value_type.to_string(),
        };
        match self.value_type {
            ValueType::Int => item.push_back(text.parse::<i32>().map_err(|_| invalid())?)?,
            ValueType::Double => item.push_back(parse_double(text).ok_or_else(invalid)?)?,
            ValueType::String => item.push_back(text.to_string())?,
        }
        Ok(())
    }

    /// Appends the schema default, or a dummy default when there is none.
    pub(crate) fn push_default(&self, item: &mut DeckItem) -> Result<(), ParseError> {
        match &self.default {
            Some(Value::Int(v)) => item.push_back_default(*v)?,
            Some(Value::Double(v)) => item.push_back_default(*v)?,
            Some(Value::String(v)) => item.push_back_default(v.clone())?,
            None => item.push_back_dummy_default(),
        }
        Ok(())
    }

    /// Attaches the `(active, default)` dimension pair to a filled item.
    pub(crate) fn attach_dimension(
        &self,
        item: &mut DeckItem,
        env: &ParseEnv<'_>,
        location: &Location,
    ) -> Result<(), ParseError> {
        let Some(expr) = &self.dimension else {
            return Ok(());
        };
        let resolve = |units: &petra_units::UnitSystem| -> Result<Dimension, ParseError> {
            units.parse_dimension(expr).map_err(|source| ParseError::Unit {
                location: location.clone(),
                source,
            })
        };
        let active = resolve(env.active_units())?;
        let default = resolve(env.default_units())?;
        item.push_back_dimension(active, default)?;
        Ok(())
    }
}
