//! Named physical dimension with a scale factor to SI.

use std::fmt;

use crate::error::UnitError;

/// A named physical unit and the factor converting it to the SI unit.
///
/// A value `v` expressed in this dimension is `v * si_scaling()` in SI.
/// The scale factor is always finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    name: String,
    si_scaling: f64,
}

impl Dimension {
    /// Creates a dimension.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::InvalidScaling`] if `si_scaling` is zero,
    /// negative, NaN or infinite.
    pub fn new(name: impl Into<String>, si_scaling: f64) -> Result<Self, UnitError> {
        let name = name.into();
        if !si_scaling.is_finite() || si_scaling <= 0.0 {
            return Err(UnitError::InvalidScaling {
                name,
                scaling: si_scaling,
            });
        }
        Ok(Self { name, si_scaling })
    }

    /// Builds a dimension from a table constant known to be valid.
    pub(crate) fn from_table(name: &str, si_scaling: f64) -> Self {
        Self {
            name: name.to_string(),
            si_scaling,
        }
    }

    /// The dimensionless unit (`"1"`, scaling 1).
    pub fn dimensionless() -> Self {
        Self {
            name: "1".to_string(),
            si_scaling: 1.0,
        }
    }

    /// Returns the dimension name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the factor converting a value in this unit to SI.
    pub fn si_scaling(&self) -> f64 {
        self.si_scaling
    }

    /// Converts `value` expressed in this dimension to SI.
    pub fn to_si(&self, value: f64) -> f64 {
        value * self.si_scaling
    }

    /// Converts an SI `value` back into this dimension.
    pub fn from_si(&self, value: f64) -> f64 {
        value / self.si_scaling
    }

    /// Product of two dimensions, named `a*b`.
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        Dimension {
            name: format!("{}*{}", self.name, other.name),
            si_scaling: self.si_scaling * other.si_scaling,
        }
    }

    /// Quotient of two dimensions, named `a/b`.
    pub fn divide(&self, other: &Dimension) -> Dimension {
        Dimension {
            name: format!("{}/{}", self.name, other.name),
            si_scaling: self.si_scaling / other.si_scaling,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.si_scaling)
    }
}
