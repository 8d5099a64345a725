//! Unit system tables and compound dimension parsing.

use std::collections::BTreeMap;
use std::fmt;

use crate::dimension::Dimension;
use crate::error::UnitError;

/// The unit systems a deck can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystemKind {
    /// SI-based units with days, bars and cubic metres.
    #[default]
    Metric,
    /// Oilfield units with feet, psi and barrels.
    Field,
    /// Laboratory units with centimetres, hours and atmospheres.
    Lab,
}

impl UnitSystemKind {
    /// The deck keyword that selects this system.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Metric => "METRIC",
            Self::Field => "FIELD",
            Self::Lab => "LAB",
        }
    }

    /// Maps a unit-system keyword to its kind.
    pub fn from_keyword(name: &str) -> Option<Self> {
        match name {
            "METRIC" => Some(Self::Metric),
            "FIELD" => Some(Self::Field),
            "LAB" => Some(Self::Lab),
            _ => None,
        }
    }
}

impl fmt::Display for UnitSystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// Base dimension scalings to SI, one column per system.
//                 name                    METRIC        FIELD                  LAB
const TABLE: &[(&str, f64, f64, f64)] = &[
    ("Length", 1.0, 0.3048, 0.01),
    ("Time", 86_400.0, 86_400.0, 3_600.0),
    ("Timestep", 86_400.0, 86_400.0, 3_600.0),
    ("Mass", 1.0, 0.453_592_37, 0.001),
    ("Pressure", 1.0e5, 6_894.757_293_168_361, 101_325.0),
    ("Density", 1.0, 16.018_463_373_960_14, 1_000.0),
    ("Viscosity", 1.0e-3, 1.0e-3, 1.0e-3),
    ("Permeability", 9.869_233e-16, 9.869_233e-16, 9.869_233e-16),
    ("LiquidSurfaceVolume", 1.0, 0.158_987_294_928, 1.0e-6),
    ("GasSurfaceVolume", 1.0, 28.316_846_592, 1.0e-6),
    ("ReservoirVolume", 1.0, 0.158_987_294_928, 1.0e-6),
];

/// A named table of base dimensions.
///
/// Lookups are by exact, case-sensitive dimension name. Compound
/// expressions such as `"Length/Time"` or `"Pressure*Time"` are resolved by
/// [`parse_dimension`](Self::parse_dimension).
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSystem {
    kind: UnitSystemKind,
    dimensions: BTreeMap<String, Dimension>,
}

impl UnitSystem {
    /// Builds the table for `kind`.
    pub fn new(kind: UnitSystemKind) -> Self {
        let dimensions = TABLE
            .iter()
            .map(|&(name, metric, field, lab)| {
                let scaling = match kind {
                    UnitSystemKind::Metric => metric,
                    UnitSystemKind::Field => field,
                    UnitSystemKind::Lab => lab,
                };
                (name.to_string(), Dimension::from_table(name, scaling))
            })
            .collect();
        Self { kind, dimensions }
    }

    /// The metric system, also the system in which schema defaults are given.
    pub fn metric() -> Self {
        Self::new(UnitSystemKind::Metric)
    }

    /// The oilfield system.
    pub fn field() -> Self {
        Self::new(UnitSystemKind::Field)
    }

    /// The laboratory system.
    pub fn lab() -> Self {
        Self::new(UnitSystemKind::Lab)
    }

    /// Returns which system this is.
    pub fn kind(&self) -> UnitSystemKind {
        self.kind
    }

    /// Returns the system name as written in a deck.
    pub fn name(&self) -> &'static str {
        self.kind.keyword()
    }

    /// Looks up a base dimension by name.
    pub fn get(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.get(name)
    }

    /// Returns `true` if `name` is a base dimension of this system.
    pub fn has_dimension(&self, name: &str) -> bool {
        self.dimensions.contains_key(name)
    }

    /// Adds or replaces a base dimension.
    pub fn add_dimension(&mut self, dimension: Dimension) {
        self.dimensions
            .insert(dimension.name().to_string(), dimension);
    }

    /// Resolves a base name or a compound expression.
    ///
    /// Operands are joined by `*` and `/` and evaluated left to right; `"1"`
    /// is dimensionless. The result keeps the expression as its name.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownDimension`] if an operand is not a base
    /// dimension, or [`UnitError::MalformedExpression`] for an empty operand.
    pub fn parse_dimension(&self, expr: &str) -> Result<Dimension, UnitError> {
        let expr = expr.trim();
        if let Some(dim) = self.get(expr) {
            return Ok(dim.clone());
        }

        let mut scaling = 1.0;
        let mut op = '*';
        let mut rest = expr;
        loop {
            let split = rest.find(['*', '/']);
            let operand = match split {
                Some(pos) => &rest[..pos],
                None => rest,
            };
            let factor = self.operand_scaling(operand, expr)?;
            if op == '*' {
                scaling *= factor;
            } else {
                scaling /= factor;
            }
            match split {
                Some(pos) => {
                    op = rest[pos..].chars().next().unwrap_or('*');
                    rest = &rest[pos + 1..];
                }
                None => break,
            }
        }

        Dimension::new(expr, scaling)
    }

    fn operand_scaling(&self, operand: &str, expr: &str) -> Result<f64, UnitError> {
        let operand = operand.trim();
        if operand.is_empty() {
            return Err(UnitError::MalformedExpression {
                expr: expr.to_string(),
            });
        }
        if operand == "1" {
            return Ok(1.0);
        }
        self.get(operand)
            .map(Dimension::si_scaling)
            .ok_or_else(|| UnitError::UnknownDimension {
                name: operand.to_string(),
                system: self.name().to_string(),
            })
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::metric()
    }
}
