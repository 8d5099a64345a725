//! Error types for the petra-units crate.

/// Error type for all fallible operations in the petra-units crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    /// Returned when a dimension is built with a zero, negative or
    /// non-finite scale factor.
    #[error("invalid SI scaling {scaling} for dimension '{name}' (must be finite and positive)")]
    InvalidScaling {
        /// Name of the dimension being constructed.
        name: String,
        /// The rejected scale factor.
        scaling: f64,
    },

    /// Returned when a dimension name is not defined in a unit system.
    #[error("unknown dimension '{name}' in unit system {system}")]
    UnknownDimension {
        /// The dimension name that could not be resolved.
        name: String,
        /// Name of the unit system that was searched.
        system: String,
    },

    /// Returned when a compound dimension expression is empty or has a
    /// dangling operator.
    #[error("malformed dimension expression '{expr}'")]
    MalformedExpression {
        /// The expression as written.
        expr: String,
    },
}
