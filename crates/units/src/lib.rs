//! # petra-units
//!
//! Named physical dimensions with a scale factor to SI, grouped into the
//! unit systems a deck can declare (`METRIC`, `FIELD`, `LAB`).
//!
//! ## Quick Start
//!
//! ```
//! use petra_units::{Dimension, UnitSystem};
//!
//! let field = UnitSystem::field();
//! let length = field.get("Length").unwrap();
//! assert_eq!(length.si_scaling(), 0.3048);
//!
//! // Compound dimensions are resolved left to right.
//! let rate = field.parse_dimension("Length/Time").unwrap();
//! assert!((rate.si_scaling() - 0.3048 / 86400.0).abs() < 1e-15);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `dimension` | `Dimension` value type |
//! | `system` | `UnitSystem` tables and compound parsing |
//! | `error` | Error types |

mod dimension;
mod error;
mod system;

pub use dimension::Dimension;
pub use error::UnitError;
pub use system::{UnitSystem, UnitSystemKind};
