//! Per-keyword parse environment.

use petra_units::UnitSystem;

use crate::context::ParseContext;

/// Everything a schema needs besides the raw text: the strictness policy,
/// the unit system in force, and the system defaults are expressed in.
#[derive(Debug, Clone, Copy)]
pub struct ParseEnv<'a> {
    context: &'a ParseContext,
    active_units: &'a UnitSystem,
    default_units: &'a UnitSystem,
}

impl<'a> ParseEnv<'a> {
    /// Bundles the policy and unit systems for one keyword.
    pub fn new(
        context: &'a ParseContext,
        active_units: &'a UnitSystem,
        default_units: &'a UnitSystem,
    ) -> Self {
        Self {
            context,
            active_units,
            default_units,
        }
    }

    /// The strictness policy.
    pub fn context(&self) -> &'a ParseContext {
        self.context
    }

    /// The unit system deck values are written in.
    pub fn active_units(&self) -> &'a UnitSystem {
        self.active_units
    }

    /// The unit system schema defaults are written in.
    pub fn default_units(&self) -> &'a UnitSystem {
        self.default_units
    }
}
