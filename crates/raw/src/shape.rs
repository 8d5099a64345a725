//! How a keyword's body is delimited.

/// Body shape of a keyword, chosen by keyword identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawShape {
    /// Exactly this many `/`-terminated records; the keyword closes once the
    /// count is reached. `Records(0)` keywords have no body.
    Records(usize),
    /// `/`-terminated records until an empty record (a lone `/`).
    SlashTerminated,
    /// Verbatim lines, not field-tokenized, until a line holding only `/`.
    Data,
}

/// Keyword-name to [`RawShape`] lookup used by the tokenizer.
///
/// Returning `None` marks the keyword as unregistered: its records run
/// until the next keyword line or an empty record.
pub trait ShapeLookup {
    /// Returns the body shape registered for `name`.
    fn shape(&self, name: &str) -> Option<RawShape>;
}

impl<F> ShapeLookup for F
where
    F: Fn(&str) -> Option<RawShape>,
{
    fn shape(&self, name: &str) -> Option<RawShape> {
        self(name)
    }
}

/// A lookup that knows no keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShapes;

impl ShapeLookup for NoShapes {
    fn shape(&self, _name: &str) -> Option<RawShape> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_lookup() {
        let lookup = |name: &str| (name == "DATES").then_some(RawShape::SlashTerminated);
        assert_eq!(lookup.shape("DATES"), Some(RawShape::SlashTerminated));
        assert_eq!(lookup.shape("TSTEP"), None);
    }

    #[test]
    fn no_shapes_knows_nothing() {
        assert_eq!(NoShapes.shape("START"), None);
    }
}
