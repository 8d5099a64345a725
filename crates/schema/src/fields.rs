//! Repeat-count expansion and scalar coercion of raw fields.

use petra_raw::RawRecord;

use crate::error::{Location, ParseError};

/// Upper bound on the number of fields one record may expand to.
pub(crate) const MAX_EXPANDED_FIELDS: usize = 1 << 26;

/// One field after repeat expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Field<'a> {
    /// Text to convert against the item type.
    Value(&'a str),
    /// An explicit default (`N*`).
    Default,
}

/// A field repeated `count` times, with the index of its raw field.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Run<'a> {
    field: Field<'a>,
    count: usize,
    source: usize,
}

/// The expanded fields of one record, yielded lazily as
/// `(raw field index, field)`.
#[derive(Debug, Clone)]
pub(crate) struct Fields<'a> {
    runs: std::vec::IntoIter<Run<'a>>,
    current: Option<Run<'a>>,
    remaining: usize,
}

impl Fields<'_> {
    /// Expanded fields not yet taken.
    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }

    /// Raw index of the next field, if any.
    pub(crate) fn source(&self) -> Option<usize> {
        self.current.map(|run| run.source)
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = (usize, Field<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let run = self.current.as_mut()?;
        let next = (run.source, run.field);
        run.count -= 1;
        self.remaining -= 1;
        if run.count == 0 {
            self.current = self.runs.next();
        }
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Expands `N*value` and `N*` tokens; quoted fields are taken as written.
///
/// A token ending in `*` must carry a positive count, and the record may
/// expand to at most [`MAX_EXPANDED_FIELDS`] fields. Errors point at the raw
/// field holding the count.
pub(crate) fn expand<'r>(raw: &'r RawRecord, location: &Location) -> Result<Fields<'r>, ParseError> {
    let mut runs = Vec::with_capacity(raw.size());
    let mut total: usize = 0;
    for (source, field) in raw.fields().iter().enumerate() {
        let text = field.as_str();
        let invalid = |expected: String| ParseError::InvalidValue {
            location: location.with_field(source),
            value: text.to_string(),
            expected,
        };
        let repeat = if field.is_quoted() { None } else { text.split_once('*') };
        let (field, count) = match repeat {
            Some((count, value)) if is_count(count) => {
                let count: usize = match count.parse() {
                    Ok(n) if n > 0 => n,
                    _ => return Err(invalid("a positive repeat count".to_string())),
                };
                let field = if value.is_empty() {
                    Field::Default
                } else {
                    Field::Value(value)
                };
                (field, count)
            }
            Some((_, "")) => return Err(invalid("a positive repeat count".to_string())),
            _ => (Field::Value(text), 1),
        };
        total = total
            .checked_add(count)
            .filter(|&n| n <= MAX_EXPANDED_FIELDS)
            .ok_or_else(|| {
                invalid(format!(
                    "a repeat count within {MAX_EXPANDED_FIELDS} fields per record"
                ))
            })?;
        runs.push(Run {
            field,
            count,
            source,
        });
    }
    let mut runs = runs.into_iter();
    Ok(Fields {
        current: runs.next(),
        runs,
        remaining: total,
    })
}

fn is_count(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a float, accepting Fortran `D` exponents (`1.5D3`).
pub(crate) fn parse_double(text: &str) -> Option<f64> {
    let value: f64 = if text.contains(['D', 'd']) {
        text.replace(['D', 'd'], "E").parse().ok()?
    } else {
        text.parse().ok()?
    };
    value.is_finite().then_some(value)
}
