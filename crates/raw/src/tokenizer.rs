//! Line-oriented tokenizer state machine.

use tracing::{debug, trace};

use crate::deck::RawDeck;
use crate::error::RawError;
use crate::keyword::{RawKeyword, RawKeywordKind, is_keyword_name};
use crate::record::{RawField, RawRecord, scan_line};
use crate::shape::{RawShape, ShapeLookup};

/// Tokenizes deck text into a [`RawDeck`].
///
/// Comments must already be stripped (see
/// [`strip_comments`](crate::strip_comments)). Keyword bodies are delimited
/// according to the [`RawShape`] that `shapes` reports for each keyword
/// name:
///
/// - `Records(n)` closes after `n` records, or earlier when a registered
///   keyword name appears between records;
/// - `SlashTerminated` closes on an empty record;
/// - `Data` keeps lines verbatim until a line holding only `/`;
/// - unregistered keywords close on an empty record or the next keyword line.
///
/// # Errors
///
/// Returns [`RawError`] for unclosed quotes, text outside any keyword, and
/// records or data blocks left open at end of input.
pub fn tokenize(text: &str, shapes: &impl ShapeLookup) -> Result<RawDeck, RawError> {
    let mut tokenizer = Tokenizer::new(shapes);
    for (idx, line) in text.lines().enumerate() {
        tokenizer.feed(line, idx + 1)?;
    }
    let deck = tokenizer.finish()?;
    debug!(n_keywords = deck.size(), "tokenized deck");
    Ok(deck)
}

/// The keyword currently receiving records.
struct Open {
    keyword: RawKeyword,
    shape: Option<RawShape>,
}

/// A record whose terminating `/` has not been seen yet.
struct Pending {
    fields: Vec<RawField>,
    text: Vec<String>,
    line: usize,
}

struct Tokenizer<'s, S> {
    shapes: &'s S,
    deck: RawDeck,
    open: Option<Open>,
    pending: Option<Pending>,
}

impl<'s, S: ShapeLookup> Tokenizer<'s, S> {
    fn new(shapes: &'s S) -> Self {
        Self {
            shapes,
            deck: RawDeck::new(),
            open: None,
            pending: None,
        }
    }

    fn feed(&mut self, line: &str, line_no: usize) -> Result<(), RawError> {
        if let Some(open) = self.open.as_mut()
            && open.shape == Some(RawShape::Data)
        {
            let trimmed = line.trim();
            if trimmed == "/" {
                self.close();
            } else if !trimmed.is_empty() {
                open.keyword
                    .add_record(RawRecord::verbatim(line.trim_end(), line_no));
            }
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        if self.pending.is_none() && is_keyword_name(trimmed) && self.starts_keyword(trimmed) {
            self.close();
            self.open_keyword(trimmed, line_no);
            return Ok(());
        }

        if self.open.is_none() {
            return Err(RawError::UnexpectedData {
                line: line_no,
                text: trimmed.to_string(),
            });
        }

        let pending = self.pending.get_or_insert_with(|| Pending {
            fields: Vec::new(),
            text: Vec::new(),
            line: line_no,
        });
        let scan = scan_line(line, line_no, &mut pending.fields)?;
        if !scan.segment.is_empty() {
            pending.text.push(scan.segment.to_string());
        }
        if scan.terminated
            && let Some(pending) = self.pending.take()
        {
            self.finish_record(pending);
        }
        Ok(())
    }

    /// Decides whether a keyword-shaped line opens a new keyword or is data
    /// of the open one.
    fn starts_keyword(&self, name: &str) -> bool {
        match self.open.as_ref().map(|open| open.shape) {
            None | Some(None) => true,
            Some(Some(RawShape::Records(_) | RawShape::SlashTerminated)) => {
                self.shapes.shape(name).is_some()
            }
            Some(Some(RawShape::Data)) => false,
        }
    }

    fn open_keyword(&mut self, name: &str, line_no: usize) {
        let shape = self.shapes.shape(name);
        let kind = if shape == Some(RawShape::Data) {
            RawKeywordKind::Data
        } else {
            RawKeywordKind::Tabular
        };
        trace!(keyword = name, line = line_no, ?shape, "keyword");
        let keyword = RawKeyword::new(name, kind, line_no);
        if shape == Some(RawShape::Records(0)) {
            self.deck.add_keyword(keyword);
        } else {
            self.open = Some(Open { keyword, shape });
        }
    }

    fn finish_record(&mut self, pending: Pending) {
        let record = RawRecord::new(pending.fields, pending.text.join(" "), pending.line);
        let Some(open) = self.open.as_mut() else {
            return;
        };
        match open.shape {
            Some(RawShape::Records(n)) => {
                open.keyword.add_record(record);
                if open.keyword.size() >= n {
                    self.close();
                }
            }
            Some(RawShape::SlashTerminated) | None => {
                if record.is_empty() {
                    self.close();
                } else {
                    open.keyword.add_record(record);
                }
            }
            Some(RawShape::Data) => open.keyword.add_record(record),
        }
    }

    fn close(&mut self) {
        if let Some(open) = self.open.take() {
            trace!(
                keyword = open.keyword.name(),
                n_records = open.keyword.size(),
                "closed keyword"
            );
            self.deck.add_keyword(open.keyword);
        }
    }

    fn finish(mut self) -> Result<RawDeck, RawError> {
        if let Some(pending) = self.pending.take() {
            let keyword = self
                .open
                .as_ref()
                .map(|open| open.keyword.name().to_string())
                .unwrap_or_default();
            return Err(RawError::UnterminatedRecord {
                keyword,
                line: pending.line,
            });
        }
        if let Some(open) = &self.open {
            match open.shape {
                Some(RawShape::Data) => {
                    return Err(RawError::UnterminatedData {
                        keyword: open.keyword.name().to_string(),
                        line: open.keyword.line(),
                    });
                }
                Some(RawShape::SlashTerminated) => {
                    debug!(
                        keyword = open.keyword.name(),
                        "end of input closes keyword without terminating '/'"
                    );
                }
                _ => {}
            }
        }
        self.close();
        Ok(self.deck)
    }
}
