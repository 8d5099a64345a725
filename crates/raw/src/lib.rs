//! # petra-raw
//!
//! Turns deck text into keyword blocks and records without any knowledge of
//! what the records mean.
//!
//! ## Architecture
//!
//! ```text
//! deck text
//!   ├─ strip_comments()          (comments.rs)
//!   └─ tokenize()                (tokenizer.rs)
//!        ├─ keyword lines        → RawKeyword
//!        ├─ '/'-terminated text  → RawRecord (fields, quoting kept)
//!        └─ data blocks          → RawRecord per verbatim line
//! ```
//!
//! How a keyword's body ends is decided by keyword identity through a
//! [`ShapeLookup`], never by looking at the body itself.
//!
//! ## Quick Start
//!
//! ```
//! use petra_raw::{RawDeck, RawShape};
//!
//! let text = "START\n 21 MAY 1981 /\nDATES\n 1 JAN 1982 /\n/\n";
//! let shapes = |name: &str| match name {
//!     "START" => Some(RawShape::Records(1)),
//!     "DATES" => Some(RawShape::SlashTerminated),
//!     _ => None,
//! };
//! let deck = RawDeck::parse(text, &shapes).unwrap();
//! assert_eq!(deck.size(), 2);
//! assert_eq!(deck.get_keyword("DATES").unwrap().size(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `record` | `RawField` and `RawRecord`, single-record tokenizing |
//! | `keyword` | `RawKeyword` |
//! | `deck` | `RawDeck` container |
//! | `shape` | `RawShape` and the `ShapeLookup` trait |
//! | `tokenizer` | The line-oriented state machine |
//! | `comments` | `--` comment stripping |
//! | `error` | Error types |

mod comments;
mod deck;
mod error;
mod keyword;
mod record;
mod shape;
mod tokenizer;

pub use comments::strip_comments;
pub use deck::RawDeck;
pub use error::RawError;
pub use keyword::{RawKeyword, RawKeywordKind, is_keyword_name};
pub use record::{RawField, RawRecord};
pub use shape::{NoShapes, RawShape, ShapeLookup};
pub use tokenizer::tokenize;
