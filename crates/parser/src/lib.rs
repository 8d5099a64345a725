//! # petra-parser
//!
//! Wires the tokenizer, the schema registry and the strictness policy
//! together: deck text in, [`Deck`](petra_deck::Deck) plus diagnostics out.
//!
//! ## Architecture
//!
//! ```text
//! text ─ strip_comments ─ tokenize(registry) ─▶ RawDeck
//!                                                 │ per keyword, in order
//!                  ┌──────────────────────────────┤
//!                  ▼                              ▼
//!        registered: ParserKW::parse     unregistered: UnknownKeyword policy
//!                  │                              │ tolerated → RAW strings
//!                  └──────────────┬───────────────┘
//!                                 ▼
//!                       Deck (+ active unit system)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use petra_parser::Parser;
//! use petra_schema::{MessageContainer, ParseContext};
//!
//! let parser = Parser::new().unwrap();
//! let mut messages = MessageContainer::new();
//! let deck = parser
//!     .parse_string("START\n 21 MAY 1981 /\nTSTEP\n 1 2 /\n", &ParseContext::default(), &mut messages)
//!     .unwrap();
//!
//! let start = deck.get_keyword("START").unwrap().get_record(0).unwrap();
//! assert_eq!(start.get_item_by_name("MONTH").unwrap().get_string(0).unwrap(), "MAY");
//! assert!(start.get_item_by_name("TIME").unwrap().default_applied(0).unwrap());
//! assert!(messages.is_empty());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `parser` | `Parser` orchestrator |
//! | `builtin` | `START`, `DATES`, `TSTEP`, unit-system and section keywords |

pub mod builtin;
mod parser;

pub use parser::Parser;
