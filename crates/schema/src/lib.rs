//! # petra-schema
//!
//! Schemas that map raw records onto typed deck records: per-item value
//! type, arity, default and dimension; per-record size policy; per-keyword
//! record layout and count bounds. Recoverable problems go through an
//! explicit [`ParseContext`] and land in a [`MessageContainer`].
//!
//! ## Architecture
//!
//! ```text
//! KeywordRegistry ── name ──▶ ParserKW (Fixed | Repeating | Data)
//!                                └─ ParserRecord (Fixed | RepeatLast)
//!                                     └─ ParserItem (type, Single|All, default, dimension)
//!
//! RawKeyword ──ParserKW::parse──▶ DeckKeyword
//!                   │
//!                   ├─ ParseContext  Issue → Ignore | Warn | Throw
//!                   └─ MessageContainer (warnings, in order)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use petra_deck::ValueType;
//! use petra_raw::{RawKeyword, RawKeywordKind, RawRecord};
//! use petra_schema::{
//!     MessageContainer, ParseContext, ParseEnv, ParserItem, ParserKW, ParserRecord, SizeType,
//! };
//! use petra_units::UnitSystem;
//!
//! let record = ParserRecord::from_items([ParserItem::new("STEP_SIZE", ValueType::Double)
//!     .with_size_type(SizeType::All)
//!     .with_dimension("Timestep")])
//! .unwrap();
//! let tstep = ParserKW::fixed("TSTEP", 1, record);
//!
//! let mut raw = RawKeyword::new("TSTEP", RawKeywordKind::Tabular, 1);
//! raw.add_record(RawRecord::parse("2*1 0.5 /").unwrap());
//!
//! let ctx = ParseContext::default();
//! let metric = UnitSystem::metric();
//! let env = ParseEnv::new(&ctx, &metric, &metric);
//! let mut messages = MessageContainer::new();
//! let keyword = tstep.parse(&env, &mut messages, &raw).unwrap();
//!
//! let steps = keyword.get_record(0).unwrap().get_item(0).unwrap();
//! assert_eq!(steps.get_si_double_data().unwrap(), vec![86400.0, 86400.0, 43200.0]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `item` | `ParserItem`, `SizeType`, default `Value` |
//! | `record` | `ParserRecord`, `RecordSize`, record parsing |
//! | `keyword` | `ParserKW`, `KeywordShape`, keyword parsing |
//! | `registry` | `KeywordRegistry`, also the tokenizer's shape lookup |
//! | `context` | `ParseContext`, `Issue`, `Action` |
//! | `messages` | `MessageContainer`, `Message`, `Severity` |
//! | `env` | `ParseEnv` |
//! | `fields` | Repeat-count expansion and float parsing |
//! | `error` | Error types and `Location` |

mod context;
mod env;
mod error;
mod fields;
mod item;
mod keyword;
mod messages;
mod record;
mod registry;

pub use context::{Action, Issue, ParseContext};
pub use env::ParseEnv;
pub use error::{Location, ParseError, SchemaError};
pub use item::{ParserItem, SizeType, Value};
pub use keyword::{KeywordShape, ParserKW};
pub use messages::{Message, MessageContainer, Severity};
pub use record::{ParserRecord, RecordSize};
pub use registry::KeywordRegistry;
