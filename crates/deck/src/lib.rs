//! # petra-deck
//!
//! Strongly-typed, in-memory model of a parsed deck: items hold typed
//! values with per-slot default tracking, records hold named items,
//! keywords hold records, and the deck holds keywords in source order.
//!
//! ## Architecture
//!
//! ```text
//! Deck
//!  └─ DeckKeyword*        (name, known, data, slash_terminated)
//!      └─ DeckRecord*     (unique item names)
//!          └─ DeckItem    (Int | Double | String slots, dimensions)
//!              └─ Slot    Present | DefaultedPresent | DefaultedAbsent
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use petra_deck::{DeckItem, DeckKeyword, DeckRecord, ValueType};
//!
//! let mut day = DeckItem::new("DAY", ValueType::Int);
//! day.push_back(21).unwrap();
//! let mut time = DeckItem::new("TIME", ValueType::String);
//! time.push_back_default("00:00:00".to_string()).unwrap();
//!
//! let record = DeckRecord::from_items([day, time]).unwrap();
//! assert_eq!(record.get_item_by_name("DAY").unwrap().get_int(0).unwrap(), 21);
//! assert!(record.get_item(1).unwrap().default_applied(0).unwrap());
//!
//! let mut keyword = DeckKeyword::new("START");
//! keyword.add_record(record);
//! assert_eq!(keyword.to_string(), "START\n 21 1* /\n");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `value` | `ValueType`, `Slot`, `ItemData`, the sealed `ItemValue` trait |
//! | `item` | `DeckItem` storage, defaults and SI conversion |
//! | `record` | `DeckRecord` |
//! | `keyword` | `DeckKeyword` |
//! | `deck` | `Deck` container |
//! | `error` | Error types |

mod deck;
mod error;
mod item;
mod keyword;
mod record;
mod value;

pub use deck::Deck;
pub use error::DeckError;
pub use item::DeckItem;
pub use keyword::{DATA_ITEM, DeckKeyword, RAW_ITEM};
pub use record::DeckRecord;
pub use value::{ItemData, ItemValue, Slot, ValueType};
