//! Pantry - household ingredient stock & shopping list
//!
//! Tracks on-hand ingredients in a pipe-delimited flat file, keeps a standing
//! "always stock" list, and derives a shopping list from both.

pub mod codec;
pub mod config;
pub mod error;
pub mod inventory;
pub mod record;
pub mod render;
pub mod shopping;
pub mod standing;

pub use config::StoreConfig;
pub use error::{PantryError, Result};
pub use inventory::{AddOutcome, ConsumeOutcome, InventoryStore};
pub use record::Record;
pub use shopping::{RestockItem, RestockReason, ShoppingList};
pub use standing::{StandingListStore, StapleOutcome};
