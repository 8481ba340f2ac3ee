//! Card system: instances and decklists.
//!
//! ## Key Types
//!
//! - `CardInstance`: One physical card (id + name)
//! - `DeckEntry`: One `(name, quantity)` line supplied by a caller
//! - `DeckList`: A validated decklist that expands into instances

pub mod decklist;
pub mod instance;

pub use decklist::{DeckEntry, DeckList};
pub use instance::CardInstance;
