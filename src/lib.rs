//! # goldfish
//!
//! A zone engine for solitaire "goldfishing" of a 100-card commander deck.
//!
//! The engine models where every card of one deck is (library, hand,
//! battlefield, graveyard, exile, command, revealed) and exposes small
//! operations an external agent chains together to play out a game:
//! load a decklist, reset and shuffle, draw, peek, move by id, and
//! search-and-move by name.
//!
//! ## Design Principles
//!
//! 1. **Session-Scoped**: All state lives in a `GameSession`. Sessions are
//!    keyed by an opaque id and never share anything.
//!
//! 2. **Deterministic**: A seeded reset always produces the same library
//!    order; shuffles use a single Fisher–Yates routine.
//!
//! 3. **All-or-Nothing**: A rejected operation leaves every zone exactly as
//!    it was. Cards are never duplicated or dropped.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration
//! - `cards`: Card instances and decklists
//! - `zones`: Zone kinds and the zone store
//! - `session`: Game sessions, their operations, and the session registry
//! - `tools`: JSON tool-call surface
//! - `error`: Rejection types

pub mod core;
pub mod cards;
pub mod zones;
pub mod session;
pub mod tools;
pub mod error;

// Re-export commonly used types
pub use crate::core::{CardId, CommanderPolicy, GameRng, SessionConfig};

pub use crate::cards::{CardInstance, DeckEntry, DeckList};

pub use crate::zones::{LibraryPosition, NonLibraryZone, Zone, ZoneCounts, ZoneStore};

pub use crate::session::{
    DrawSuccess, GameId, GameSession, LoadSuccess, NameSearch, ResetSuccess,
    SessionId, SessionRegistry,
};

pub use crate::tools::ToolCall;

pub use crate::error::{CardLookup, Error, LoadError, MoveError, ResetError, Result};
