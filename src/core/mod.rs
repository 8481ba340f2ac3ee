//! Core engine types: card ids, RNG, configuration.
//!
//! These are the building blocks every session owns one of. Nothing here
//! is shared between sessions.

pub mod config;
pub mod entity;
pub mod rng;

pub use config::{CommanderPolicy, SessionConfig, DEFAULT_COMMANDER_NAME, DEFAULT_DECK_SIZE};
pub use entity::{CardId, CardIdAllocator};
pub use rng::GameRng;
