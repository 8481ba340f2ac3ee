//! Session configuration.
//!
//! Hosts configure the engine once and every session created from that
//! configuration follows it:
//! - `deck_size`: the exact decklist total a load must hit
//! - `commander_name`: fallback commander identity when the decklist marks none
//! - `commander_policy`: what a reset does when the commander is missing
//!
//! `SessionConfig` deserializes with defaults for every field, so an empty
//! JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

/// Decklist total required by a standard commander deck.
pub const DEFAULT_DECK_SIZE: usize = 100;

/// Commander identity used when the decklist marks no entry.
pub const DEFAULT_COMMANDER_NAME: &str = "Commander";

/// Behavior of a reset whose commander is absent from the decklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommanderPolicy {
    /// Create a brand new card for the command zone. The game then holds one
    /// card more than the deck's nominal size.
    #[default]
    Synthesize,
    /// Reject the reset with `ResetError::CommanderNotFound`.
    Strict,
}

/// Configuration shared by all sessions of a host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Exact number of cards a decklist must total.
    pub deck_size: usize,

    /// Commander name used when no decklist entry is marked as commander.
    pub commander_name: String,

    /// Missing-commander behavior on reset.
    pub commander_policy: CommanderPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            deck_size: DEFAULT_DECK_SIZE,
            commander_name: DEFAULT_COMMANDER_NAME.to_string(),
            commander_policy: CommanderPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the required deck size.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Set the fallback commander name.
    #[must_use]
    pub fn with_commander_name(mut self, name: impl Into<String>) -> Self {
        self.commander_name = name.into();
        self
    }

    /// Reject resets whose commander is missing instead of synthesizing one.
    #[must_use]
    pub fn strict_commander(mut self) -> Self {
        self.commander_policy = CommanderPolicy::Strict;
        self
    }

    /// Number of cards the library holds right after a reset.
    #[must_use]
    pub fn library_size(&self) -> usize {
        self.deck_size.saturating_sub(1)
    }
}
