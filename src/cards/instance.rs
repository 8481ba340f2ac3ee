//! Card instances - one physical copy of a named card.
//!
//! Names are not unique: a deck with thirty-five basic lands holds
//! thirty-five instances sharing a name, each with its own `CardId`.
//! Instances are created during decklist expansion and never mutated.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;

/// A card instance in a game.
///
/// Serializes as `{"id": .., "name": ..}`, the shape every operation
/// reports cards in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this instance.
    pub id: CardId,

    /// Display name of the card.
    pub name: String,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Exact, case-sensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}
