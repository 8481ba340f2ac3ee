//! Deck loading.

use serde::Serialize;
use tracing::{info, warn};

use super::GameSession;
use crate::cards::{DeckEntry, DeckList};
use crate::error::LoadError;

/// Result of a successful load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LoadSuccess {
    pub card_count: usize,
}

impl GameSession {
    /// Validate a decklist and make it the canonical list for later resets.
    ///
    /// On rejection the session is untouched, including any previously
    /// loaded deck. On success the card id counter restarts and all zones
    /// are emptied; no game is started until `reset` is called.
    pub fn load_deck(&mut self, entries: Vec<DeckEntry>) -> Result<LoadSuccess, LoadError> {
        let deck = match DeckList::validate(entries, self.config.deck_size) {
            Ok(deck) => deck,
            Err(err) => {
                warn!(error = %err, "rejected decklist");
                return Err(err);
            }
        };

        let card_count = deck.total();
        self.ids.restart();
        self.zones.clear();
        self.game_id = None;
        self.commander = None;
        self.deck = Some(deck);

        info!(card_count, "deck loaded");
        Ok(LoadSuccess { card_count })
    }
}
