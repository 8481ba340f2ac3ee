//! Game reset and opening shuffle.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::{GameId, GameSession};
use crate::cards::CardInstance;
use crate::core::config::CommanderPolicy;
use crate::core::rng::GameRng;
use crate::error::ResetError;
use crate::zones::{Zone, ZoneCounts};

/// Result of a successful reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResetSuccess {
    pub game_id: GameId,
    /// Seed actually used; drawn from entropy when none was supplied.
    pub seed: u64,
    pub zones: ZoneCounts,
}

impl GameSession {
    /// Start a new game from the loaded decklist.
    ///
    /// Every zone is rebuilt from scratch: the decklist is expanded into
    /// fresh card instances, the commander goes alone into the command zone,
    /// and the rest is shuffled into the library. The same seed always gives
    /// the same library name order; card ids differ between resets.
    pub fn reset(&mut self, seed: Option<u32>) -> Result<ResetSuccess, ResetError> {
        let Some(deck) = self.deck.as_ref() else {
            warn!("reset requested with no deck loaded");
            return Err(ResetError::NoDeckLoaded);
        };

        let commander_name = deck
            .marked_commander()
            .unwrap_or(self.config.commander_name.as_str())
            .to_string();

        let in_deck = deck
            .entries()
            .iter()
            .any(|e| e.name == commander_name && e.copies() > 0);
        if !in_deck && self.config.commander_policy == CommanderPolicy::Strict {
            warn!(commander = %commander_name, "commander missing from decklist");
            return Err(ResetError::CommanderNotFound { name: commander_name });
        }

        self.zones.clear();
        self.rng = GameRng::from_seed(seed);

        // Room for the whole deck plus a synthesized commander.
        let needed = deck.total().saturating_add(1);
        if usize::try_from(self.ids.remaining()).is_ok_and(|left| left < needed) {
            debug!(issued = self.ids.issued(), "card ids exhausted, restarting numbering");
            self.ids.restart();
        }

        let mut pool = deck.expand(&mut self.ids);

        let commander = match pool.iter().position(|c| c.is_named(&commander_name)) {
            Some(index) => {
                let commander = pool.remove(index);
                let library_size = self.config.library_size();
                if pool.len() > library_size {
                    warn!(pool = pool.len(), library_size, "truncating oversized library");
                    pool.truncate(library_size);
                }
                commander
            }
            None => {
                warn!(
                    commander = %commander_name,
                    "commander missing from decklist, synthesizing one"
                );
                CardInstance::new(self.ids.next_id(), commander_name.clone())
            }
        };

        self.zones.push(Zone::Command, commander);
        self.zones.extend(Zone::Library, pool);
        self.zones.shuffle_zone(Zone::Library, &mut self.rng);

        let game_id = GameId::generate();
        self.game_id = Some(game_id);
        self.commander = Some(commander_name);

        let zones = self.zones.counts();
        info!(%game_id, seed = self.rng.seed(), library = zones.library_count, "game reset");

        Ok(ResetSuccess {
            game_id,
            seed: self.rng.seed(),
            zones,
        })
    }
}
