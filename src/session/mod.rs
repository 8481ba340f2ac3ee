//! Game sessions.
//!
//! A `GameSession` is the single owner of one simulated game: the loaded
//! decklist, the seven zones, the card id counter, the shuffle RNG and the
//! current game id. Operations are split by concern:
//!
//! - `loader`: validating and storing a decklist
//! - `reset`: rebuilding and shuffling the zones for a new game
//! - `moves`: draw, peek, zone listing, and the two move operations
//! - `registry`: sessions keyed by an opaque id, serialized per session
//!
//! Nothing returned from a session borrows its internals; every card list
//! handed out is a copy.

mod loader;
mod moves;
pub mod registry;
mod reset;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cards::{CardInstance, DeckList};
use crate::core::config::SessionConfig;
use crate::core::entity::{CardId, CardIdAllocator};
use crate::core::rng::GameRng;
use crate::zones::{Zone, ZoneCounts, ZoneStore};

pub use loader::LoadSuccess;
pub use moves::{DrawSuccess, NameSearch};
pub use registry::{SessionId, SessionRegistry};
pub use reset::ResetSuccess;

/// Opaque identifier of one game, regenerated on every reset.
///
/// Carries no state; callers use it to correlate responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One simulated game and everything it owns.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,

    /// Canonical decklist; `None` until a load succeeds.
    deck: Option<DeckList>,

    /// Commander identity used by the last reset.
    commander: Option<String>,

    zones: ZoneStore,
    ids: CardIdAllocator,
    rng: GameRng,
    game_id: Option<GameId>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    /// Create an empty session with no deck loaded.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            deck: None,
            commander: None,
            zones: ZoneStore::new(),
            ids: CardIdAllocator::new(),
            rng: GameRng::from_seed(None),
            game_id: None,
        }
    }

    /// The configuration this session follows.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The loaded decklist, if any.
    #[must_use]
    pub fn deck(&self) -> Option<&DeckList> {
        self.deck.as_ref()
    }

    /// Id of the current game; `None` before the first reset after a load.
    #[must_use]
    pub fn game_id(&self) -> Option<GameId> {
        self.game_id
    }

    /// Name of the card placed in the command zone by the last reset.
    #[must_use]
    pub fn commander_name(&self) -> Option<&str> {
        self.commander.as_deref()
    }

    /// Seed of the RNG driving the current game's shuffles.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Per-zone card counts.
    #[must_use]
    pub fn zone_counts(&self) -> ZoneCounts {
        self.zones.counts()
    }

    /// Cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.zones.total_cards()
    }

    /// Zone currently holding a card.
    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        self.zones.zone_of(id)
    }

    /// Read-only view of a zone, library included.
    ///
    /// Meant for hosts and tests; the caller-facing listing operation is
    /// `zone_contents`, which keeps the library hidden.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[CardInstance] {
        self.zones.cards(zone)
    }
}
