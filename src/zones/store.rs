//! Zone store for card locations and movement.
//!
//! The `ZoneStore` owns every card instance of a session and tracks which
//! zone holds it. It supports:
//! - An ordered library (index 0 = top) with insertion at either end
//! - Insertion-ordered lists for the other zones, so snapshots are stable
//! - Card lookup by id and by name within a zone
//! - A location index that enforces the one-zone-per-card partition

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::entity::CardId;
use crate::core::rng::GameRng;
use crate::zones::zone::Zone;

/// Card counts per zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCounts {
    pub library_count: usize,
    pub hand_count: usize,
    pub battlefield_count: usize,
    pub graveyard_count: usize,
    pub exile_count: usize,
    pub command_count: usize,
    pub revealed_count: usize,
}

impl ZoneCounts {
    /// Sum over all seven zones.
    #[must_use]
    pub fn total(&self) -> usize {
        self.library_count
            + self.hand_count
            + self.battlefield_count
            + self.graveyard_count
            + self.exile_count
            + self.command_count
            + self.revealed_count
    }
}

/// Holds the contents of the seven zones.
///
/// ## Usage
///
/// ```
/// use goldfish::cards::CardInstance;
/// use goldfish::core::CardId;
/// use goldfish::zones::{Zone, ZoneStore};
///
/// let mut store = ZoneStore::new();
/// store.push(Zone::Library, CardInstance::new(CardId(1), "Island"));
/// store.push_top(Zone::Library, CardInstance::new(CardId(2), "Forest"));
///
/// // Index 0 is the top of the library
/// assert_eq!(store.cards(Zone::Library)[0].name, "Forest");
/// assert_eq!(store.zone_of(CardId(1)), Some(Zone::Library));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneStore {
    /// Contents per zone, indexed by `Zone::index`.
    zones: [Vec<CardInstance>; 7],

    /// Card locations: card id -> zone
    locations: FxHashMap<CardId, Zone>,
}

impl ZoneStore {
    /// Create a store with seven empty zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty every zone.
    pub fn clear(&mut self) {
        for zone in &mut self.zones {
            zone.clear();
        }
        self.locations.clear();
    }

    fn track(&mut self, card: &CardInstance, zone: Zone) {
        if let Some(existing) = self.locations.insert(card.id, zone) {
            panic!("{} already tracked in {}", card.id, existing);
        }
    }

    /// Append a card to the end of a zone (bottom, for the library).
    ///
    /// Panics if the card is already in the store.
    pub fn push(&mut self, zone: Zone, card: CardInstance) {
        self.track(&card, zone);
        self.zones[zone.index()].push(card);
    }

    /// Insert a card at index 0 of a zone (top, for the library).
    ///
    /// Panics if the card is already in the store.
    pub fn push_top(&mut self, zone: Zone, card: CardInstance) {
        self.track(&card, zone);
        self.zones[zone.index()].insert(0, card);
    }

    /// Append several cards to a zone, keeping their order.
    pub fn extend(&mut self, zone: Zone, cards: impl IntoIterator<Item = CardInstance>) {
        for card in cards {
            self.push(zone, card);
        }
    }

    /// Remove and return the card at `index` of a zone.
    pub fn remove_at(&mut self, zone: Zone, index: usize) -> Option<CardInstance> {
        let cards = &mut self.zones[zone.index()];
        if index >= cards.len() {
            return None;
        }
        let card = cards.remove(index);
        self.locations.remove(&card.id);
        Some(card)
    }

    /// Remove and return the first `n` cards of a zone, in order.
    ///
    /// Returns `None` without touching the zone if it holds fewer than `n`.
    pub fn take_front(&mut self, zone: Zone, n: usize) -> Option<Vec<CardInstance>> {
        let cards = &mut self.zones[zone.index()];
        if n > cards.len() {
            return None;
        }
        let taken: Vec<_> = cards.drain(..n).collect();
        for card in &taken {
            self.locations.remove(&card.id);
        }
        Some(taken)
    }

    /// Cards of a zone, in order.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[CardInstance] {
        &self.zones[zone.index()]
    }

    /// Up to `n` cards from the front of a zone.
    #[must_use]
    pub fn front(&self, zone: Zone, n: usize) -> &[CardInstance] {
        let cards = self.cards(zone);
        &cards[..n.min(cards.len())]
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.zones[zone.index()].len()
    }

    /// Index of a card within a zone, looked up by id.
    #[must_use]
    pub fn position_of(&self, zone: Zone, id: CardId) -> Option<usize> {
        if self.locations.get(&id) != Some(&zone) {
            return None;
        }
        self.cards(zone).iter().position(|c| c.id == id)
    }

    /// Index of the first card in a zone with exactly this name.
    #[must_use]
    pub fn position_by_name(&self, zone: Zone, name: &str) -> Option<usize> {
        self.cards(zone).iter().position(|c| c.is_named(name))
    }

    /// The zone currently holding a card.
    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        self.locations.get(&id).copied()
    }

    /// Shuffle a zone in place.
    pub fn shuffle_zone(&mut self, zone: Zone, rng: &mut GameRng) {
        rng.shuffle(&mut self.zones[zone.index()]);
    }

    /// Per-zone card counts.
    #[must_use]
    pub fn counts(&self) -> ZoneCounts {
        ZoneCounts {
            library_count: self.len(Zone::Library),
            hand_count: self.len(Zone::Hand),
            battlefield_count: self.len(Zone::Battlefield),
            graveyard_count: self.len(Zone::Graveyard),
            exile_count: self.len(Zone::Exile),
            command_count: self.len(Zone::Command),
            revealed_count: self.len(Zone::Revealed),
        }
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }
}
