//! Draw, peek, zone listing and card movement.
//!
//! Every mutating operation here validates before it touches a zone, so a
//! rejected call leaves the session exactly as it was.

use serde::Serialize;
use tracing::{debug, warn};

use super::GameSession;
use crate::cards::CardInstance;
use crate::core::entity::CardId;
use crate::error::{CardLookup, MoveError};
use crate::zones::{LibraryPosition, NonLibraryZone, Zone};

/// Result of a successful draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DrawSuccess {
    /// Drawn cards, former top of library first.
    pub cards: Vec<CardInstance>,
    pub library_count: usize,
}

/// Parameters of a search-by-name move (a tutor).
///
/// Defaults: search the library, put the card into hand, shuffle the
/// library afterwards.
///
/// ```
/// use goldfish::session::NameSearch;
/// use goldfish::zones::{LibraryPosition, Zone};
///
/// let search = NameSearch::new("Sol Ring")
///     .search_in(Zone::Graveyard)
///     .send_to(Zone::Library)
///     .at(LibraryPosition::Top);
///
/// assert_eq!(search.from_zone, Zone::Graveyard);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameSearch {
    pub card_name: String,
    pub from_zone: Zone,
    pub to_zone: Zone,
    pub to_library_position: Option<LibraryPosition>,
    /// Only honored when searching the library.
    pub shuffle_library_after: bool,
}

impl NameSearch {
    /// Search the library for `card_name` and put it into hand.
    pub fn new(card_name: impl Into<String>) -> Self {
        Self {
            card_name: card_name.into(),
            from_zone: Zone::Library,
            to_zone: Zone::Hand,
            to_library_position: None,
            shuffle_library_after: true,
        }
    }

    /// Search another zone.
    #[must_use]
    pub fn search_in(mut self, zone: Zone) -> Self {
        self.from_zone = zone;
        self
    }

    /// Send the card somewhere other than hand.
    #[must_use]
    pub fn send_to(mut self, zone: Zone) -> Self {
        self.to_zone = zone;
        self
    }

    /// Library end to place the card at, when the destination is the library.
    #[must_use]
    pub fn at(mut self, position: LibraryPosition) -> Self {
        self.to_library_position = Some(position);
        self
    }

    /// Leave the library order alone after the search.
    #[must_use]
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle_library_after = false;
        self
    }
}

/// Where a relocated card ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    /// End of a non-library zone.
    Append,
    /// Index 0 of the library.
    LibraryTop,
    /// End of the library.
    LibraryBottom,
    /// Library to library with no position: the card stays where it is.
    Stay,
}

/// Library destinations need an explicit end unless the card already lives
/// in the library. Positions given for other destinations are ignored.
fn placement(
    from: Zone,
    to: Zone,
    position: Option<LibraryPosition>,
) -> Result<Placement, MoveError> {
    if to != Zone::Library {
        return Ok(Placement::Append);
    }
    match (position, from) {
        (Some(LibraryPosition::Top), _) => Ok(Placement::LibraryTop),
        (Some(LibraryPosition::Bottom), _) => Ok(Placement::LibraryBottom),
        (None, Zone::Library) => Ok(Placement::Stay),
        (None, from) => Err(MoveError::InvalidLibraryMove { from }),
    }
}

impl GameSession {
    /// Move the top `n` library cards, in order, to `to_zone` (hand by
    /// default).
    ///
    /// Drawing more cards than the library holds is rejected outright;
    /// there are no partial draws.
    pub fn draw(&mut self, n: u32, to_zone: Option<Zone>) -> Result<DrawSuccess, MoveError> {
        let requested = n as usize;
        let destination = to_zone.unwrap_or(Zone::Hand);

        let Some(cards) = self.zones.take_front(Zone::Library, requested) else {
            let available = self.zones.len(Zone::Library);
            warn!(requested, available, "draw exceeds library");
            return Err(MoveError::InsufficientLibrary { requested, available });
        };

        self.zones.extend(destination, cards.iter().cloned());
        let library_count = self.zones.len(Zone::Library);
        debug!(drawn = requested, to = %destination, library_count, "drew cards");

        Ok(DrawSuccess { cards, library_count })
    }

    /// Top `n` cards of the library without moving them. Returns fewer when
    /// the library is smaller.
    #[must_use]
    pub fn peek(&self, n: u32) -> Vec<CardInstance> {
        self.zones.front(Zone::Library, n as usize).to_vec()
    }

    /// Copy of a zone's contents in insertion order.
    #[must_use]
    pub fn zone_contents(&self, zone: NonLibraryZone) -> Vec<CardInstance> {
        self.zones.cards(zone.into()).to_vec()
    }

    /// Move one card, found by id in `from_zone`, to `to_zone`.
    pub fn move_by_id(
        &mut self,
        card_id: CardId,
        from_zone: Zone,
        to_zone: Zone,
        to_library_position: Option<LibraryPosition>,
    ) -> Result<CardInstance, MoveError> {
        let placement = placement(from_zone, to_zone, to_library_position).inspect_err(|err| {
            warn!(%card_id, error = %err, "rejected move");
        })?;

        let Some(index) = self.zones.position_of(from_zone, card_id) else {
            warn!(%card_id, from = %from_zone, "card not in source zone");
            return Err(MoveError::CardNotFound {
                zone: from_zone,
                card: CardLookup::Id(card_id),
            });
        };

        let card = self.relocate(from_zone, index, to_zone, placement, CardLookup::Id(card_id))?;
        debug!(%card_id, from = %from_zone, to = %to_zone, "moved card");
        Ok(card)
    }

    /// Find the first card with an exact name in the search zone and move it.
    ///
    /// Searching the library shuffles it afterwards unless the search says
    /// otherwise; the flag has no effect for other source zones.
    pub fn find_and_move_by_name(
        &mut self,
        search: &NameSearch,
    ) -> Result<CardInstance, MoveError> {
        let from_zone = search.from_zone;
        let placement = placement(from_zone, search.to_zone, search.to_library_position)
            .inspect_err(|err| {
                warn!(card = %search.card_name, error = %err, "rejected search");
            })?;

        let Some(index) = self.zones.position_by_name(from_zone, &search.card_name) else {
            warn!(card = %search.card_name, from = %from_zone, "search found nothing");
            return Err(MoveError::CardNotFound {
                zone: from_zone,
                card: CardLookup::Name(search.card_name.clone()),
            });
        };

        let card = self.relocate(
            from_zone,
            index,
            search.to_zone,
            placement,
            CardLookup::Name(search.card_name.clone()),
        )?;

        if from_zone == Zone::Library && search.shuffle_library_after {
            self.zones.shuffle_zone(Zone::Library, &mut self.rng);
        }
        debug!(
            card_id = %card.id,
            card = %card.name,
            from = %from_zone,
            to = %search.to_zone,
            "found and moved card"
        );
        Ok(card)
    }

    fn relocate(
        &mut self,
        from: Zone,
        index: usize,
        to: Zone,
        placement: Placement,
        lookup: CardLookup,
    ) -> Result<CardInstance, MoveError> {
        let not_found = || MoveError::CardNotFound { zone: from, card: lookup };

        if placement == Placement::Stay {
            return self.zones.cards(from).get(index).cloned().ok_or_else(not_found);
        }

        let card = self.zones.remove_at(from, index).ok_or_else(not_found)?;
        match placement {
            Placement::Append => self.zones.push(to, card.clone()),
            Placement::LibraryTop => self.zones.push_top(Zone::Library, card.clone()),
            Placement::LibraryBottom | Placement::Stay => {
                self.zones.push(Zone::Library, card.clone());
            }
        }
        Ok(card)
    }
}
