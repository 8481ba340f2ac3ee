//! Zone kinds.
//!
//! The seven zones are a closed enum. Zone names coming from callers are
//! parsed at the boundary (serde or `FromStr`), so move logic never sees an
//! unknown zone.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the seven card containers of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Ordered; index 0 is the top card.
    Library,
    Hand,
    Battlefield,
    Graveyard,
    Exile,
    /// Holds the commander and nothing else after a reset.
    Command,
    /// Cards shown to the table by an effect.
    Revealed,
}

impl Zone {
    /// All zones, in a fixed order.
    pub const ALL: [Zone; 7] = [
        Zone::Library,
        Zone::Hand,
        Zone::Battlefield,
        Zone::Graveyard,
        Zone::Exile,
        Zone::Command,
        Zone::Revealed,
    ];

    /// Position of this zone in [`Zone::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Zone::Library => 0,
            Zone::Hand => 1,
            Zone::Battlefield => 2,
            Zone::Graveyard => 3,
            Zone::Exile => 4,
            Zone::Command => 5,
            Zone::Revealed => 6,
        }
    }

    /// Lowercase name, as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::Library => "library",
            Zone::Hand => "hand",
            Zone::Battlefield => "battlefield",
            Zone::Graveyard => "graveyard",
            Zone::Exile => "exile",
            Zone::Command => "command",
            Zone::Revealed => "revealed",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a zone name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown zone `{0}`")]
pub struct UnknownZone(pub String);

impl FromStr for Zone {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|z| z.as_str() == s)
            .ok_or_else(|| UnknownZone(s.to_string()))
    }
}

/// Zones whose contents may be listed directly.
///
/// The library is hidden information; it is only observable through
/// peeking and drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonLibraryZone {
    Hand,
    Battlefield,
    Graveyard,
    Exile,
    Command,
    Revealed,
}

impl From<NonLibraryZone> for Zone {
    fn from(zone: NonLibraryZone) -> Self {
        match zone {
            NonLibraryZone::Hand => Zone::Hand,
            NonLibraryZone::Battlefield => Zone::Battlefield,
            NonLibraryZone::Graveyard => Zone::Graveyard,
            NonLibraryZone::Exile => Zone::Exile,
            NonLibraryZone::Command => Zone::Command,
            NonLibraryZone::Revealed => Zone::Revealed,
        }
    }
}

impl TryFrom<Zone> for NonLibraryZone {
    type Error = Zone;

    fn try_from(zone: Zone) -> Result<Self, Self::Error> {
        match zone {
            Zone::Library => Err(zone),
            Zone::Hand => Ok(NonLibraryZone::Hand),
            Zone::Battlefield => Ok(NonLibraryZone::Battlefield),
            Zone::Graveyard => Ok(NonLibraryZone::Graveyard),
            Zone::Exile => Ok(NonLibraryZone::Exile),
            Zone::Command => Ok(NonLibraryZone::Command),
            Zone::Revealed => Ok(NonLibraryZone::Revealed),
        }
    }
}

/// Where a card enters the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryPosition {
    /// Index 0; the next card drawn.
    Top,
    /// Last index.
    Bottom,
}
