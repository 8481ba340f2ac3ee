//! Zone system for card locations.
//!
//! The seven zones are fixed: library, hand, battlefield, graveyard, exile,
//! command and revealed.
//!
//! ## Key Types
//!
//! - `Zone`: Closed enum of the seven zones
//! - `NonLibraryZone`: Zones whose contents callers may list
//! - `LibraryPosition`: Top or bottom, for cards entering the library
//! - `ZoneStore`: Card contents and location tracking
//! - `ZoneCounts`: Per-zone card counts

pub mod store;
pub mod zone;

pub use store::{ZoneCounts, ZoneStore};
pub use zone::{LibraryPosition, NonLibraryZone, UnknownZone, Zone};
