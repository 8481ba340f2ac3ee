//! Error types surfaced by session operations.
//!
//! Every error here is an expected, recoverable rejection. A session that
//! returned one is unchanged and fully usable.

use thiserror::Error;

use crate::core::entity::CardId;
use crate::zones::Zone;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejections from loading a decklist.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("deck must contain exactly {expected} cards, got {actual}")]
    InvalidDeckSize { expected: usize, actual: i64 },
}

/// Rejections from resetting a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResetError {
    #[error("no deck loaded; load a decklist before resetting")]
    NoDeckLoaded,

    #[error("commander `{name}` is not in the decklist")]
    CommanderNotFound { name: String },
}

/// How a missing card was being looked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardLookup {
    Id(CardId),
    Name(String),
}

impl std::fmt::Display for CardLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardLookup::Id(id) => write!(f, "{id}"),
            CardLookup::Name(name) => write!(f, "card named `{name}`"),
        }
    }
}

/// Rejections from draw and move operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cannot draw {requested} cards, library has {available}")]
    InsufficientLibrary { requested: usize, available: usize },

    #[error("moving a card from {from} to the library requires a top or bottom position")]
    InvalidLibraryMove { from: Zone },

    #[error("{card} not found in {zone}")]
    CardNotFound { zone: Zone, card: CardLookup },
}

/// Any rejection from a session operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Reset(#[from] ResetError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

impl LoadError {
    /// Stable machine-readable kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::InvalidDeckSize { .. } => "invalid_deck_size",
        }
    }
}

impl ResetError {
    /// Stable machine-readable kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ResetError::NoDeckLoaded => "no_deck_loaded",
            ResetError::CommanderNotFound { .. } => "commander_not_found",
        }
    }
}

impl MoveError {
    /// Stable machine-readable kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::InsufficientLibrary { .. } => "insufficient_library",
            MoveError::InvalidLibraryMove { .. } => "invalid_library_move",
            MoveError::CardNotFound { .. } => "card_not_found",
        }
    }
}

impl Error {
    /// Stable machine-readable kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Load(e) => e.kind(),
            Error::Reset(e) => e.kind(),
            Error::Move(e) => e.kind(),
        }
    }
}
