//! Card identity allocation.
//!
//! Every physical card in a session gets its own `CardId` when the decklist
//! is expanded. Ids are handed out by a monotonically increasing counter that
//! belongs to the session, so two sessions never share allocation state.
//!
//! ## Lifetime
//!
//! - Loading a deck restarts the counter.
//! - Resetting a game does **not** restart it: every reset re-expands the
//!   decklist into fresh instances, and those must not collide with ids the
//!   caller may still hold from the previous game.
//!
//! ## Usage
//!
//! ```
//! use goldfish::core::{CardId, CardIdAllocator};
//!
//! let mut ids = CardIdAllocator::new();
//! let a = ids.next_id();
//! let b = ids.next_id();
//!
//! assert_eq!(a, CardId(1));
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of one physical card instance.
///
/// Never inferred from position in a zone; zones are reordered and spliced
/// constantly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Session-scoped counter issuing fresh `CardId`s.
#[derive(Clone, Debug, Default)]
pub struct CardIdAllocator {
    issued: u32,
}

impl CardIdAllocator {
    /// Create an allocator that has issued nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue an id distinct from every id issued since the last `restart`.
    ///
    /// Once every `u32` id has been issued, numbering starts over at 1.
    /// Callers that need uniqueness across a batch check `remaining` first.
    pub fn next_id(&mut self) -> CardId {
        self.issued = self.issued.checked_add(1).unwrap_or(1);
        CardId(self.issued)
    }

    #[cfg(test)]
    pub(crate) fn starting_after(issued: u32) -> Self {
        Self { issued }
    }

    /// Number of ids that can still be issued before numbering starts over.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        u32::MAX - self.issued
    }

    /// Forget all issued ids. The next id is `CardId(1)` again.
    pub fn restart(&mut self) {
        self.issued = 0;
    }

    /// Number of ids issued since the last restart.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.issued
    }
}
