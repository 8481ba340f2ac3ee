//! Canonical decklists.
//!
//! A decklist arrives from the deck-import collaborator as `(name, quantity)`
//! pairs with sideboards already filtered out. Validation happens once, at
//! load time; a `DeckList` that exists is known to total the configured size.
//!
//! Quantities are signed because upstream data is untrusted. Every entry
//! counts toward the total, zero and negative ones included, and the
//! expanded card count must hit the same target.

use serde::{Deserialize, Serialize};

use crate::cards::instance::CardInstance;
use crate::core::entity::CardIdAllocator;
use crate::error::LoadError;

/// One line of a decklist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// Card name. Missing names deserialize as empty.
    #[serde(default)]
    pub name: String,

    /// Number of copies.
    pub quantity: i64,

    /// Marks the deck's commander.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub commander: bool,
}

impl DeckEntry {
    /// Create a regular entry.
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            commander: false,
        }
    }

    /// Create the commander entry (a single copy).
    pub fn commander(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            commander: true,
        }
    }

    /// Copies this entry expands to. Non-positive quantities expand to none.
    #[must_use]
    pub fn copies(&self) -> usize {
        usize::try_from(self.quantity).unwrap_or(0)
    }
}

/// A validated, immutable decklist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeckList {
    entries: Vec<DeckEntry>,
    total: usize,
}

impl DeckList {
    /// Validate raw entries against the required deck size.
    pub fn validate(entries: Vec<DeckEntry>, deck_size: usize) -> Result<Self, LoadError> {
        let declared = entries
            .iter()
            .try_fold(0i64, |sum, e| sum.checked_add(e.quantity));
        let expanded = entries
            .iter()
            .try_fold(0usize, |sum, e| sum.checked_add(e.copies()));

        match (declared, expanded) {
            (Some(declared), Some(expanded))
                if usize::try_from(declared).is_ok_and(|d| d == deck_size)
                    && expanded == deck_size =>
            {
                Ok(Self {
                    entries,
                    total: expanded,
                })
            }
            _ => Err(LoadError::InvalidDeckSize {
                expected: deck_size,
                // Overflowing totals are reported clamped.
                actual: declared.unwrap_or_else(|| {
                    entries
                        .iter()
                        .fold(0i64, |sum, e| sum.saturating_add(e.quantity))
                }),
            }),
        }
    }

    /// The entries, in the order they were supplied.
    #[must_use]
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Name of the first entry marked as commander, if any.
    #[must_use]
    pub fn marked_commander(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.commander)
            .map(|e| e.name.as_str())
    }

    /// Expand into fresh card instances, one per copy, in decklist order.
    pub fn expand(&self, ids: &mut CardIdAllocator) -> Vec<CardInstance> {
        let mut cards = Vec::with_capacity(self.total);
        for entry in &self.entries {
            for _ in 0..entry.copies() {
                cards.push(CardInstance::new(ids.next_id(), entry.name.clone()));
            }
        }
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::CardId;

    fn sample(lands: i64) -> Vec<DeckEntry> {
        vec![
            DeckEntry::commander("Commander"),
            DeckEntry::new("Sol Ring", 1),
            DeckEntry::new("Forest", lands),
        ]
    }

    #[test]
    fn test_validate_exact_size() {
        let deck = DeckList::validate(sample(98), 100).unwrap();

        assert_eq!(deck.total(), 100);
        assert_eq!(deck.entries().len(), 3);
        assert_eq!(deck.marked_commander(), Some("Commander"));
    }

    #[test]
    fn test_validate_wrong_size() {
        let err = DeckList::validate(sample(97), 100).unwrap_err();

        assert_eq!(err, LoadError::InvalidDeckSize { expected: 100, actual: 99 });
    }

    #[test]
    fn test_negative_quantities_count_toward_total() {
        // Declared sum is 100 but the expansion would be 101 cards.
        let mut entries = sample(99);
        entries.push(DeckEntry::new("Ghost", -1));

        assert!(DeckList::validate(entries, 100).is_err());
    }

    #[test]
    fn test_overflowing_quantities_are_rejected() {
        let entries = vec![DeckEntry::new("A", i64::MAX), DeckEntry::new("B", 1)];

        let err = DeckList::validate(entries, 100).unwrap_err();
        assert_eq!(err, LoadError::InvalidDeckSize { expected: 100, actual: i64::MAX });
    }

    #[test]
    fn test_wrapping_quantities_do_not_total_deck_size() {
        // Two maximal quantities plus 102 wrap to exactly 100.
        let entries = vec![
            DeckEntry::new("A", i64::MAX),
            DeckEntry::new("B", i64::MAX),
            DeckEntry::new("C", 102),
        ];

        assert!(DeckList::validate(entries, 100).is_err());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_expanded_count_overflow_is_rejected() {
        // Declared sum stays in range; the positive copies alone do not.
        let entries = vec![
            DeckEntry::new("A", i64::MAX),
            DeckEntry::new("B", i64::MIN + 1),
            DeckEntry::new("C", i64::MAX),
            DeckEntry::new("D", i64::MIN + 1),
            DeckEntry::new("E", i64::MAX),
            DeckEntry::new("F", i64::MIN + 1),
            DeckEntry::new("G", 100),
        ];

        assert!(DeckList::validate(entries, 100).is_err());
    }

    #[test]
    fn test_zero_quantity_entries_are_allowed() {
        let mut entries = sample(98);
        entries.push(DeckEntry::new("Maybe", 0));

        let deck = DeckList::validate(entries, 100).unwrap();
        assert_eq!(deck.total(), 100);
    }

    #[test]
    fn test_empty_decklist() {
        let err = DeckList::validate(Vec::new(), 100).unwrap_err();
        assert_eq!(err, LoadError::InvalidDeckSize { expected: 100, actual: 0 });
    }

    #[test]
    fn test_expand_preserves_order() {
        let deck = DeckList::validate(
            vec![DeckEntry::new("A", 2), DeckEntry::new("B", 0), DeckEntry::new("C", 1)],
            3,
        )
        .unwrap();
        let mut ids = CardIdAllocator::new();

        let cards = deck.expand(&mut ids);

        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "A", "C"]);
        let card_ids: Vec<_> = cards.iter().map(|c| c.id).collect();
        assert_eq!(card_ids, vec![CardId(1), CardId(2), CardId(3)]);
    }

    #[test]
    fn test_entry_deserialization_defaults() {
        let entry: DeckEntry = serde_json::from_str(r#"{"quantity": 4}"#).unwrap();

        assert_eq!(entry.name, "");
        assert_eq!(entry.quantity, 4);
        assert!(!entry.commander);
    }
}
