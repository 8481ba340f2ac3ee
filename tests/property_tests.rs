//! Property tests over random operation sequences.
//!
//! After any sequence of draws and moves:
//! - the number of cards across all zones never changes (conservation)
//! - no card id appears in two zones, and the location index agrees with
//!   the zone contents (partition)
//! - a rejected operation leaves every zone untouched (atomicity)

use std::collections::HashSet;

use goldfish::{
    CardId, CardInstance, DeckEntry, GameSession, LibraryPosition, NameSearch, SessionConfig, Zone,
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Draw {
        n: u32,
        to: Option<Zone>,
    },
    MoveById {
        pick: usize,
        declared_from: Option<Zone>,
        to: Zone,
        position: Option<LibraryPosition>,
    },
    MoveUnknown {
        from: Zone,
        to: Zone,
    },
    Search {
        name: &'static str,
        from: Zone,
        to: Zone,
        position: Option<LibraryPosition>,
        shuffle: bool,
    },
}

fn zone() -> impl Strategy<Value = Zone> {
    prop::sample::select(Zone::ALL.to_vec())
}

fn position() -> impl Strategy<Value = Option<LibraryPosition>> {
    prop_oneof![
        Just(None),
        Just(Some(LibraryPosition::Top)),
        Just(Some(LibraryPosition::Bottom)),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..12, prop::option::of(zone())).prop_map(|(n, to)| Op::Draw { n, to }),
        (any::<usize>(), prop::option::of(zone()), zone(), position()).prop_map(
            |(pick, declared_from, to, position)| Op::MoveById { pick, declared_from, to, position }
        ),
        (zone(), zone()).prop_map(|(from, to)| Op::MoveUnknown { from, to }),
        (
            prop::sample::select(vec!["Commander", "Sol Ring", "Forest", "Island", "Nonexistent"]),
            zone(),
            zone(),
            position(),
            any::<bool>(),
        )
            .prop_map(|(name, from, to, position, shuffle)| Op::Search {
                name,
                from,
                to,
                position,
                shuffle,
            }),
    ]
}

fn deck() -> Vec<DeckEntry> {
    vec![
        DeckEntry::commander("Commander"),
        DeckEntry::new("Sol Ring", 1),
        DeckEntry::new("Forest", 49),
        DeckEntry::new("Island", 49),
    ]
}

fn snapshot(session: &GameSession) -> Vec<Vec<CardInstance>> {
    Zone::ALL.iter().map(|&zone| session.cards(zone).to_vec()).collect()
}

fn all_cards(session: &GameSession) -> Vec<(Zone, CardInstance)> {
    Zone::ALL
        .iter()
        .flat_map(|&zone| session.cards(zone).iter().cloned().map(move |c| (zone, c)))
        .collect()
}

/// Returns whether the operation was accepted.
fn apply(session: &mut GameSession, op: &Op) -> bool {
    match *op {
        Op::Draw { n, to } => session.draw(n, to).is_ok(),
        Op::MoveById { pick, declared_from, to, position } => {
            let cards = all_cards(session);
            let (actual, card) = cards[pick % cards.len()].clone();
            let from = declared_from.unwrap_or(actual);
            session.move_by_id(card.id, from, to, position).is_ok()
        }
        Op::MoveUnknown { from, to } => session
            .move_by_id(CardId(u32::MAX), from, to, Some(LibraryPosition::Top))
            .is_ok(),
        Op::Search { name, from, to, position, shuffle } => {
            let mut search = NameSearch::new(name).search_in(from).send_to(to);
            search.to_library_position = position;
            search.shuffle_library_after = shuffle;
            session.find_and_move_by_name(&search).is_ok()
        }
    }
}

fn assert_partition(session: &GameSession) {
    let cards = all_cards(session);
    let mut seen = HashSet::new();
    for (zone, card) in &cards {
        assert!(seen.insert(card.id), "{} appears twice", card.id);
        assert_eq!(session.zone_of(card.id), Some(*zone));
    }
    assert_eq!(session.total_cards(), cards.len());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_conservation_partition_atomicity(
        seed in any::<u32>(),
        ops in prop::collection::vec(op(), 1..40),
    ) {
        let mut session = GameSession::default();
        session.load_deck(deck()).unwrap();
        let reset = session.reset(Some(seed)).unwrap();
        let total = reset.zones.total();
        prop_assert_eq!(total, 100);

        for op in &ops {
            let before = snapshot(&session);
            let accepted = apply(&mut session, op);

            if !accepted {
                prop_assert_eq!(snapshot(&session), before, "rejected {:?} mutated zones", op);
            }
            prop_assert_eq!(session.zone_counts().total(), total);
            assert_partition(&session);
        }
    }

    #[test]
    fn prop_seeded_reset_is_deterministic(seed in any::<u32>()) {
        let mut a = GameSession::default();
        let mut b = GameSession::default();
        a.load_deck(deck()).unwrap();
        b.load_deck(deck()).unwrap();

        a.reset(Some(seed)).unwrap();
        b.reset(Some(seed)).unwrap();

        let names_a: Vec<_> = a.peek(99).into_iter().map(|c| c.name).collect();
        let names_b: Vec<_> = b.peek(99).into_iter().map(|c| c.name).collect();
        prop_assert_eq!(names_a, names_b);
    }

    #[test]
    fn prop_synthesized_commander_conserves_101(
        seed in any::<u32>(),
        ops in prop::collection::vec(op(), 1..20),
    ) {
        let mut session = GameSession::new(SessionConfig::default());
        session.load_deck(vec![DeckEntry::new("Forest", 100)]).unwrap();
        let total = session.reset(Some(seed)).unwrap().zones.total();
        prop_assert_eq!(total, 101);

        for op in &ops {
            apply(&mut session, op);
            prop_assert_eq!(session.zone_counts().total(), 101);
        }
        assert_partition(&session);
    }

    #[test]
    fn prop_load_accepts_only_exact_totals(quantities in prop::collection::vec(-3i64..40, 0..8)) {
        let entries: Vec<_> = quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| DeckEntry::new(format!("Card {i}"), q))
            .collect();
        let declared: i64 = quantities.iter().sum();
        let expanded: i64 = quantities.iter().filter(|&&q| q > 0).sum();

        let mut session = GameSession::default();
        let result = session.load_deck(entries);

        prop_assert_eq!(result.is_ok(), declared == 100 && expanded == 100);
        prop_assert_eq!(session.deck().is_some(), result.is_ok());
    }
}
