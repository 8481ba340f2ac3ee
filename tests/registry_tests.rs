//! Session registry concurrency tests.
//!
//! Different sessions run in parallel without cross-talk; concurrent calls
//! against the same session are serialized.

mod common;

use std::collections::HashSet;
use std::thread;

use goldfish::{DeckEntry, SessionId, SessionRegistry, Zone};

fn deck() -> Vec<DeckEntry> {
    vec![
        DeckEntry::commander("Commander"),
        DeckEntry::new("Mind Stone", 1),
        DeckEntry::new("Plains", 49),
        DeckEntry::new("Island", 49),
    ]
}

fn opening_names(registry: &SessionRegistry, id: &SessionId, seed: u32) -> Vec<String> {
    registry.with_session(id, |session| {
        session.load_deck(deck()).unwrap();
        session.reset(Some(seed)).unwrap();
        session
            .draw(7, None)
            .unwrap()
            .cards
            .into_iter()
            .map(|c| c.name)
            .collect()
    })
}

#[test]
fn test_parallel_sessions_do_not_interfere() {
    common::init_tracing();
    let expected: Vec<_> = (0..8u32)
        .map(|seed| {
            let solo = SessionRegistry::default();
            opening_names(&solo, &SessionId::from("solo"), seed)
        })
        .collect();

    let registry = SessionRegistry::default();
    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8u32)
            .map(|seed| {
                let registry = &registry;
                scope.spawn(move || {
                    let id = SessionId::new(format!("conversation-{seed}"));
                    opening_names(registry, &id, seed)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, expected);
    assert_eq!(registry.len(), 8);
}

#[test]
fn test_concurrent_draws_on_one_session_are_serialized() {
    common::init_tracing();
    let registry = SessionRegistry::default();
    let id = SessionId::from("shared");
    registry.with_session(&id, |session| {
        session.load_deck(deck()).unwrap();
        session.reset(Some(12)).unwrap();
    });

    let drawn: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = &registry;
                let id = id.clone();
                scope.spawn(move || {
                    (0..10)
                        .map(|_| {
                            registry.with_session(&id, |s| s.draw(1, None).unwrap().cards[0].id)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
    });

    let unique: HashSet<_> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), 80);

    registry.with_session(&id, |session| {
        let counts = session.zone_counts();
        assert_eq!(counts.hand_count, 80);
        assert_eq!(counts.library_count, 19);
        assert!(drawn.iter().all(|&card| session.zone_of(card) == Some(Zone::Hand)));
    });
}

#[test]
fn test_dispatch_routes_by_session() {
    common::init_tracing();
    let registry = SessionRegistry::default();
    let a = SessionId::from("a");
    let b = SessionId::from("b");

    registry.with_session(&a, |s| s.load_deck(deck()).unwrap());

    let reset_a = registry.dispatch(&a, r#"{"tool": "reset", "seed": 5}"#);
    let reset_b = registry.dispatch(&b, r#"{"tool": "reset", "seed": 5}"#);

    assert_eq!(reset_a["zones"]["library_count"], 99);
    assert_eq!(reset_b["ok"], false);
    assert_eq!(registry.session_ids(), vec![a, b]);
}
