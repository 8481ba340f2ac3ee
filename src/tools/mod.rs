//! JSON tool surface.
//!
//! An external agent drives a session by issuing one call at a time, each a
//! JSON object tagged by `tool`:
//!
//! ```json
//! {"tool": "draw", "n": 7}
//! {"tool": "move_by_id", "card_id": 12, "from_zone": "hand", "to_zone": "library", "to_library_position": "top"}
//! ```
//!
//! Responses are plain JSON values. Rejections come back as
//! `{"ok": false, "error": <message>, "kind": <error kind>}`; unknown tools,
//! unknown zone names and missing arguments are rejected while parsing,
//! before any session is touched.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::cards::DeckEntry;
use crate::core::entity::CardId;
use crate::error::{Error, Result};
use crate::session::{GameSession, NameSearch};
use crate::zones::{LibraryPosition, NonLibraryZone, Zone};

/// One operation requested by a caller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolCall {
    LoadDeck {
        decklist: Vec<DeckEntry>,
    },
    Reset {
        #[serde(default)]
        seed: Option<u32>,
    },
    Draw {
        n: u32,
        #[serde(default)]
        to_zone: Option<Zone>,
    },
    Peek {
        n: u32,
    },
    ZoneContents {
        zone: NonLibraryZone,
    },
    MoveById {
        card_id: CardId,
        from_zone: Zone,
        to_zone: Zone,
        #[serde(default)]
        to_library_position: Option<LibraryPosition>,
    },
    FindAndMoveByName {
        card_name: String,
        #[serde(default = "default_search_zone")]
        from_zone: Zone,
        #[serde(default = "default_destination")]
        to_zone: Zone,
        #[serde(default)]
        to_library_position: Option<LibraryPosition>,
        #[serde(default = "default_shuffle")]
        shuffle_library_after: bool,
    },
}

fn default_search_zone() -> Zone {
    Zone::Library
}

fn default_destination() -> Zone {
    Zone::Hand
}

fn default_shuffle() -> bool {
    true
}

impl ToolCall {
    /// Parse a call from JSON text.
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    /// Parse a call from an already-decoded JSON value.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Wire name of the tool.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::LoadDeck { .. } => "load_deck",
            ToolCall::Reset { .. } => "reset",
            ToolCall::Draw { .. } => "draw",
            ToolCall::Peek { .. } => "peek",
            ToolCall::ZoneContents { .. } => "zone_contents",
            ToolCall::MoveById { .. } => "move_by_id",
            ToolCall::FindAndMoveByName { .. } => "find_and_move_by_name",
        }
    }

    /// Run the call against a session and build its response.
    pub fn invoke(self, session: &mut GameSession) -> Value {
        let tool = self.name();
        let response: Result<Value> = match self {
            ToolCall::LoadDeck { decklist } => session
                .load_deck(decklist)
                .map(|loaded| json!({"ok": true, "card_count": loaded.card_count}))
                .map_err(Error::from),
            ToolCall::Reset { seed } => session
                .reset(seed)
                .map(|reset| json!(reset))
                .map_err(Error::from),
            ToolCall::Draw { n, to_zone } => session
                .draw(n, to_zone)
                .map(|drawn| json!(drawn))
                .map_err(Error::from),
            ToolCall::Peek { n } => Ok(json!({"cards": session.peek(n)})),
            ToolCall::ZoneContents { zone } => Ok(json!({"cards": session.zone_contents(zone)})),
            ToolCall::MoveById {
                card_id,
                from_zone,
                to_zone,
                to_library_position,
            } => session
                .move_by_id(card_id, from_zone, to_zone, to_library_position)
                .map(|_| json!({"ok": true}))
                .map_err(Error::from),
            ToolCall::FindAndMoveByName {
                card_name,
                from_zone,
                to_zone,
                to_library_position,
                shuffle_library_after,
            } => {
                let search = NameSearch {
                    card_name,
                    from_zone,
                    to_zone,
                    to_library_position,
                    shuffle_library_after,
                };
                session
                    .find_and_move_by_name(&search)
                    .map(|card| json!({"ok": true, "moved_card": card}))
                    .map_err(Error::from)
            }
        };

        response.unwrap_or_else(|err| {
            debug!(tool, kind = err.kind(), "tool call rejected");
            rejected(&err)
        })
    }
}

/// Response for a rejected operation.
#[must_use]
pub fn rejected(err: &Error) -> Value {
    json!({"ok": false, "error": err.to_string(), "kind": err.kind()})
}

/// Response for a call that could not be parsed.
#[must_use]
pub fn malformed(err: &serde_json::Error) -> Value {
    json!({"ok": false, "error": format!("invalid tool call: {err}"), "kind": "invalid_call"})
}
