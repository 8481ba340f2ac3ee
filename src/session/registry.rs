//! Sessions keyed by an opaque id.
//!
//! Each external conversation gets its own `GameSession`. Different
//! sessions share nothing and run in parallel; calls against the same
//! session are serialized by a per-session mutex.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use super::GameSession;
use crate::core::config::SessionConfig;
use crate::tools::ToolCall;

/// Opaque key of a session, typically a conversation id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// All live sessions of a host.
///
/// ## Usage
///
/// ```
/// use goldfish::cards::DeckEntry;
/// use goldfish::session::{SessionId, SessionRegistry};
///
/// let registry = SessionRegistry::default();
/// let id = SessionId::from("conversation-1");
///
/// let loaded = registry.with_session(&id, |session| {
///     session.load_deck(vec![DeckEntry::commander("Commander"), DeckEntry::new("Island", 99)])
/// });
///
/// assert_eq!(loaded.unwrap().card_count, 100);
/// assert!(registry.contains(&id));
/// ```
#[derive(Debug, Default)]
pub struct SessionRegistry {
    config: SessionConfig,
    sessions: DashMap<SessionId, Arc<Mutex<GameSession>>>,
}

impl SessionRegistry {
    /// Create a registry whose sessions follow `config`.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            sessions: DashMap::new(),
        }
    }

    /// Configuration applied to new sessions.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Handle to a session, created empty on first use.
    pub fn session(&self, id: &SessionId) -> Arc<Mutex<GameSession>> {
        self.sessions
            .entry(id.clone())
            .or_insert_with(|| {
                debug!(session = %id, "creating session");
                Arc::new(Mutex::new(GameSession::new(self.config.clone())))
            })
            .value()
            .clone()
    }

    /// Run `f` with exclusive access to a session.
    ///
    /// The map shard is released before the session lock is taken, so a
    /// long call on one session never blocks lookups of others.
    pub fn with_session<R>(&self, id: &SessionId, f: impl FnOnce(&mut GameSession) -> R) -> R {
        let session = self.session(id);
        let mut guard = session.lock();
        f(&mut guard)
    }

    /// Parse a JSON tool call and run it against a session.
    ///
    /// Always returns a response object; malformed calls produce
    /// `{"ok": false, "error": ..}` without touching the session.
    pub fn dispatch(&self, id: &SessionId, call: &str) -> serde_json::Value {
        let span = info_span!("dispatch", session = %id);
        let _enter = span.enter();

        match ToolCall::from_json(call) {
            Ok(call) => self.with_session(id, |session| call.invoke(session)),
            Err(err) => crate::tools::malformed(&err),
        }
    }

    /// Drop a session. Returns whether it existed.
    pub fn remove(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    #[must_use]
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Ids of all live sessions, sorted.
    #[must_use]
    pub fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();
        ids
    }
}
