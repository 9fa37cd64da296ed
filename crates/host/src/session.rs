use std::{collections::HashMap, sync::Arc};

use history_core::{ActionHistory, IdentityConverter};
use tracing::info;

use crate::identity::IdentityReferenceConverter;
use crate::request::ActionRequest;

pub type SessionId = String;

/// Everything bound to one user session. Handed explicitly to every
/// controller call that needs the history.
#[derive(Debug)]
pub struct SessionContext {
    id: SessionId,
    pub history: ActionHistory<ActionRequest>,
}

impl SessionContext {
    pub fn new(id: impl Into<SessionId>, converter: Arc<dyn IdentityConverter>) -> Self {
        Self {
            id: id.into(),
            history: ActionHistory::new(converter),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// One history ledger per session: created on first access, dropped with the session.
pub struct SessionStore {
    sessions: HashMap<SessionId, SessionContext>,
    converter: Arc<dyn IdentityConverter>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Arc::new(IdentityReferenceConverter))
    }
}

impl SessionStore {
    pub fn new(converter: Arc<dyn IdentityConverter>) -> Self {
        Self {
            sessions: HashMap::new(),
            converter,
        }
    }

    pub fn get_or_create(&mut self, id: &str) -> &mut SessionContext {
        let converter = &self.converter;
        self.sessions.entry(id.to_string()).or_insert_with(|| {
            info!(target: "host", "session start: {}", id);
            SessionContext::new(id, converter.clone())
        })
    }

    pub fn get(&self, id: &str) -> Option<&SessionContext> {
        self.sessions.get(id)
    }

    /// Ends a session, discarding its history. Returns false for unknown ids.
    pub fn end(&mut self, id: &str) -> bool {
        match self.sessions.remove(id) {
            Some(ctx) => {
                let dropped = ctx.history.len();
                info!(target: "host", "session end: {} ({} entries dropped)", id, dropped);
                true
            }
            None => false,
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sessions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
