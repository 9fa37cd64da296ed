//! Session scoped history of visited controller actions.
//!
//! Entries are appended in visiting order. Reads walk the history backwards
//! from the newest entry and never modify it.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::entity::{same_entity, same_optional_entity, EntityRef, IdentityConverter};
use crate::error::{HistoryError, Result};
use crate::request::{NavigationalRequest, RequestOverride};
use crate::skip::SkipRules;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    fn generate() -> Self {
        Self(format!("ID{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for EntryId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[derive(Clone)]
pub struct HistoryEntry<R> {
    id: EntryId,
    description: String,
    request: R,
    entity: Option<EntityRef>,
}

impl<R> HistoryEntry<R> {
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn request(&self) -> &R {
        &self.request
    }

    pub fn entity(&self) -> Option<&EntityRef> {
        self.entity.as_ref()
    }

    /// Display-time duplicate check against the entry shown just before this one.
    fn repeats(&self, previous: &Self, skip_duplicate_descriptions: bool) -> bool {
        if self.description != previous.description {
            return false;
        }
        if skip_duplicate_descriptions {
            return true;
        }
        match (&self.entity, &previous.entity) {
            (Some(a), Some(b)) => same_entity(a, b),
            _ => false,
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for HistoryEntry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryEntry")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("request", &self.request)
            .field(
                "entity",
                &self
                    .entity
                    .as_ref()
                    .map(|e| format!("{}#{}", e.type_name(), e.identifier())),
            )
            .finish()
    }
}

/// The per-session ledger of visited actions.
pub struct ActionHistory<R> {
    entries: Vec<HistoryEntry<R>>,
    converter: Arc<dyn IdentityConverter>,
}

impl<R: NavigationalRequest> ActionHistory<R> {
    pub fn new(converter: Arc<dyn IdentityConverter>) -> Self {
        Self {
            entries: Vec::new(),
            converter,
        }
    }

    /// Records a visited action.
    ///
    /// Nothing is recorded when the newest entry already has the same
    /// description and the very same entity (or both have none). Only the
    /// tail is compared. Returns the id of the new entry when one was added.
    /// A blank description is rejected.
    pub fn add_entry(
        &mut self,
        description: impl Into<String>,
        mut request: R,
        entity: Option<EntityRef>,
        request_override: Option<RequestOverride>,
    ) -> Result<Option<&EntryId>> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(HistoryError::EmptyDescription);
        }
        if let Some(last) = self.entries.last() {
            if last.description == description
                && same_optional_entity(last.entity.as_ref(), entity.as_ref())
            {
                debug!(target: "history", "skip repeated entry: {}", description);
                return Ok(None);
            }
        }
        if let Some(o) = request_override {
            o.apply_to(&mut request, self.converter.as_ref());
        }
        let entry = HistoryEntry {
            id: EntryId::generate(),
            description,
            request,
            entity,
        };
        debug!(
            target: "history",
            "add entry id={} description={:?} target={}:{}->{}",
            entry.id,
            entry.description,
            entry.request.package_key(),
            entry.request.controller_name(),
            entry.request.action_name()
        );
        self.entries.push(entry);
        Ok(self.entries.last().map(|e| &e.id))
    }

    /// Newest first, without entries matching `skip`.
    pub fn visible<'a, 's>(
        &'a self,
        skip: &'s SkipRules,
    ) -> impl Iterator<Item = &'a HistoryEntry<R>> + 's
    where
        'a: 's,
    {
        self.entries
            .iter()
            .rev()
            .filter(move |e| !skip.matches(&e.request))
    }

    /// Up to `limit` entries, newest first.
    ///
    /// Entries matching `skip` are left out entirely. An entry repeating the
    /// one returned just before it is dropped: with
    /// `skip_duplicate_descriptions` an equal description is enough,
    /// otherwise both must also carry the very same entity.
    pub fn last_entries(
        &self,
        limit: usize,
        skip: &SkipRules,
        skip_duplicate_descriptions: bool,
    ) -> Vec<&HistoryEntry<R>> {
        let mut out: Vec<&HistoryEntry<R>> = Vec::new();
        if limit == 0 {
            return out;
        }
        for entry in self.visible(skip) {
            if let Some(prev) = out.last() {
                if entry.repeats(prev, skip_duplicate_descriptions) {
                    continue;
                }
            }
            out.push(entry);
            if out.len() >= limit {
                break;
            }
        }
        out
    }

    /// The request of the newest entry not matching `skip`.
    pub fn last_action_request(&self, skip: &SkipRules) -> Option<&R> {
        self.visible(skip).next().map(|e| &e.request)
    }

    pub fn action_request_by_entry_id(&self, entry_id: &str) -> Result<&R> {
        self.entry(entry_id)
            .map(|e| &e.request)
            .ok_or_else(|| HistoryError::EntryNotFound(entry_id.to_string()))
    }

    pub fn entry(&self, entry_id: &str) -> Option<&HistoryEntry<R>> {
        self.entries.iter().rev().find(|e| e.id == *entry_id)
    }

    /// Oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry<R>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: fmt::Debug> fmt::Debug for ActionHistory<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHistory")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
