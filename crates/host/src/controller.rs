use history_core::SkipRules;
use tracing::{info, warn};
use url::Url;

use crate::error::Result;
use crate::request::ActionRequest;
use crate::session::SessionContext;

/// 303 See Other, as used for redirects after a request was handled.
pub const SEE_OTHER: u16 = 303;

#[derive(Clone, Debug, PartialEq)]
pub struct Redirect {
    pub status: u16,
    pub location: Url,
    pub request: ActionRequest,
}

/// Turns history entries into redirects.
#[derive(Clone, Debug)]
pub struct HistoryController {
    base_url: Url,
}

impl HistoryController {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub fn redirect_to_request(&self, request: &ActionRequest) -> Result<Redirect> {
        let location = request.to_uri(&self.base_url)?;
        Ok(Redirect {
            status: SEE_OTHER,
            location,
            request: request.clone(),
        })
    }

    /// Redirects to the action stored under `entry_id`. Unknown ids fail with
    /// [`crate::HostError::NotFound`].
    pub fn redirect_to_action_history_entry(
        &self,
        session: &SessionContext,
        entry_id: &str,
    ) -> Result<Redirect> {
        let request = session
            .history
            .action_request_by_entry_id(entry_id)
            .map_err(|e| {
                warn!(target: "host", "session={} {}", session.id(), e);
                e
            })?;
        let redirect = self.redirect_to_request(request)?;
        info!(
            target: "host",
            "session={} redirect entry={} -> {}",
            session.id(),
            entry_id,
            redirect.location
        );
        Ok(redirect)
    }

    /// Redirects to the newest history entry not matching `skip`.
    pub fn redirect_back(
        &self,
        session: &SessionContext,
        skip: &SkipRules,
    ) -> Result<Option<Redirect>> {
        match session.history.last_action_request(skip) {
            Some(request) => self.redirect_to_request(request).map(Some),
            None => Ok(None),
        }
    }
}
