use history_core::{Argument, Arguments, NavigationalRequest, RequestOverride, SkipRules};
use host::ActionRequest;
use serde_json::Value;
use tracing::info;

use super::command::Visit;
use super::App;
use crate::strings;

// `@name` refers to a catalog entity; numbers and booleans keep their type.
fn argument_value(app: &mut App, raw: &str) -> Argument {
    if let Some(name) = raw.strip_prefix('@') {
        return Argument::entity(app.catalog.get_or_insert(name));
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(v @ (Value::Number(_) | Value::Bool(_))) => Argument::Value(v),
        _ => Argument::value(raw),
    }
}

fn target_label(r: &ActionRequest) -> String {
    format!("{}:{}->{}", r.package_key(), r.controller_name(), r.action_name())
}

impl App {
    fn skip_rules(&self, spec: Option<&str>) -> Result<SkipRules, String> {
        match spec {
            Some(s) => SkipRules::parse(s).map_err(|e| e.to_string()),
            None => Ok(self.config.back_skip.clone()),
        }
    }

    // Record the visit if it is new, like a controller action would on every request.
    pub fn visit(&mut self, v: Visit) -> Vec<String> {
        let request = match ActionRequest::parse_target(&v.target, &self.config.default_package) {
            Ok(r) => r,
            Err(e) => return vec![strings::error(e)],
        };
        let mut o = RequestOverride::new();
        if let Some(stored_as) = &v.stored_as {
            match ActionRequest::parse_target(stored_as, request.package_key()) {
                Ok(t) => {
                    o = o
                        .package(t.package_key)
                        .controller(t.controller_name)
                        .action(t.action_name);
                }
                Err(e) => return vec![strings::error(e)],
            }
        }
        if !v.arguments.is_empty() {
            let mut args = Arguments::new();
            for (k, raw) in &v.arguments {
                let value = argument_value(self, raw);
                args.insert(k.clone(), value);
            }
            o = o.arguments(args);
        }
        let entity = v.entity.as_deref().map(|n| self.catalog.get_or_insert(n));
        let description = v
            .description
            .unwrap_or_else(|| format!("{}->{}", request.controller_name(), request.action_name()));
        let request_override = if o.is_empty() { None } else { Some(o) };

        let session = self.store.get_or_create(&self.current_session);
        match session
            .history
            .add_entry(description.clone(), request, entity, request_override)
        {
            Ok(Some(id)) => vec![strings::recorded(id.as_str(), &description)],
            Ok(None) => vec![strings::repeated(&description)],
            Err(e) => vec![strings::error(e)],
        }
    }

    pub fn back(&mut self, spec: Option<&str>) -> Vec<String> {
        let skip = match self.skip_rules(spec) {
            Ok(s) => s,
            Err(e) => return vec![strings::error(e)],
        };
        let session = self.store.get_or_create(&self.current_session);
        match self.controller.redirect_back(session, &skip) {
            Ok(Some(r)) => {
                info!(target: "console", "back skip={} -> {}", skip, r.location);
                vec![strings::redirect(&r)]
            }
            Ok(None) => vec![strings::NOTHING_TO_GO_BACK_TO.to_string()],
            Err(e) => vec![strings::error(e)],
        }
    }

    pub fn recent(
        &mut self,
        limit: Option<usize>,
        spec: Option<&str>,
        show_duplicates: bool,
    ) -> Vec<String> {
        let skip = match spec {
            Some(s) => match SkipRules::parse(s) {
                Ok(r) => r,
                Err(e) => return vec![strings::error(e)],
            },
            None => SkipRules::none(),
        };
        let limit = limit.unwrap_or(self.config.recent_limit);
        let collapse = self.config.skip_duplicate_descriptions && !show_duplicates;
        let session = self.store.get_or_create(&self.current_session);
        let entries = session.history.last_entries(limit, &skip, collapse);
        if entries.is_empty() {
            return vec![strings::EMPTY_HISTORY.to_string()];
        }
        entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let target = target_label(e.request());
                strings::entry_line(i + 1, e.description(), &target, e.id().as_str())
            })
            .collect()
    }

    pub fn goto(&mut self, entry_id: &str) -> Vec<String> {
        let session = self.store.get_or_create(&self.current_session);
        match self.controller.redirect_to_action_history_entry(session, entry_id) {
            Ok(r) => vec![strings::redirect(&r)],
            Err(e) => vec![strings::error(e)],
        }
    }
}
