use super::{App, DEFAULT_SESSION};
use crate::strings;

impl App {
    pub fn switch_session(&mut self, name: &str) -> Vec<String> {
        self.current_session = name.to_string();
        let entries = self.session().history.len();
        vec![strings::session_switched(name, entries)]
    }

    // Ending the active session falls back to the default one.
    pub fn end_session(&mut self, name: Option<String>) -> Vec<String> {
        let name = name.unwrap_or_else(|| self.current_session.clone());
        if !self.store.end(&name) {
            return vec![strings::unknown_session(&name)];
        }
        let mut out = vec![strings::session_ended(&name)];
        if name == self.current_session {
            out.extend(self.switch_session(DEFAULT_SESSION));
        }
        out
    }

    pub fn list_sessions(&self) -> Vec<String> {
        self.store
            .ids()
            .into_iter()
            .map(|id| {
                let entries = self.store.get(id).map(|s| s.history.len()).unwrap_or(0);
                let marker = if id == self.current_session { "*" } else { " " };
                format!("{} {} ({} entries)", marker, id, entries)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::app;

    #[test]
    fn sessions_are_independent() {
        let mut a = app();
        a.submit("visit Product->index");
        a.submit("session bob");
        assert!(a.session().history.is_empty());
        a.submit("session default");
        assert_eq!(a.session().history.len(), 1);
    }

    #[test]
    fn listing_marks_the_active_session() {
        let mut a = app();
        a.submit("session bob");
        a.submit("visit Order->index");
        assert_eq!(a.list_sessions(), ["* bob (1 entries)", "  default (0 entries)"]);
    }

    #[test]
    fn ending_the_active_session_drops_history_and_returns_to_default() {
        let mut a = app();
        a.submit("session bob");
        a.submit("visit Order->index");
        let out = a.submit("end");
        assert_eq!(out, ["session 'bob' ended", "session 'default' (0 entries)"]);
        assert_eq!(a.current_session, "default");
        a.submit("session bob");
        assert!(a.session().history.is_empty());
    }

    #[test]
    fn ending_an_unknown_session() {
        let mut a = app();
        assert_eq!(a.submit("end ghost"), ["no session 'ghost'"]);
    }
}
