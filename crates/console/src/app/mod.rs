use host::{HistoryConfig, HistoryController, SessionContext, SessionStore};
use tracing::{info, warn};

use crate::strings;

pub mod catalog;
pub mod command;
pub mod history;
pub mod sessions;

use catalog::Catalog;
use command::Command;

pub const DEFAULT_SESSION: &str = "default";

pub struct App {
    pub config: HistoryConfig,
    pub store: SessionStore,
    pub controller: HistoryController,
    pub catalog: Catalog,
    pub current_session: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: HistoryConfig) -> Self {
        let controller = HistoryController::new(config.base_url.clone());
        let mut store = SessionStore::default();
        store.get_or_create(DEFAULT_SESSION);
        Self {
            config,
            store,
            controller,
            catalog: Catalog::default(),
            current_session: DEFAULT_SESSION.to_string(),
            should_quit: false,
        }
    }

    pub fn prompt(&self) -> String {
        strings::prompt(&self.current_session)
    }

    /// The active session, started on first use.
    pub fn session(&mut self) -> &mut SessionContext {
        self.store.get_or_create(&self.current_session)
    }

    /// Runs one console line and returns what to print.
    pub fn submit(&mut self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        let cmd = match Command::parse(text) {
            Ok(c) => c,
            Err(e) => {
                warn!(target: "console", "rejected input: {}", e);
                return vec![strings::error(e)];
            }
        };
        info!(target: "console", "session={} command={:?}", self.current_session, cmd);
        match cmd {
            Command::Session(name) => self.switch_session(&name),
            Command::End(name) => self.end_session(name),
            Command::Sessions => self.list_sessions(),
            Command::Visit(v) => self.visit(v),
            Command::Back(skip) => self.back(skip.as_deref()),
            Command::Recent {
                limit,
                skip,
                show_duplicates,
            } => self.recent(limit, skip.as_deref(), show_duplicates),
            Command::Goto(id) => self.goto(&id),
            Command::Help => strings::HELP.lines().map(str::to_string).collect(),
            Command::Quit => {
                self.should_quit = true;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn app() -> App {
        App::new(HistoryConfig::defaults().unwrap())
    }

    #[test]
    fn starts_in_the_default_session() {
        let mut a = app();
        assert_eq!(a.prompt(), "default> ");
        assert!(a.session().history.is_empty());
    }

    #[test]
    fn blank_lines_do_nothing() {
        let mut a = app();
        assert!(a.submit("   ").is_empty());
    }

    #[test]
    fn parse_errors_are_reported() {
        let mut a = app();
        let out = a.submit("teleport");
        assert_eq!(out, ["error: unknown command 'teleport', try 'help'"]);
    }

    #[test]
    fn quit_sets_flag() {
        let mut a = app();
        a.submit("quit");
        assert!(a.should_quit);
    }

    #[test]
    fn help_lists_commands() {
        let mut a = app();
        let out = a.submit("help");
        assert!(out.iter().any(|l| l.trim_start().starts_with("goto <entry-id>")));
    }
}
