// Centralized console strings and labels. ASCII-friendly by default.

use host::Redirect;
use unicode_width::UnicodeWidthStr;

pub const PROMPT_SUFFIX: &str = "> ";

pub const WELCOME: &str = "action-history console. Type 'help' for commands, 'quit' to exit.";

pub const HELP: &str = "\
Commands:
  session <name>                       switch to (or start) a session
  end [name]                           end a session and drop its history
  sessions                             list active sessions
  visit <[Pkg:]Controller->action> [desc=<text>] [entity=<name>] [as=<target>] [key=value|key=@entity ...]
                                       record a visited action
  back [skip-spec]                     go back to the last action not matching the skip spec
  recent [n] [skip-spec] [--dups]      list the newest entries
  goto <entry-id>                      redirect to a history entry
  help                                 show this help
  quit                                 exit";

// Description column is padded to this width in listings
const DESCRIPTION_WIDTH: usize = 28;

pub fn prompt(session: &str) -> String {
    format!("{}{}", session, PROMPT_SUFFIX)
}

pub fn recorded(id: &str, description: &str) -> String {
    format!("recorded {} \"{}\"", id, description)
}

pub fn repeated(description: &str) -> String {
    format!("already on \"{}\", nothing recorded", description)
}

pub fn redirect(r: &Redirect) -> String {
    format!("{} See Other -> {}", r.status, r.location)
}

pub const NOTHING_TO_GO_BACK_TO: &str = "no earlier action to go back to";

pub const EMPTY_HISTORY: &str = "(no entries)";

pub fn session_switched(name: &str, entries: usize) -> String {
    format!("session '{}' ({} entries)", name, entries)
}

pub fn session_ended(name: &str) -> String {
    format!("session '{}' ended", name)
}

pub fn unknown_session(name: &str) -> String {
    format!("no session '{}'", name)
}

pub fn error(msg: impl std::fmt::Display) -> String {
    format!("error: {}", msg)
}

pub fn unknown_command(cmd: &str) -> String {
    format!("unknown command '{}', try 'help'", cmd)
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// One line of the `recent` listing: `  1  <description>  <target>  <id>`.
pub fn entry_line(index: usize, description: &str, target: &str, id: &str) -> String {
    format!(
        "{:>3}  {}  {}  {}",
        index,
        pad(description, DESCRIPTION_WIDTH),
        target,
        id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("日本", 5), "日本 ");
        assert_eq!(pad("too long", 3), "too long");
    }

    #[test]
    fn entry_line_layout() {
        let line = entry_line(1, "Listed products", "Product->index", "ID1");
        assert!(line.starts_with("  1  Listed products"));
        assert!(line.ends_with("Product->index  ID1"));
    }
}
