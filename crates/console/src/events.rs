use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::{app::App, strings};

pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", strings::WELCOME)?;
    let mut lines = input.lines();
    loop {
        write!(out, "{}", app.prompt())?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.with_context(|| "read console input")?;
        for l in app.submit(&line) {
            writeln!(out, "{}", l)?;
        }
        if app.should_quit {
            break;
        }
    }
    info!(target: "console", "exit: {} sessions open", app.store.len());
    Ok(())
}
