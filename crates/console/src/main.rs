mod app;
mod events;
mod logging;
mod strings;

use anyhow::Result;
use host::HistoryConfig;

fn main() -> Result<()> {
    let _log_guard = logging::init();
    let config = HistoryConfig::from_env_and_file()?;
    let mut app = app::App::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    events::run(&mut app, stdin.lock(), &mut stdout)
}
