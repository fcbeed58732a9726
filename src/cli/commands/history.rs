use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AppState;
use crate::core::state::HISTORY_KEY;
use crate::db::store::{KvStore, open_or_memory};
use crate::errors::AppResult;
use crate::ui::clipboard::{SystemClipboard, copy_text};
use crate::ui::messages::success;
use crate::ui::render::render_history;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { clear, copy } = cmd {
        let mut store = open_or_memory(&cfg.database);
        let mut state = AppState::load(&*store);

        if let Some(n) = copy {
            let entry = state.history.nth(*n)?;
            copy_text(&mut SystemClipboard, &entry.record.text, &*store);
            return Ok(());
        }

        if *clear {
            state.clear_history();
            if state.persist_history(&mut *store) {
                store.log("clear", HISTORY_KEY, "History cleared");
            }
            success("History cleared.");
        }

        print!("{}", render_history(&state.history, state.theme));
    }

    Ok(())
}
