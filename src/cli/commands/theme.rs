use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AppState;
use crate::core::state::THEME_KEY;
use crate::db::store::{KvStore, open_or_memory};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { toggle, set } = cmd {
        let mut store = open_or_memory(&cfg.database);
        let mut state = AppState::load(&*store);

        let changed = if *toggle {
            state.toggle_theme();
            true
        } else if let Some(t) = set {
            state.set_theme(*t);
            true
        } else {
            false
        };

        if changed {
            state.persist_theme(&mut *store);
            store.log("theme", THEME_KEY, state.theme.as_str());
            success(format!("Theme set to {}", state.theme));
        } else {
            info(format!("Current theme: {}", state.theme));
        }
    }

    Ok(())
}
