//! Explicit per-session application state and its load/save against a
//! key-value store.

use crate::catalog::Catalog;
use crate::core::history::{self, HistoryLog};
use crate::core::random::RandomSource;
use crate::core::select::{select_next, select_next_in};
use crate::db::store::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, ExcuseRecord, Theme};
use crate::ui::messages::warning;

pub const HISTORY_KEY: &str = "eaas-history";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub theme: Theme,
    pub history: HistoryLog,
    /// Never persisted: each process starts with nothing on screen.
    pub current: Option<ExcuseRecord>,
}

impl AppState {
    /// Restore state, falling back to the terminal's theme.
    pub fn load(store: &dyn KvStore) -> Self {
        Self::load_with(store, Theme::platform())
    }

    /// Restore state from `store`.
    ///
    /// Missing or unreadable values fall back to an empty history and
    /// `platform_theme`; failures go to the internal log only.
    pub fn load_with(store: &dyn KvStore, platform_theme: Theme) -> Self {
        let history = read_history(store).unwrap_or_else(|e| {
            store.log("restore", HISTORY_KEY, &e.to_string());
            HistoryLog::new()
        });

        let theme = match read_theme(store) {
            Ok(Some(t)) => t,
            Ok(None) => platform_theme,
            Err(e) => {
                store.log("restore", THEME_KEY, &e.to_string());
                platform_theme
            }
        };

        Self {
            theme,
            history,
            current: None,
        }
    }

    /// Pick the next excuse, make it current and record it in the history.
    /// The caller persists the history afterwards.
    pub fn generate(
        &mut self,
        catalog: &Catalog,
        category: Option<Category>,
        rng: &mut dyn RandomSource,
        now: i64,
    ) -> AppResult<ExcuseRecord> {
        let picked = match category {
            Some(c) => select_next_in(catalog, c, self.current.as_ref(), rng)?,
            None => select_next(catalog, self.current.as_ref(), rng)?,
        }
        .clone();

        self.history = history::record_selection(&self.history, &picked, now);
        self.current = Some(picked.clone());
        Ok(picked)
    }

    pub fn clear_history(&mut self) {
        self.history = history::clear_history();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn save_history(&self, store: &mut dyn KvStore) -> AppResult<()> {
        store.set(HISTORY_KEY, &self.history.to_json()?)
    }

    pub fn save_theme(&self, store: &mut dyn KvStore) -> AppResult<()> {
        store.set(THEME_KEY, self.theme.as_str())
    }

    /// Save the history; a failed write is logged and reported, never fatal.
    pub fn persist_history(&self, store: &mut dyn KvStore) -> bool {
        let result = self.save_history(store);
        report_write(store, HISTORY_KEY, result)
    }

    /// Save the theme; a failed write is logged and reported, never fatal.
    pub fn persist_theme(&self, store: &mut dyn KvStore) -> bool {
        let result = self.save_theme(store);
        report_write(store, THEME_KEY, result)
    }
}

fn report_write(store: &dyn KvStore, key: &str, result: AppResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            store.log("persist_failed", key, &e.to_string());
            warning(format!("Could not save {}: {}", key, e));
            false
        }
    }
}

fn read_history(store: &dyn KvStore) -> AppResult<HistoryLog> {
    let raw = store
        .get(HISTORY_KEY)
        .map_err(|e| AppError::PersistenceRead(e.to_string()))?;

    match raw {
        Some(raw) => HistoryLog::from_json(&raw),
        None => Ok(HistoryLog::new()),
    }
}

fn read_theme(store: &dyn KvStore) -> AppResult<Option<Theme>> {
    let raw = store
        .get(THEME_KEY)
        .map_err(|e| AppError::PersistenceRead(e.to_string()))?;

    raw.map(|s| {
        s.parse::<Theme>()
            .map_err(|e| AppError::PersistenceRead(e.to_string()))
    })
    .transpose()
}
