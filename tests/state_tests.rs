mod common;

use common::{ScriptedRandom, abc_catalog};
use eaas::core::AppState;
use eaas::core::state::{HISTORY_KEY, THEME_KEY};
use eaas::db::store::{KvStore, MemoryStore, SqliteStore, open_or_memory};
use eaas::errors::{AppError, AppResult};
use eaas::models::{Category, Theme};
use std::cell::RefCell;

/// Store whose reads and writes always fail.
#[derive(Default)]
struct BrokenStore {
    logged: RefCell<Vec<String>>,
}

impl KvStore for BrokenStore {
    fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::Other("disk unplugged".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Other("disk unplugged".into()))
    }

    fn log(&self, operation: &str, _target: &str, _message: &str) {
        self.logged.borrow_mut().push(operation.to_string());
    }
}

#[test]
fn fresh_store_gives_empty_history_and_platform_theme() {
    let store = MemoryStore::new();
    let state = AppState::load_with(&store, Theme::Light);

    assert!(state.history.is_empty());
    assert_eq!(state.theme, Theme::Light);
    assert!(state.current.is_none());
    assert!(store.logged().is_empty());
}

#[test]
fn garbage_history_falls_back_to_empty_and_is_logged() {
    let store = MemoryStore::new().with_value(HISTORY_KEY, "[{broken");
    let state = AppState::load_with(&store, Theme::Dark);

    assert!(state.history.is_empty());
    let logged = store.logged();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].0, "restore");
    assert_eq!(logged[0].1, HISTORY_KEY);
}

#[test]
fn invalid_theme_falls_back_to_platform() {
    let store = MemoryStore::new().with_value(THEME_KEY, "purple");
    let state = AppState::load_with(&store, Theme::Light);

    assert_eq!(state.theme, Theme::Light);
    assert_eq!(store.logged()[0].1, THEME_KEY);
}

#[test]
fn stored_theme_wins_over_platform() {
    let store = MemoryStore::new().with_value(THEME_KEY, "dark");
    let state = AppState::load_with(&store, Theme::Light);

    assert_eq!(state.theme, Theme::Dark);
}

#[test]
fn history_survives_a_restart_but_current_does_not() {
    let catalog = abc_catalog();
    let mut store = MemoryStore::new();
    let mut rng = ScriptedRandom::new(&[1]);

    let mut state = AppState::load_with(&store, Theme::Dark);
    let picked = state.generate(&catalog, None, &mut rng, 10).unwrap();
    state.save_history(&mut store).unwrap();

    assert_eq!(state.current.as_ref(), Some(&picked));

    let restored = AppState::load_with(&store, Theme::Dark);
    assert_eq!(restored.history, state.history);
    assert!(restored.current.is_none());
}

#[test]
fn generate_never_repeats_within_a_session() {
    let catalog = abc_catalog();
    let mut store = MemoryStore::new();
    let mut rng = ScriptedRandom::new(&[0]);
    let mut state = AppState::load_with(&store, Theme::Dark);

    let mut previous: Option<String> = None;
    for t in 0..10 {
        let picked = state.generate(&catalog, None, &mut rng, t).unwrap();
        if let Some(prev) = &previous {
            assert_ne!(&picked.id, prev);
        }
        previous = Some(picked.id);
    }
    state.save_history(&mut store).unwrap();

    assert_eq!(state.history.len(), 5);
}

#[test]
fn generate_by_category() {
    let catalog = eaas::catalog::Catalog::builtin().unwrap();
    let mut rng = ScriptedRandom::new(&[2]);
    let mut state = AppState::load_with(&MemoryStore::new(), Theme::Dark);

    let picked = state
        .generate(&catalog, Some(Category::Health), &mut rng, 1)
        .unwrap();
    assert_eq!(picked.category, Category::Health);
}

#[test]
fn clear_and_theme_are_persisted() {
    let catalog = abc_catalog();
    let mut store = MemoryStore::new();
    let mut rng = ScriptedRandom::new(&[0]);
    let mut state = AppState::load_with(&store, Theme::Dark);

    state.generate(&catalog, None, &mut rng, 1).unwrap();
    state.save_history(&mut store).unwrap();
    state.clear_history();
    state.save_history(&mut store).unwrap();
    assert_eq!(state.toggle_theme(), Theme::Light);
    state.save_theme(&mut store).unwrap();

    assert_eq!(store.get(HISTORY_KEY).unwrap().as_deref(), Some("[]"));
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn sqlite_store_round_trips_values() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("kv.sqlite");
    let path = path.to_str().unwrap();

    {
        let mut store = SqliteStore::open(path).unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        store.log("test", "k", "written");
    }

    let store = SqliteStore::open(path).unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    let rows = eaas::db::log::load_log(store.conn()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].operation, "test");
}

#[test]
fn in_memory_sqlite_store() {
    let mut store = SqliteStore::open(":memory:").unwrap();
    store.set(THEME_KEY, "light").unwrap();

    let state = AppState::load_with(&store, Theme::Dark);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn inaccessible_store_loads_defaults() {
    let store = BrokenStore::default();
    let state = AppState::load_with(&store, Theme::Light);

    assert!(state.history.is_empty());
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(*store.logged.borrow(), vec!["restore", "restore"]);
}

#[test]
fn failed_writes_are_reported_not_fatal() {
    let catalog = abc_catalog();
    let mut store = BrokenStore::default();
    let mut rng = ScriptedRandom::new(&[0]);
    let mut state = AppState::load_with(&store, Theme::Dark);

    let picked = state.generate(&catalog, None, &mut rng, 5).unwrap();

    assert!(!state.persist_history(&mut store));
    assert!(!state.persist_theme(&mut store));
    assert_eq!(state.current.as_ref(), Some(&picked));
    assert_eq!(
        store.logged.borrow().iter().filter(|op| *op == "persist_failed").count(),
        2
    );
}

#[test]
fn persist_succeeds_on_a_working_store() {
    let mut store = MemoryStore::new();
    let state = AppState::load_with(&store, Theme::Dark);

    assert!(state.persist_history(&mut store));
    assert!(state.persist_theme(&mut store));
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn corrupt_database_file_falls_back_to_memory() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.sqlite");
    std::fs::write(&path, "not a database at all ".repeat(200)).unwrap();

    let mut store = open_or_memory(path.to_str().unwrap());
    assert_eq!(store.get(HISTORY_KEY).unwrap(), None);

    store.set(HISTORY_KEY, "[]").unwrap();
    assert_eq!(store.get(HISTORY_KEY).unwrap().as_deref(), Some("[]"));
}
