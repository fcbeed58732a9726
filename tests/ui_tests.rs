mod common;

use common::record;
use eaas::core::{HistoryLog, record_selection};
use eaas::db::store::MemoryStore;
use eaas::errors::{AppError, AppResult};
use eaas::models::{Category, Theme};
use eaas::ui::clipboard::{ClipboardSink, copy_text};
use eaas::ui::messages::status_line;
use eaas::ui::render::{render_card, render_history};
use eaas::utils::strip_ansi;

#[derive(Default)]
struct FakeClipboard {
    fail: bool,
    written: Vec<String>,
}

impl ClipboardSink for FakeClipboard {
    fn write_text(&mut self, text: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Clipboard("no display".into()));
        }
        self.written.push(text.to_string());
        Ok(())
    }
}

#[test]
fn copy_success_writes_text_and_logs() {
    let store = MemoryStore::new();
    let mut sink = FakeClipboard::default();

    assert!(copy_text(&mut sink, "hello", &store));
    assert_eq!(sink.written, vec!["hello"]);
    assert_eq!(store.logged()[0].0, "copy");
}

#[test]
fn copy_failure_is_swallowed_and_logged() {
    let store = MemoryStore::new();
    let mut sink = FakeClipboard {
        fail: true,
        ..Default::default()
    };

    assert!(!copy_text(&mut sink, "hello", &store));
    let logged = store.logged();
    assert_eq!(logged[0].0, "copy_failed");
    assert!(logged[0].2.contains("no display"));
}

#[test]
fn card_shows_icon_quoted_text_and_category() {
    let r = record("p", Category::Pet);
    for theme in [Theme::Light, Theme::Dark] {
        let card = strip_ansi(&render_card(&r, theme));

        assert!(card.contains("🙃"));
        assert!(card.contains("\"excuse p\""));
        assert!(card.contains("CATEGORY: PET"));
        assert!(card.starts_with('╭'));
    }
}

#[test]
fn long_excuses_wrap_inside_the_card() {
    let mut r = record("long", Category::Absurd);
    r.text = "word ".repeat(40).trim_end().to_string();

    let card = strip_ansi(&render_card(&r, Theme::Dark));
    let body_lines = card.lines().filter(|l| l.contains("word")).count();
    assert!(body_lines > 1);
}

#[test]
fn empty_history_shows_clean_record() {
    let out = strip_ansi(&render_history(&HistoryLog::new(), Theme::Dark));

    assert!(out.contains("Recent Alibis (0)"));
    assert!(out.contains("No excuses generated yet."));
    assert!(out.contains("Your record is clean... for now."));
}

#[test]
fn history_lists_entries_newest_first_with_category_label() {
    let log = record_selection(&HistoryLog::new(), &record("a", Category::Tech), 0);
    let log = record_selection(&log, &record("b", Category::Health), 60_000);

    let out = strip_ansi(&render_history(&log, Theme::Light));

    assert!(out.contains("Recent Alibis (2)"));
    let pos_b = out.find("excuse b").unwrap();
    let pos_a = out.find("excuse a").unwrap();
    assert!(pos_b < pos_a);
    assert!(out.contains("Health • "));
    assert!(out.contains("Tech • "));
}

#[test]
fn theme_from_terminal_background() {
    assert_eq!(Theme::from_colorfgbg(None), Theme::Dark);
    assert_eq!(Theme::from_colorfgbg(Some("15;0")), Theme::Dark);
    assert_eq!(Theme::from_colorfgbg(Some("0;15")), Theme::Light);
    assert_eq!(Theme::from_colorfgbg(Some("0;default;7")), Theme::Light);
    assert_eq!(Theme::from_colorfgbg(Some("garbage")), Theme::Dark);
}

#[test]
fn theme_parse_and_toggle() {
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert!(matches!("Dark".parse::<Theme>(), Err(AppError::InvalidTheme(_))));
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn status_lines_colour_only_the_icon() {
    let line = status_line(ansi_term::Colour::Green, "✅", "History cleared.");

    assert_ne!(line, strip_ansi(&line));
    assert_eq!(strip_ansi(&line), "✅ History cleared.");
}
