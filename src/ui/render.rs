//! Terminal rendering of the excuse card and the history listing.

use crate::core::history::HistoryLog;
use crate::models::{ExcuseRecord, Theme};
use crate::utils::time::format_clock;
use ansi_term::{Colour, Style};
use unicode_width::UnicodeWidthStr;

const CARD_WIDTH: usize = 64;
const HISTORY_WRAP: usize = 72;

/// Styles used for one theme.
pub struct Palette {
    pub accent: Style,
    pub text: Style,
    pub muted: Style,
    pub danger: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: Colour::RGB(96, 165, 250).bold(),
                text: Colour::White.bold(),
                muted: Colour::RGB(156, 163, 175).normal(),
                danger: Colour::RGB(248, 113, 113).normal(),
            },
            Theme::Light => Self {
                accent: Colour::RGB(59, 130, 246).bold(),
                text: Colour::Black.bold(),
                muted: Colour::RGB(107, 114, 128).normal(),
                danger: Colour::RGB(239, 68, 68).normal(),
            },
        }
    }
}

/// Left and right padding that centers `s` in `width` display columns.
fn centered(s: &str, width: usize) -> (usize, usize) {
    let free = width.saturating_sub(UnicodeWidthStr::width(s));
    (free / 2, free - free / 2)
}

pub fn render_card(excuse: &ExcuseRecord, theme: Theme) -> String {
    let p = Palette::for_theme(theme);
    let inner = CARD_WIDTH - 4;

    let mut lines: Vec<(String, Style)> = vec![
        (String::new(), p.text),
        (excuse.icon.clone(), Style::new()),
        (String::new(), p.text),
    ];

    let quoted = format!("\"{}\"", excuse.text);
    for l in textwrap::wrap(&quoted, inner) {
        lines.push((l.into_owned(), p.text));
    }

    lines.push((String::new(), p.text));
    lines.push((
        format!("CATEGORY: {}", excuse.category.as_str().to_uppercase()),
        p.muted,
    ));
    lines.push((String::new(), p.text));

    let border = "─".repeat(CARD_WIDTH - 2);
    let mut out = String::new();
    out.push_str(&p.accent.paint(format!("╭{border}╮")).to_string());
    out.push('\n');

    for (content, style) in &lines {
        let (left, right) = centered(content, inner);
        out.push_str(&format!(
            "{} {}{}{} {}\n",
            p.accent.paint("│"),
            " ".repeat(left),
            style.paint(content.as_str()),
            " ".repeat(right),
            p.accent.paint("│"),
        ));
    }

    out.push_str(&p.accent.paint(format!("╰{border}╯")).to_string());
    out.push('\n');
    out
}

pub fn render_history(history: &HistoryLog, theme: Theme) -> String {
    let p = Palette::for_theme(theme);
    let mut out = format!(
        "🕒 {}\n\n",
        p.accent.paint(format!("Recent Alibis ({})", history.len()))
    );

    if history.is_empty() {
        out.push_str(&format!("  {}\n", p.text.paint("No excuses generated yet.")));
        out.push_str(&format!(
            "  {}\n",
            p.muted.paint("Your record is clean... for now.")
        ));
        return out;
    }

    for (i, entry) in history.entries().iter().enumerate() {
        let prefix = format!("{:>2}. {} ", i + 1, entry.record.icon);
        let indent = " ".repeat(UnicodeWidthStr::width(prefix.as_str()));
        let options = textwrap::Options::new(HISTORY_WRAP)
            .initial_indent(&prefix)
            .subsequent_indent(&indent);

        for line in textwrap::wrap(&entry.record.text, options) {
            out.push_str(&line);
            out.push('\n');
        }

        out.push_str(&format!(
            "{}{}\n",
            indent,
            p.muted.paint(format!(
                "{} • {}",
                entry.record.category.label(),
                format_clock(entry.shown_at)
            ))
        ));
    }

    out.push_str(&format!(
        "\n{}\n",
        p.danger.paint("Run `eaas history --clear` to wipe the record.")
    ));
    out
}
