use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::utils::formatting::{pad_right, truncate};
use ansi_term::Colour;

/// ANSI colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "generate" => Colour::Green,
        "clear" => Colour::Red,
        "theme" => Colour::Yellow,
        "copy" => Colour::Blue,
        "copy_failed" | "restore" | "persist_failed" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = SqliteStore::open(&cfg.database)?;
        let entries = load_log(store.conn())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        let rows: Vec<(String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let color = color_for_operation(&e.operation);
                let op_target = if e.target.is_empty() {
                    color.paint(e.operation.as_str()).to_string()
                } else {
                    format!(
                        "{} ({})",
                        color.paint(e.operation.as_str()),
                        truncate(&e.target, 40)
                    )
                };
                (date, op_target)
            })
            .collect();

        let date_w = rows.iter().map(|(d, _)| d.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, o)| crate::utils::formatting::visible_width(o))
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (e, (date, op_target)) in entries.iter().zip(rows) {
            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                e.id,
                date,
                pad_right(&op_target, op_w),
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }
    }

    Ok(())
}
