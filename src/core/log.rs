use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 48;

/// Colour of an operation in the internal log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "subscribe" => Colour::Cyan,
        "start" => Colour::Green,
        "end" => Colour::Blue,
        "edit" => Colour::Yellow,
        "del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
    t.push_str("...");
    t
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);

        let date_w = entries.iter().map(|r| r.date.len()).max().unwrap_or(10);

        let op_w = entries
            .iter()
            .map(|r| r.operation.len() + r.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for row in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&row.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(row.date);

            // Plain text first, so padding ignores ANSI sequences
            let plain = if row.target.is_empty() {
                row.operation.clone()
            } else {
                truncate(&format!("{} ({})", row.operation, row.target), MAX_OP_WIDTH)
            };
            let padding = " ".repeat(op_w.saturating_sub(plain.chars().count()));

            let colored = match plain.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&row.operation).paint(op), rest)
                }
                None => color_for_operation(&row.operation)
                    .paint(plain.as_str())
                    .to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                colored,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
