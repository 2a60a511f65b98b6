use crate::ranker::RankedItem;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use time::macros::format_description;
use time::OffsetDateTime;

const NAME_WIDTH: usize = 20;
const NAME_KEEP: usize = 17;
const BORDER: &str = "--------------------------------------------------------------------------";
const HEADER: &str = "|     PRODUCT NAME     |  AMOUNT  |  INVESTMENT  |  MARGIN  |   PROFIT   |";

fn format_date(now: OffsetDateTime) -> String {
    let format = format_description!(
        "[weekday repr:short] [month repr:short] [day] [year] [hour]:[minute]:[second] GMT[offset_hour sign:mandatory][offset_minute]"
    );
    now.format(format).unwrap_or_else(|_| now.to_string())
}

fn format_name(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let kept: String = name.chars().take(NAME_KEEP).collect();
        format!("{kept}...")
    } else {
        format!("{name:<width$}", width = NAME_WIDTH)
    }
}

fn format_row(item: &RankedItem) -> String {
    format!(
        "| {} | {:<8} | {:<12} | {:<8} | {:<10} |",
        format_name(&item.name),
        item.amount,
        item.investment,
        item.margin,
        item.profit
    )
}

/// Formats the whole screen: key, date, and the product table.
pub fn render(items: &[RankedItem], api_key_display: &str, now: OffsetDateTime) -> String {
    let mut lines = vec![
        format!("USING API KEY: {api_key_display}"),
        format!("DATE: {}", format_date(now)),
        BORDER.to_string(),
        HEADER.to_string(),
        BORDER.to_string(),
    ];
    lines.extend(items.iter().map(format_row));
    lines.push(BORDER.to_string());

    let mut screen = lines.join("\n");
    screen.push('\n');
    screen
}

/// Terminal the table is redrawn on.
#[derive(Clone, Copy, Default)]
pub struct Console;

impl Console {
    /// Replaces everything on screen with `screen`.
    pub fn redraw(&self, screen: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        execute!(stdout, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?;
        stdout.write_all(screen.as_bytes())?;
        stdout.flush()
    }
}
