//! Text templates for each banner style.
//!
//! Widths are measured in characters, not bytes, so multi-byte text lines up
//! the same way ASCII text does.

use chrono::NaiveDateTime;

use crate::error::BannerError;
use crate::style::Style;

/// Interior width of the fixed `ascii` and `simple` frames.
const FRAME_WIDTH: usize = 34;

/// Length of the `line` style separators.
const SEPARATOR_WIDTH: usize = 34;

/// Field the `ascii` style centers (and truncates) text into.
const ASCII_FIELD_WIDTH: usize = 28;

/// Field the `simple` style centers text into. Longer text is not truncated.
const SIMPLE_FIELD_WIDTH: usize = 20;

const ASCII_INDENT: &str = "    ";
const ASCII_TITLE_ROW: &str = "║        TeamBCP Shell             ║";

const SIMPLE_USER_ROW: &str = "║      User: @{USER_NAME}          ║";
const SIMPLE_TIME_ROW: &str = "║      Time: {TIME}                ║";

/// Timestamp format embedded in `ascii` banners.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `text` with the given style.
///
/// `now` is only used by styles that embed the generation time.
///
/// # Errors
///
/// Returns [`BannerError::EmptyText`] when a box banner is requested for
/// empty text.
pub fn render(style: Style, text: &str, now: NaiveDateTime) -> Result<String, BannerError> {
    match style {
        Style::Box => render_box(text),
        Style::Line => Ok(render_line(text)),
        Style::Ascii => Ok(render_ascii(text, now)),
        Style::Simple => Ok(render_simple(text)),
    }
}

/// Frame every line of `text` in a box as wide as the longest line.
fn render_box(text: &str) -> Result<String, BannerError> {
    if text.is_empty() {
        return Err(BannerError::EmptyText);
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or_default();
    let rule = "═".repeat(width + 2);

    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(format!("╔{rule}╗"));
    for line in lines {
        rows.push(format!("║ {line:<width$} ║"));
    }
    rows.push(format!("╚{rule}╝"));

    Ok(rows.join("\n"))
}

fn render_line(text: &str) -> String {
    let separator = "─".repeat(SEPARATOR_WIDTH);
    format!("{separator}\n{text}\n{separator}")
}

fn render_ascii(text: &str, now: NaiveDateTime) -> String {
    let text: String = text.chars().take(ASCII_FIELD_WIDTH).collect();
    let date = now.format(TIMESTAMP_FORMAT).to_string();

    let rows = [
        frame_border('╔', '╗'),
        ASCII_TITLE_ROW.to_string(),
        format!("║   {text:^width$}   ║", width = ASCII_FIELD_WIDTH),
        format!("║   {date:^width$}   ║", width = ASCII_FIELD_WIDTH),
        frame_border('╚', '╝'),
    ];

    let mut out = String::from("\n");
    for row in &rows {
        out.push_str(ASCII_INDENT);
        out.push_str(row);
        out.push('\n');
    }
    out.push_str(ASCII_INDENT);
    out
}

/// The user and time placeholders are left for the shell prompt to fill in.
fn render_simple(text: &str) -> String {
    let rows = [
        frame_border('╔', '╗'),
        format!("║       {text:^width$}       ║", width = SIMPLE_FIELD_WIDTH),
        SIMPLE_USER_ROW.to_string(),
        SIMPLE_TIME_ROW.to_string(),
        frame_border('╚', '╝'),
    ];
    format!("\n{}\n", rows.join("\n"))
}

fn frame_border(left: char, right: char) -> String {
    format!("{left}{}{right}", "═".repeat(FRAME_WIDTH))
}
