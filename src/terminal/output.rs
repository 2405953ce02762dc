//! Terminal output utilities.
//!
//! Box drawing, the progress bar, cursor control and terminal reset.

use std::io::{self, Write};

use crossterm::tty::IsTty;
use crossterm::{cursor, queue, terminal::disable_raw_mode};

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const BOLD: &str = "\x1b[1m";

pub const BOX_WIDTH: usize = 74;

// ============================================================================
// Terminal Control
// ============================================================================

pub fn is_terminal() -> bool {
    io::stdout().is_tty()
}

/// Leave raw mode, restore the cursor and clear styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    if is_terminal() {
        let mut out = io::stdout();
        let _ = queue!(out, cursor::Show);
        let _ = write!(out, "{RESET}");
        let _ = out.flush();
    }
}

pub fn hide_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, cursor::Hide)
}

pub fn show_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, cursor::Show)
}

pub fn move_up<W: Write>(out: &mut W, lines: u16) -> io::Result<()> {
    queue!(out, cursor::MoveUp(lines))
}

// ============================================================================
// Box Drawing
// ============================================================================

/// ┌─ Title ───────────────────────────┐
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        return writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {} ", title);
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
}

/// │ content                           │
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    writeln!(out, "│ {}{} │", content, " ".repeat(padding))
}

/// │          content          │
pub fn box_line_center<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    writeln!(
        out,
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Progress Bar
// ============================================================================

/// Render a progress bar inside a box with centered text (3 lines).
pub fn progress_bar_box<W: Write>(out: &mut W, percent: f32, stats: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 2;
    let filled = if percent >= 100.0 {
        inner_width
    } else {
        ((percent.max(0.0) / 100.0) * inner_width as f32) as usize
    };

    let text: Vec<char> = stats.chars().collect();
    let padding = inner_width.saturating_sub(text.len()) / 2;
    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }
    let done: String = content[..filled].iter().collect();
    let rest: String = content[filled..].iter().collect();
    let open = inner_width - filled;

    // Top border
    if filled > 0 {
        write!(out, "\r▗{}", "▄".repeat(filled))?;
    } else {
        write!(out, "\r┌")?;
    }
    if open > 0 {
        write!(out, "{}┐\r\n", "─".repeat(open))?;
    } else {
        write!(out, "▖\r\n")?;
    }

    // Middle
    if filled > 0 {
        write!(out, "\r▐\x1b[7m{done}{RESET}")?;
    } else {
        write!(out, "\r│")?;
    }
    if open > 0 {
        write!(out, "{rest}│\r\n")?;
    } else {
        write!(out, "▌\r\n")?;
    }

    // Bottom border
    if filled > 0 {
        write!(out, "\r▝{}", "▀".repeat(filled))?;
    } else {
        write!(out, "\r└")?;
    }
    if open > 0 {
        write!(out, "{}┘\r\n", "─".repeat(open))?;
    } else {
        write!(out, "▘\r\n")?;
    }

    out.flush()
}
