use std::io::{self, Write};
use std::thread::sleep;
use std::time::Duration;

use crate::terminal::{
    BOLD, RESET, box_bottom, box_line, box_line_center, box_top, hide_cursor, move_up,
    progress_bar_box, show_cursor,
};

const PROGRESS_STEPS: [f32; 4] = [20.0, 60.0, 80.0, 100.0];

pub fn print_banner<W: Write>(out: &mut W, styled: bool) -> io::Result<()> {
    let title = if styled {
        format!("{BOLD}Secure Password Generator{RESET}")
    } else {
        "Secure Password Generator".to_string()
    };

    box_top(out, "")?;
    box_line_center(out, &title)?;
    box_bottom(out)?;
    box_top(out, "Note")?;
    box_line(out, "A secure password should be as long and as diverse as possible.")?;
    box_line(out, "We recommend a length of at least 8 characters.")?;
    box_bottom(out)?;
    writeln!(out)
}

/// Step a progress bar through 20/60/80/100%, pausing `step` after each frame.
pub fn animate_progress<W: Write>(out: &mut W, step: Duration) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Generating password...")?;
    hide_cursor(out)?;

    for (i, pct) in PROGRESS_STEPS.iter().enumerate() {
        if i > 0 {
            move_up(out, 3)?;
        }
        progress_bar_box(out, *pct, &format!("{pct:.0}%"))?;
        sleep(step);
    }

    show_cursor(out)?;
    writeln!(out)?;
    out.flush()
}

pub fn print_password<W: Write>(out: &mut W, pass: &str, styled: bool) -> io::Result<()> {
    if styled {
        writeln!(out, "Generated password: {BOLD}{pass}{RESET}")?;
    } else {
        writeln!(out, "Generated password: {pass}")?;
    }
    writeln!(out)
}

pub fn print_goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Goodbye! Have a secure day!")
}
