//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow, on stderr. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, on stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** {count} password(s) COPIED TO CLIPBOARD ***");
    }
}

/// Ask whether to print to the terminal when the clipboard is unavailable.
/// Falls back silently in quiet or non-interactive mode.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }
    false
}

pub fn passwords_written(count: usize, path: &Path) {
    if !quiet::enabled() {
        println!("{count} password(s) \u{2192} {}", path.display());
    }
}
