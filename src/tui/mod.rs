//! Interactive prompt mode.

mod input;
mod session;
mod text;

use std::io;
use std::process::ExitCode;

use crate::cli::prompts;
use crate::rng;
use crate::terminal::{is_terminal, reset_terminal};

pub use session::Session;

/// Run the interactive session on stdin/stdout.
pub fn run() -> ExitCode {
    if let Err(e) = rng::probe() {
        prompts::error(&format!("Error: secure random source unavailable: {e}"));
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Session::new(stdin.lock(), stdout.lock(), is_terminal()).run();
    reset_terminal();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
