//! Non-interactive command-line mode.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::io;
use std::process::ExitCode;

use log::debug;

use crate::pass::output::OutputError;

pub use context::{CliError, Context};
pub use flags::CliFlags;

/// Run CLI mode with already-parsed flags.
pub fn run(flags: CliFlags) -> ExitCode {
    let mut ctx = Context::new(flags);
    match ctx.run() {
        Ok(()) | Err(CliError::Cancelled) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => {
            debug!("stdout closed early: {e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("cli run failed: {e:?}");
            prompts::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}

/// The reader went away (e.g. `secpass -n 1000 | head -1`).
fn is_broken_pipe(err: &CliError) -> bool {
    matches!(err, CliError::Output(OutputError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::GenerateError;

    #[test]
    fn only_broken_pipe_is_swallowed() {
        let pipe = CliError::Output(io::Error::from(io::ErrorKind::BrokenPipe).into());
        assert!(is_broken_pipe(&pipe));

        let denied = CliError::Output(io::Error::from(io::ErrorKind::PermissionDenied).into());
        assert!(!is_broken_pipe(&denied));
        assert!(!is_broken_pipe(&CliError::Output(GenerateError::InvalidRequest.into())));
        assert!(!is_broken_pipe(&CliError::Cancelled));
    }
}
