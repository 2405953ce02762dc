//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::ClipboardContext;
use log::debug;
use thiserror::Error;

use super::{CliFlags, prompts, quiet};
use crate::pass::output::{self, OutputError};
use crate::rng;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("Secure random source unavailable: {0}")]
    Entropy(rand::Error),

    /// User declined to continue; not a failure.
    #[error("Aborted.")]
    Cancelled,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self {
            settings: flags.settings(),
            clipboard: None,
            flags,
        }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        quiet::set(self.flags.quiet);
        rng::probe().map_err(CliError::Entropy)?;
        debug!(
            "entropy source: {}, length={}, count={}, classes={}",
            rng::source_name(),
            self.settings.pass_length,
            self.settings.number_of_passwords,
            self.settings.classes.describe()
        );
        self.handle_clipboard()?;
        self.generate_output()
    }

    fn handle_clipboard(&mut self) -> Result<(), CliError> {
        if !self.settings.to_clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                Ok(())
            }
            Err(e) => {
                debug!("clipboard context failed: {e}");
                if prompts::clipboard_fallback_prompt() {
                    prompts::warn("Warning: clipboard unavailable, printing to terminal instead");
                    self.settings.to_clipboard = false;
                    Ok(())
                } else {
                    Err(CliError::Cancelled)
                }
            }
        }
    }

    /// Generate passwords and route them to the selected sink.
    pub fn generate_output(&mut self) -> Result<(), CliError> {
        let count = self.settings.number_of_passwords;

        if let (true, Some(ctx)) = (self.settings.to_clipboard, self.clipboard.as_mut()) {
            output::to_clipboard(ctx, &self.settings)?;
            prompts::clipboard_copied(count);
        } else if let Some(path) = self.settings.output_file_path.clone() {
            let full_path = output::to_file(&self.settings, &path)?;
            prompts::passwords_written(count, &full_path);
        } else {
            output::to_terminal(&self.settings)?;
        }
        Ok(())
    }
}
