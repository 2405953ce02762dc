//! Password generation settings.

use std::path::PathBuf;

use crate::pass::ClassSet;

pub const DEFAULT_LENGTH: usize = 16;
/// Upper bound accepted from user input.
pub const MAX_LENGTH: usize = 1 << 20;

#[derive(Debug, Clone)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub classes: ClassSet,
    pub output_file_path: Option<PathBuf>,
    pub to_clipboard: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: 1,
            classes: ClassSet::all(),
            output_file_path: None,
            to_clipboard: false,
        }
    }
}
