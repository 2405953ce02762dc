//! Password generation and output.

pub mod charset;
mod error;
mod generate;
pub mod output;
mod password;

pub use charset::{CharacterClass, ClassSet};
pub use error::GenerateError;
pub use generate::{generate, validate};
pub use password::Password;
