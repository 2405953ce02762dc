use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::pass::ClassSet;
use crate::settings::{DEFAULT_LENGTH, MAX_LENGTH, Settings};

/// secpass - Generate passwords with guaranteed character-type coverage.
///
/// Every enabled character type appears at least once and all randomness comes
/// from the operating system CSPRNG. Run without arguments for interactive prompts.
#[derive(Parser, Debug)]
#[command(name = "secpass", version, long_about = None)]
pub struct CliFlags {
    /// Password length
    #[arg(
        short,
        long,
        env = "SECPASS_LENGTH",
        default_value_t = DEFAULT_LENGTH,
        value_parser = parse_length
    )]
    pub length: usize,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,

    /// Exclude lowercase letters (a-z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude uppercase letters (A-Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude special characters (ASCII punctuation)
    #[arg(long)]
    pub no_special: bool,

    /// Append passwords to a file instead of printing them
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Copy passwords to the clipboard
    #[arg(short = 'b', long = "board", conflicts_with = "output")]
    pub clipboard: bool,

    /// Prompt for length and character types
    #[arg(
        short,
        long,
        conflicts_with_all = [
            "length",
            "number",
            "no_lowercase",
            "no_uppercase",
            "no_digits",
            "no_special",
            "output",
            "clipboard",
        ]
    )]
    pub interactive: bool,

    /// Suppress warnings and notices
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if length > MAX_LENGTH {
        return Err(format!("must be at most {MAX_LENGTH}"));
    }
    Ok(length)
}

impl CliFlags {
    pub fn classes(&self) -> ClassSet {
        ClassSet {
            lowercase: !self.no_lowercase,
            uppercase: !self.no_uppercase,
            digits: !self.no_digits,
            special: !self.no_special,
        }
    }

    /// Overlay the flags on the default settings.
    pub fn settings(&self) -> Settings {
        Settings {
            pass_length: self.length,
            number_of_passwords: self.number as usize,
            classes: self.classes(),
            output_file_path: self.output.clone(),
            to_clipboard: self.clipboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("secpass").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        CliFlags::command().debug_assert();
    }

    #[test]
    fn defaults_enable_everything() {
        let flags = parse(&[]);
        let settings = flags.settings();
        assert_eq!(settings.number_of_passwords, 1);
        assert_eq!(settings.classes, ClassSet::all());
        assert!(settings.output_file_path.is_none());
        assert!(!settings.to_clipboard);
    }

    #[test]
    fn class_flags_disable_classes() {
        let flags = parse(&["-l", "8", "--no-uppercase", "--no-special"]);
        let settings = flags.settings();
        assert_eq!(settings.pass_length, 8);
        assert_eq!(
            settings.classes,
            ClassSet {
                lowercase: true,
                digits: true,
                ..ClassSet::none()
            }
        );
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(CliFlags::try_parse_from(["secpass", "-n", "0"]).is_err());
    }

    #[test]
    fn clipboard_conflicts_with_output() {
        assert!(CliFlags::try_parse_from(["secpass", "-b", "-o", "out.txt"]).is_err());
    }

    #[test]
    fn interactive_conflicts_with_generation_flags() {
        for flag in [
            &["-l", "3"][..],
            &["-n", "2"],
            &["--no-lowercase"],
            &["--no-uppercase"],
            &["--no-digits"],
            &["--no-special"],
            &["-o", "out.txt"],
            &["-b"],
        ] {
            let args = ["secpass", "-i"].iter().chain(flag);
            let err = CliFlags::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict, "{flag:?}");
        }
        assert!(parse(&["-i", "-q"]).interactive);
    }

    #[test]
    fn oversized_length_is_rejected() {
        let too_long = (MAX_LENGTH + 1).to_string();
        assert!(CliFlags::try_parse_from(["secpass", "-l", too_long.as_str()]).is_err());
        assert!(CliFlags::try_parse_from(["secpass", "-l", "ten"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }
}
