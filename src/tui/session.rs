//! Interactive session: collect a request, generate, offer another round.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use log::debug;

use super::input::{ask_length, ask_yes_no};
use super::text::{animate_progress, print_banner, print_goodbye, print_password};
use crate::pass::{CharacterClass, ClassSet, Password, generate};
use crate::terminal::{RED, RESET};

const STEP_DELAY: Duration = Duration::from_millis(300);

const CLASS_PROMPTS: [(CharacterClass, &str); 4] = [
    (CharacterClass::Lowercase, "Include lowercase letters?"),
    (CharacterClass::Uppercase, "Include uppercase letters?"),
    (CharacterClass::Digits, "Include digits?"),
    (CharacterClass::Special, "Include special characters (e.g. !@#$)?"),
];

pub struct Session<R, W> {
    input: R,
    out: W,
    /// Colors and the progress animation are only used on a real terminal.
    styled: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, styled: bool) -> Self {
        Self { input, out, styled }
    }

    /// Runs until the user declines another password or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        print_banner(&mut self.out, self.styled)?;

        loop {
            let Some(pass) = self.prompt_until_generated()? else {
                return Ok(());
            };

            if self.styled {
                animate_progress(&mut self.out, STEP_DELAY)?;
            }
            print_password(&mut self.out, pass.as_str(), self.styled)?;
            drop(pass);

            match ask_yes_no(&mut self.input, &mut self.out, "Generate another password?")? {
                Some(true) => writeln!(self.out)?,
                Some(false) => return print_goodbye(&mut self.out),
                None => return Ok(()),
            }
        }
    }

    /// Re-collects the request after every validation failure.
    fn prompt_until_generated(&mut self) -> io::Result<Option<Password>> {
        loop {
            let Some((length, classes)) = self.collect_request()? else {
                return Ok(None);
            };

            match generate(length, classes) {
                Ok(pass) => return Ok(Some(pass)),
                Err(e) => {
                    debug!("request rejected: {e:?}");
                    if self.styled {
                        writeln!(self.out, "{RED}Error: {e}{RESET}")?;
                    } else {
                        writeln!(self.out, "Error: {e}")?;
                    }
                    writeln!(self.out, "Let's try again!")?;
                    writeln!(self.out)?;
                }
            }
        }
    }

    fn collect_request(&mut self) -> io::Result<Option<(usize, ClassSet)>> {
        let Some(length) = ask_length(
            &mut self.input,
            &mut self.out,
            "Enter desired password length",
        )?
        else {
            return Ok(None);
        };

        let mut classes = ClassSet::none();
        for (class, prompt) in CLASS_PROMPTS {
            match ask_yes_no(&mut self.input, &mut self.out, prompt)? {
                Some(enabled) => classes.set(class, enabled),
                None => return Ok(None),
            }
        }
        Ok(Some((length, classes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(answers: &str) -> String {
        let mut out = Vec::new();
        Session::new(Cursor::new(answers.as_bytes()), &mut out, false)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn passwords(out: &str) -> Vec<String> {
        out.split("Generated password: ")
            .skip(1)
            .map(|rest| rest.lines().next().unwrap_or("").to_string())
            .collect()
    }

    #[test]
    fn single_round_then_goodbye() {
        let out = session("8\ny\nn\ny\nn\nn\n");
        let generated = passwords(&out);
        assert_eq!(generated.len(), 1);

        let pass = &generated[0];
        assert_eq!(pass.len(), 8);
        assert!(pass.bytes().any(|b| b.is_ascii_lowercase()));
        assert!(pass.bytes().any(|b| b.is_ascii_digit()));
        assert!(pass.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn invalid_answers_are_reprompted() {
        let out = session("abc\n0\n6\nmaybe\ny\nn\nn\nn\nn\n");
        assert!(out.contains("Please enter a positive integer."));
        assert!(out.contains("Length must be greater than zero."));
        assert!(out.contains("Please enter 'y' or 'n'."));
        assert_eq!(passwords(&out)[0].len(), 6);
    }

    #[test]
    fn too_short_request_starts_over() {
        let out = session("3\ny\ny\ny\ny\n10\nn\ny\nn\nn\nn\n");
        assert!(out.contains(
            "Error: Password length must be at least 4 to include each selected character type"
        ));
        assert!(out.contains("Let's try again!"));

        let generated = passwords(&out);
        assert_eq!(generated.len(), 1);
        assert!(generated[0].bytes().all(|b| b.is_ascii_uppercase()));
    }

    #[test]
    fn no_classes_reports_error_and_ends_at_eof() {
        let out = session("5\nn\nn\nn\nn\n");
        assert!(out.contains("Error: At least one character type must be selected."));
        assert!(passwords(&out).is_empty());
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn another_round_on_yes() {
        let out = session("4\ny\ny\ny\ny\nyes\n12\ny\ny\ny\ny\nno\n");
        let generated = passwords(&out);
        assert_eq!(generated.len(), 2);
        assert_eq!(generated[0].len(), 4);
        assert_eq!(generated[1].len(), 12);
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn unstyled_output_has_no_escape_codes() {
        let out = session("8\ny\ny\ny\ny\nn\n");
        assert!(!out.contains('\x1b'));
    }
}
