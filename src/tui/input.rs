//! Line-based prompts with validation and retry.
//!
//! Each prompt returns `Ok(None)` at end of input so callers can end the
//! session cleanly.

use std::io::{self, BufRead, Write};

use crate::settings::MAX_LENGTH;

/// Print `prompt`, read one line. `None` on end of input.
/// A line that is not valid UTF-8 comes back empty, which every prompt rejects.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    let answer = std::str::from_utf8(&line).map(str::trim).unwrap_or_default();
    Ok(Some(answer.to_string()))
}

/// Ask for a positive integer, re-prompting until one is given.
pub fn ask_length<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<usize>> {
    loop {
        let Some(answer) = read_answer(input, out, &format!("{prompt}: "))? else {
            return Ok(None);
        };

        if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
            writeln!(out, "Please enter a positive integer.")?;
            continue;
        }
        match answer.parse::<usize>() {
            Ok(0) => writeln!(out, "Length must be greater than zero.")?,
            Ok(length) if length <= MAX_LENGTH => return Ok(Some(length)),
            _ => writeln!(out, "That number is too large (at most {MAX_LENGTH}).")?,
        }
    }
}

/// Ask a yes/no question, re-prompting until y/yes/n/no (any case) is given.
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<bool>> {
    loop {
        let Some(answer) = read_answer(input, out, &format!("{prompt} (y/n): "))? else {
            return Ok(None);
        };

        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => writeln!(out, "Please enter 'y' or 'n'.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run<T>(
        answers: &str,
        f: impl FnOnce(&mut Cursor<&[u8]>, &mut Vec<u8>) -> io::Result<T>,
    ) -> (T, String) {
        let mut input = Cursor::new(answers.as_bytes());
        let mut out = Vec::new();
        let value = f(&mut input, &mut out).unwrap();
        (value, String::from_utf8(out).unwrap())
    }

    #[test]
    fn length_retries_until_positive_integer() {
        let (length, out) = run("abc\n-3\n0\n  12  \n", |i, o| ask_length(i, o, "Length"));
        assert_eq!(length, Some(12));
        assert_eq!(out.matches("Please enter a positive integer.").count(), 2);
        assert_eq!(out.matches("Length must be greater than zero.").count(), 1);
        assert_eq!(out.matches("Length: ").count(), 4);
    }

    #[test]
    fn length_rejects_overflow() {
        let (length, out) = run("99999999999999999999999999\n2000000\n5\n", |i, o| {
            ask_length(i, o, "Length")
        });
        assert_eq!(length, Some(5));
        assert_eq!(out.matches("too large").count(), 2);
    }

    #[test]
    fn invalid_utf8_is_asked_again() {
        let mut input = Cursor::new(&b"\xff\xfe\n7\n\xc3\nyes\n"[..]);
        let mut out = Vec::new();
        assert_eq!(ask_length(&mut input, &mut out, "Length").unwrap(), Some(7));
        assert_eq!(ask_yes_no(&mut input, &mut out, "Digits?").unwrap(), Some(true));

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Please enter a positive integer.").count(), 1);
        assert_eq!(out.matches("Please enter 'y' or 'n'.").count(), 1);
    }

    #[test]
    fn length_end_of_input() {
        let (length, _) = run("", |i, o| ask_length(i, o, "Length"));
        assert_eq!(length, None);
    }

    #[test]
    fn yes_no_accepts_words_and_case() {
        for (answer, expected) in [("y\n", true), ("YES\n", true), ("No\n", false), ("n\n", false)] {
            let (value, _) = run(answer, |i, o| ask_yes_no(i, o, "Digits?"));
            assert_eq!(value, Some(expected), "answer {answer:?}");
        }
    }

    #[test]
    fn yes_no_retries_on_anything_else() {
        let (value, out) = run("maybe\n\nyep\nn\n", |i, o| ask_yes_no(i, o, "Digits?"));
        assert_eq!(value, Some(false));
        assert_eq!(out.matches("Please enter 'y' or 'n'.").count(), 3);
        assert!(out.starts_with("Digits? (y/n): "));
    }
}
