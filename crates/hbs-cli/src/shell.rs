//! Line-oriented prompting over any reader/writer pair.
//!
//! [`Shell`] knows nothing about bookings. It writes prompts, reads answers,
//! and re-asks when a numeric answer does not parse. End of input is reported
//! as `None` so callers can end the session cleanly.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use tracing::debug;

use crate::cli::OutputFormat;

pub struct Shell<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
        }
    }

    /// How bookings should be rendered.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write one line.
    pub fn say(&mut self, line: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Write `label` and read one line of input, without its line ending.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Prompt until the answer parses as `T`.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    debug!(input = %line, "rejected non-numeric answer");
                    self.say(format!(
                        "{} {:?} is not a valid number. Please try again.",
                        "✗".red(),
                        line.trim()
                    ))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run<T>(input: &str, f: impl FnOnce(&mut Shell<Cursor<&[u8]>, &mut Vec<u8>>) -> T) -> (T, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut shell = Shell::new(Cursor::new(input.as_bytes()), &mut out, OutputFormat::Text);
        let result = f(&mut shell);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prompt_strips_line_endings() {
        let (answer, output) = run("Alice Smith\r\n", |s| s.prompt("Name: ").unwrap());
        assert_eq!(answer.as_deref(), Some("Alice Smith"));
        assert_eq!(output, "Name: ");
    }

    #[test]
    fn prompt_keeps_inner_whitespace() {
        let (answer, _) = run("  Deluxe Suite  \n", |s| s.prompt("Room: ").unwrap());
        assert_eq!(answer.as_deref(), Some("  Deluxe Suite  "));
    }

    #[test]
    fn prompt_accepts_final_line_without_newline() {
        let (answer, _) = run("last", |s| s.prompt("> ").unwrap());
        assert_eq!(answer.as_deref(), Some("last"));
    }

    #[test]
    fn prompt_reports_end_of_input() {
        let (answer, _) = run("", |s| s.prompt("> ").unwrap());
        assert_eq!(answer, None);
    }

    #[test]
    fn prompt_number_retries_until_valid() {
        let (answer, output) = run("abc\n\n 42 \n", |s| s.prompt_number::<i64>("ID: ").unwrap());
        assert_eq!(answer, Some(42));
        assert_eq!(output.matches("ID: ").count(), 3);
        assert!(output.contains("\"abc\" is not a valid number"));
    }

    #[test]
    fn prompt_number_parses_decimals() {
        let (answer, _) = run("99.95\n", |s| s.prompt_number::<f64>("Rate: ").unwrap());
        assert_eq!(answer, Some(99.95));
    }

    #[test]
    fn prompt_number_stops_at_end_of_input() {
        let (answer, _) = run("nope\n", |s| s.prompt_number::<usize>("N: ").unwrap());
        assert_eq!(answer, None);
    }

    #[test]
    fn say_appends_newline() {
        let (_, output) = run("", |s| s.say("hello").unwrap());
        assert_eq!(output, "hello\n");
    }
}
