//! Operator input: prompt, read one line, validate, reprompt until valid.
//!
//! The engine only ever sees values that already satisfy the documented
//! postconditions. The one failure it observes is the input stream ending.

use std::io::{BufRead, Write};

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("operator input closed")]
    Closed,
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
}

pub trait OperatorInput {
    /// Returns a finite value `>= 0`, or `> 0` when `allow_zero` is false.
    fn read_non_negative(&mut self, prompt: &str, allow_zero: bool) -> Result<f64, InputError>;

    /// Returns any integer; zero and negative values are passed through.
    fn read_integer(&mut self, prompt: &str) -> Result<i64, InputError>;

    /// Returns one of `options` (upper-case), matched case-insensitively.
    fn read_choice(&mut self, prompt: &str, options: &[char]) -> Result<char, InputError>;
}

pub struct ConsoleInput<R, W> {
    reader: R,
    prompts: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompts: W) -> Self {
        Self { reader, prompts }
    }

    fn next_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.prompts, "{}", prompt)?;
        self.prompts.flush()?;
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("operator input reached end of stream");
            return Err(InputError::Closed);
        }
        // Undecodable bytes become U+FFFD and fail validation like any other typo.
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    fn complain(&mut self, msg: &str) -> Result<(), InputError> {
        writeln!(self.prompts, "{}", msg)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> OperatorInput for ConsoleInput<R, W> {
    fn read_non_negative(&mut self, prompt: &str, allow_zero: bool) -> Result<f64, InputError> {
        loop {
            let raw = self.next_line(prompt)?;
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() && (v > 0.0 || (allow_zero && v == 0.0)) => return Ok(v),
                _ => {
                    tracing::debug!(input = %raw, "rejected numeric input");
                    if allow_zero {
                        self.complain("Invalid input. Please enter a non-negative number.")?;
                    } else {
                        self.complain("Invalid input. Please enter a positive number.")?;
                    }
                }
            }
        }
    }

    fn read_integer(&mut self, prompt: &str) -> Result<i64, InputError> {
        loop {
            let raw = self.next_line(prompt)?;
            match raw.parse::<i64>() {
                Ok(v) => return Ok(v),
                Err(_) => {
                    tracing::debug!(input = %raw, "rejected integer input");
                    self.complain("Invalid input. Please enter a whole number.")?;
                }
            }
        }
    }

    fn read_choice(&mut self, prompt: &str, options: &[char]) -> Result<char, InputError> {
        loop {
            let raw = self.next_line(prompt)?;
            let mut chars = raw.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                let c = c.to_ascii_uppercase();
                if options.contains(&c) {
                    return Ok(c);
                }
            }
            let listed: Vec<String> = options.iter().map(|c| c.to_string()).collect();
            self.complain(&format!(
                "Invalid choice. Please enter {}.",
                listed.join(" or ")
            ))?;
        }
    }
}
