//! Interactive console session.
//!
//! Asks for the number of urinals and the occupied positions, re-prompting
//! until both are valid, then prints the layout before and after the
//! recommendation.

mod report;

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use tracing::debug;

use crate::render::Appearance;
use crate::selection::{parse_capacity, parse_occupied, Capacity, Layout, OccupiedSet, SelectionError};

pub use report::report;

const CAPACITY_PROMPT: &str = "Enter the total number of urinals (1-20)";
const OCCUPIED_PROMPT: &str = "Enter occupied positions (comma-separated, e.g., 1,3,5)";

/// How a console session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Both answers were valid and a recommendation was printed
    Completed(Layout),
    /// Input ended before the session finished
    Terminated,
}

/// A prompt session over any line reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
    appearance: Appearance,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, appearance: Appearance) -> Self {
        Self {
            input,
            output,
            appearance,
        }
    }

    /// Run the full session
    pub fn run(&mut self) -> io::Result<Outcome> {
        writeln!(
            self.output,
            "{}\n",
            self.appearance
                .paint("Welcome to the Optimal Urinal Position Finder!", |s| s.bold().blue())
        )?;

        let Some(capacity) = self.ask_capacity()? else {
            return self.terminated();
        };
        let Some(occupied) = self.ask_occupied(capacity)? else {
            return self.terminated();
        };

        let layout = Layout::resolve(capacity, occupied)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        report(&mut self.output, &layout, self.appearance)?;

        Ok(Outcome::Completed(layout))
    }

    fn ask_capacity(&mut self) -> io::Result<Option<Capacity>> {
        loop {
            let Some(line) = self.ask(CAPACITY_PROMPT)? else {
                return Ok(None);
            };

            match parse_capacity(&line) {
                Ok(capacity) => return Ok(Some(capacity)),
                Err(e) => {
                    debug!(error = %e, "rejected capacity");
                    let message = match e {
                        SelectionError::MalformedInput(_) => "Please enter a valid number",
                        _ => "Please enter a number between 1 and 20",
                    };
                    self.complain(message)?;
                }
            }
        }
    }

    fn ask_occupied(&mut self, capacity: Capacity) -> io::Result<Option<OccupiedSet>> {
        loop {
            let Some(line) = self.ask(OCCUPIED_PROMPT)? else {
                return Ok(None);
            };

            match parse_occupied(&line, capacity) {
                Ok(occupied) => return Ok(Some(occupied)),
                Err(e) => {
                    debug!(error = %e, "rejected occupied positions");
                    let message = match e {
                        SelectionError::FullyOccupied => "All urinals are occupied!",
                        _ => "Invalid input format. Please use comma-separated numbers.",
                    };
                    self.complain(message)?;
                }
            }
        }
    }

    /// Print a prompt and read one line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", self.appearance.paint(prompt, |s| s.bold()))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn complain(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", self.appearance.paint(message, |s| s.red()))
    }

    fn terminated(&mut self) -> io::Result<Outcome> {
        writeln!(
            self.output,
            "\n{}",
            self.appearance.paint("Program terminated by user", |s| s.yellow())
        )?;
        Ok(Outcome::Terminated)
    }
}
