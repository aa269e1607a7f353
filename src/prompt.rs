use anyhow::{bail, Context, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::detour::Stop;
use crate::geo::{Axis, Coordinate};

/// Reads whitespace separated numbers, prompting before each one.
/// Several values may be typed on a single line.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    pub fn ask_number(&mut self, question: &str) -> Result<f64> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;
        let token = match self.next_token()? {
            Some(token) => token,
            None => bail!("input ended before {}", question),
        };
        token
            .parse::<f64>()
            .with_context(|| format!("parsing {:?} as a number for: {}", token, question))
    }

    /// Prompts for the latitude then the longitude of `stop`.
    pub fn ask_point(&mut self, stop: Stop) -> Result<Coordinate> {
        let latitude = self.ask_number(&question(Axis::Latitude, stop))?;
        let longitude = self.ask_number(&question(Axis::Longitude, stop))?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

fn question(axis: Axis, stop: Stop) -> String {
    format!("Please enter {} of point{}:", axis, stop)
}
