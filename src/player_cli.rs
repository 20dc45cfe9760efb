use std::io::{self, BufRead, Write};

use crate::{common::GameError, coordinate::Coordinate, player::TargetSelector};

/// Interactive player reading `X Y` targets from a line-based input.
pub struct HumanSelector<R, W> {
    input: R,
    output: W,
}

impl HumanSelector<io::StdinLock<'static>, io::Stdout> {
    /// Selector bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the selector, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a one-based `"X Y"` line into a zero-based coordinate.
pub fn parse_target(input: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Please enter two numbers separated by space".to_string());
    }
    let mut values = [0i64; 2];
    for (value, part) in values.iter_mut().zip(&parts) {
        if !part.chars().all(|c| c.is_ascii_digit()) {
            return Err("Cannot parse input".to_string());
        }
        *value = part.parse().map_err(|_| "Cannot parse input".to_string())?;
    }
    Coordinate::try_new(values[0] - 1, values[1] - 1).map_err(|_| "Invalid coordinates".to_string())
}

impl<R: BufRead, W: Write> TargetSelector for HumanSelector<R, W> {
    fn select_target(&mut self, _grid_size: usize) -> Result<Coordinate, GameError> {
        loop {
            write!(self.output, "Enter X Y: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
    }

    fn handle_rejected_target(
        &mut self,
        _target: Coordinate,
        reason: &GameError,
    ) -> Result<(), GameError> {
        let msg = match reason {
            GameError::OutOfBounds => "Target outside board".to_string(),
            GameError::AlreadyTargeted => "Target already used".to_string(),
            other => other.to_string(),
        };
        writeln!(self.output, "{}", msg)?;
        Ok(())
    }
}
