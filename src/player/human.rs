#![cfg(feature = "std")]

use std::io;

use rand::rngs::SmallRng;

use super::Combatant;
use crate::engine::{Coordinate, Event, InputError, Narrator};

const PROMPT: &str = "Captain, where do we fire? (row column): ";

/// Source of raw text lines typed by a person.
pub trait InputSource {
    /// Show `prompt` and read one line. `Ok(None)` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Parse "row column", both 1-based, into a zero-based coordinate.
///
/// Tokens must be plain digit runs. Range is not checked here: "0 0" parses to
/// (-1, -1) and is refused by the board.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    let row = parse_index(row)?;
    let col = parse_index(col)?;
    Ok(Coordinate::new(row - 1, col - 1))
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    token.parse().map_err(|_| InputError::NotANumber)
}

/// Combatant driven by a person through an [`InputSource`].
pub struct HumanCombatant<I> {
    input: I,
}

impl<I: InputSource> HumanCombatant<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: InputSource> Combatant for HumanCombatant<I> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        narrator: &mut dyn Narrator,
    ) -> anyhow::Result<Coordinate> {
        loop {
            let Some(line) = self.input.read_line(PROMPT)? else {
                anyhow::bail!("input closed before a target was chosen");
            };
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => narrator.announce(&Event::InvalidInput(e)),
            }
        }
    }
}
