//! Common types: shot outcomes and the errors of the game rules.

use core::fmt;

use super::coord::Coordinate;

/// Result of a shot that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No vessel at the target.
    Miss,
    /// A vessel was damaged but is still afloat.
    Hit,
    /// The last intact cell of a vessel was hit.
    Destroyed,
}

impl ShotOutcome {
    /// Whether the shooter fires again. Only a non-destroying hit does.
    pub fn grants_repeat(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Shot target outside the grid.
    OutOfBounds(Coordinate),
    /// Target already shot at, or reserved around a vessel.
    AlreadyTargeted(Coordinate),
    /// Vessel leaves the grid, overlaps or touches another vessel, or is empty.
    InvalidPlacement,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(at) => write!(f, "Target {} is outside the board", at),
            BoardError::AlreadyTargeted(at) => write!(f, "Target {} was already fired upon", at),
            BoardError::InvalidPlacement => {
                write!(f, "Vessel is out of bounds or too close to another vessel")
            }
        }
    }
}

impl core::error::Error for BoardError {}

/// Errors from the placement generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The attempt budget ran out before the whole fleet was placed.
    Exhausted { attempts: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Exhausted { attempts } => {
                write!(f, "Fleet did not fit after {} placement attempts", attempts)
            }
        }
    }
}

impl core::error::Error for PlacementError {}

/// Malformed target text typed by a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Input did not split into exactly two tokens; carries the token count.
    WrongTokenCount(usize),
    /// A token was not a non-negative integer.
    NotANumber,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(n) => {
                write!(f, "Expected a row and a column, got {} value(s)", n)
            }
            InputError::NotANumber => write!(f, "Row and column must be whole numbers"),
        }
    }
}

impl core::error::Error for InputError {}
