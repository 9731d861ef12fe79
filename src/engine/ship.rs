//! Vessels: straight runs of cells with hit points.

use core::fmt;

use super::common::BoardError;
use super::coord::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend along the row, column growing.
    Horizontal,
    /// Cells extend down the column, row growing.
    Vertical,
}

impl Orientation {
    /// Offset from one cell of a vessel to the next.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A vessel anchored at `origin`, covering `length` cells along `orientation`.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Vessel {
    /// Create an undamaged vessel. Fails with `InvalidPlacement` for a
    /// zero-length vessel or one too long to lay out on any grid; bounds are
    /// only checked once it is added to a board.
    pub fn new(
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if length == 0 || i32::try_from(length).is_err() {
            return Err(BoardError::InvalidPlacement);
        }
        Ok(Vessel {
            origin,
            length,
            orientation,
            lives: length,
        })
    }

    /// Occupied cells in order, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let origin = self.origin;
        let (dr, dc) = self.orientation.step();
        // `new` keeps the length within i32
        let len = i32::try_from(self.length).unwrap_or(0);
        (0..len).map(move |i| origin.offset(dr * i, dc * i))
    }

    /// Whether the vessel occupies `at`.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells().any(|cell| cell == at)
    }

    /// Takes one point of damage. Returns `true` if this destroyed the vessel.
    pub(crate) fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    /// Remaining hit points.
    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn is_destroyed(&self) -> bool {
        self.lives == 0
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ origin: {}, length: {}, orientation: {:?}, lives: {} }}",
            self.origin, self.length, self.orientation, self.lives,
        )
    }
}
