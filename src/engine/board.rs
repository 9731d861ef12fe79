//! Game board state: vessel placement and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use super::bitboard::BitBoard;
use super::common::{BoardError, ShotOutcome};
use super::config::BOARD_SIZE;
use super::coord::Coordinate;
use super::ship::Vessel;

type Cells<const N: usize> = BitBoard<u128, N>;

/// Board with the default side length.
pub type StandardBoard = Board<BOARD_SIZE>;

/// What a cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    /// A missed shot, or water revealed around a destroyed vessel.
    Miss,
}

/// An `N×N` board holding one side's vessels.
///
/// Two cell sets are tracked separately: `reserved` is every vessel cell plus
/// its halo and only governs placement, `targeted` governs shooting and is
/// cleared once by [`Board::reset_targeting`] before play begins.
#[derive(Clone)]
pub struct Board<const N: usize> {
    vessels: Vec<Vessel>,
    ships: Cells<N>,
    hits: Cells<N>,
    misses: Cells<N>,
    reserved: Cells<N>,
    targeted: Cells<N>,
    destroyed: usize,
}

impl<const N: usize> Board<N> {
    const FITS: () = assert!(
        N > 0 && N * N <= Cells::<N>::CAPACITY,
        "board side too large for a u128 bitboard"
    );

    /// Create an empty board.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        Board {
            vessels: Vec::new(),
            ships: Cells::new(),
            hits: Cells::new(),
            misses: Cells::new(),
            reserved: Cells::new(),
            targeted: Cells::new(),
            destroyed: 0,
        }
    }

    /// Side length.
    pub const fn size(&self) -> usize {
        N
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels destroyed so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns `true` once every placed vessel is destroyed.
    pub fn all_destroyed(&self) -> bool {
        !self.vessels.is_empty() && self.destroyed == self.vessels.len()
    }

    /// Whether a shot at `at` would be rejected as already targeted.
    pub fn is_targeted(&self, at: Coordinate) -> bool {
        self.targeted.contains(at)
    }

    /// Visible state of a cell, `None` off the grid.
    pub fn cell(&self, at: Coordinate) -> Option<CellState> {
        if !Cells::<N>::in_bounds(at) {
            return None;
        }
        let state = if self.hits.contains(at) {
            CellState::Hit
        } else if self.misses.contains(at) {
            CellState::Miss
        } else if self.ships.contains(at) {
            CellState::Ship
        } else {
            CellState::Empty
        };
        Some(state)
    }

    /// Place a vessel. All cells are validated before anything changes.
    pub fn add_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        let mut body = Cells::<N>::new();
        for cell in vessel.cells() {
            if !Cells::<N>::in_bounds(cell) || self.reserved.contains(cell) {
                log::trace!("rejected {:?} at cell {}", vessel, cell);
                return Err(BoardError::InvalidPlacement);
            }
            body.insert(cell);
        }

        self.ships |= body;
        self.reserved |= body;
        self.targeted |= body;
        self.vessels.push(vessel);
        self.halo_mark(body, false);
        Ok(())
    }

    /// Marks the halo around `body` as targeted. Without `reveal` the halo is
    /// reserved against later placements; with it, it becomes visible water.
    fn halo_mark(&mut self, body: Cells<N>, reveal: bool) {
        let halo = body.dilate();
        let fresh = halo & !self.targeted;
        self.targeted |= fresh;
        if reveal {
            self.misses |= fresh;
        } else {
            self.reserved |= halo;
        }
    }

    /// Fire at `at`.
    pub fn shot(&mut self, at: Coordinate) -> Result<ShotOutcome, BoardError> {
        if !Cells::<N>::in_bounds(at) {
            return Err(BoardError::OutOfBounds(at));
        }
        if self.targeted.contains(at) {
            return Err(BoardError::AlreadyTargeted(at));
        }
        self.targeted.insert(at);

        let Some(vessel) = self.vessels.iter_mut().find(|v| v.contains(at)) else {
            self.misses.insert(at);
            return Ok(ShotOutcome::Miss);
        };
        self.hits.insert(at);
        if !vessel.take_hit() {
            return Ok(ShotOutcome::Hit);
        }

        let body = Cells::<N>::from_coords(vessel.cells());
        self.destroyed += 1;
        self.halo_mark(body, true);
        Ok(ShotOutcome::Destroyed)
    }

    /// Forget placement-time targeting so reserved halos can be shot at.
    pub fn reset_targeting(&mut self) {
        self.targeted.clear();
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  ships: {:?},\n  hits: {:?},\n  misses: {:?},\n  targeted: {:?},\n  destroyed: {},\n  vessels: {:?}\n}}",
            self.ships, self.hits, self.misses, self.targeted, self.destroyed, self.vessels
        )
    }
}
