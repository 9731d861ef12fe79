use rand::rngs::SmallRng;
use rand::Rng;

use super::Combatant;
use crate::engine::{Coordinate, Narrator, BOARD_SIZE};

/// Opponent that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeated targets are refused by the
/// board and redrawn by the turn loop.
#[derive(Debug, Clone, Copy)]
pub struct AutomatedCombatant {
    size: usize,
}

impl AutomatedCombatant {
    /// Opponent for a board with side `size` (at least 1).
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }
}

impl Default for AutomatedCombatant {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

impl Combatant for AutomatedCombatant {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _narrator: &mut dyn Narrator,
    ) -> anyhow::Result<Coordinate> {
        let size = self.size as i32;
        Ok(Coordinate::new(
            rng.random_range(0..size),
            rng.random_range(0..size),
        ))
    }
}
