//! Notifications the engine emits while a match is played.

use alloc::vec::Vec;

use super::common::{BoardError, InputError, ShotOutcome};
use super::coord::Coordinate;
use super::game::Side;

/// Something worth telling the players about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A shot was accepted by the enemy board.
    Shot {
        shooter: Side,
        target: Coordinate,
        outcome: ShotOutcome,
    },
    /// The board refused a target; the shooter picks again.
    Rejected { shooter: Side, error: BoardError },
    /// Typed input could not be read as a target.
    InvalidInput(InputError),
    /// One side has destroyed the other's whole fleet.
    GameOver { winner: Side },
}

/// Receiver of [`Event`]s. How they are shown is up to the implementation.
pub trait Narrator {
    fn announce(&mut self, event: &Event);
}

/// Records every event, in order.
impl Narrator for Vec<Event> {
    fn announce(&mut self, event: &Event) {
        self.push(*event);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Narrator for Silent {
    fn announce(&mut self, _event: &Event) {}
}
