//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, take_turn, AutomatedCombatant, Board, Combatant, Coordinate, Event, GameEngine,
    Narrator, Orientation, Side, StandardBoard, StandardGame, TurnState, Vessel,
};

#[cfg(feature = "std")]
pub use crate::cli::{BoardView, StdinInput, TerminalNarrator};
#[cfg(feature = "std")]
pub use crate::{init_logging, HumanCombatant, InputSource};
