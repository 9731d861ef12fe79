//! Core game engine (no_std compatible)
//!
//! This module contains the pure game rules: coordinates, vessels, boards,
//! random fleet placement and the match controller. It needs only `alloc`,
//! so it builds without the `std` feature.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod events;
pub mod game;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use bitboard::BitBoard;
pub use board::{Board, CellState, StandardBoard};
pub use common::{BoardError, InputError, PlacementError, ShotOutcome};
pub use config::*;
pub use coord::Coordinate;
pub use events::{Event, Narrator, Silent};
pub use game::{GameEngine, MatchSummary, Side, StandardGame, TurnState};
pub use placement::{random_board, try_random_board};
pub use ship::{Orientation, Vessel};
