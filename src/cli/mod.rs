//! Terminal front-end
//!
//! This module provides the boundary collaborators the engine talks to:
//! - Board rendering
//! - Standard input as a target source
//! - A narrator printing events

#![cfg(feature = "std")]

pub mod input;
pub mod narrator;
pub mod render;

pub use input::StdinInput;
pub use narrator::{message, TerminalNarrator};
pub use render::{render, BoardView};
