//! Combatant trait and implementations
//!
//! A combatant only decides where to shoot. Firing, and retrying when the
//! board refuses a target, is shared by every combatant in [`take_turn`].
//! - AutomatedCombatant: picks uniformly random cells
//! - HumanCombatant: reads targets from an input source

use rand::rngs::SmallRng;

use crate::engine::{Board, BoardError, Coordinate, Event, Narrator, Side};

/// Interface implemented by the different kinds of participant.
pub trait Combatant {
    /// Choose the next cell to fire at on the opponent's board.
    ///
    /// Errors are boundary failures (such as closed input), never game rules.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        narrator: &mut dyn Narrator,
    ) -> anyhow::Result<Coordinate>;
}

/// Fire one accepted shot at `enemy` on behalf of `shooter`.
///
/// Targets the board refuses are announced and the combatant is asked again,
/// for as long as it takes. Returns `true` when the same side shoots again.
pub fn take_turn<const N: usize>(
    shooter: Side,
    combatant: &mut dyn Combatant,
    enemy: &mut Board<N>,
    rng: &mut SmallRng,
    narrator: &mut dyn Narrator,
) -> anyhow::Result<bool> {
    loop {
        let target = combatant.select_target(rng, narrator)?;
        match enemy.shot(target) {
            Ok(outcome) => {
                narrator.announce(&Event::Shot {
                    shooter,
                    target,
                    outcome,
                });
                return Ok(outcome.grants_repeat());
            }
            Err(error @ (BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_))) => {
                log::debug!("{:?} target rejected: {}", shooter, error);
                narrator.announce(&Event::Rejected { shooter, error });
            }
            Err(other) => return Err(anyhow::anyhow!(other)),
        }
    }
}

pub mod ai;
pub use ai::AutomatedCombatant;

#[cfg(feature = "std")]
pub mod human;
#[cfg(feature = "std")]
pub use human::{parse_target, HumanCombatant, InputSource};
