use crate::engine::{BoardError, Coordinate, Event, Narrator, ShotOutcome, Side};

/// Narrator that prints events for a person at the terminal.
///
/// Refused targets of the automated side are only logged; it redraws them on
/// its own and the human has nothing to correct.
#[derive(Debug, Default)]
pub struct TerminalNarrator;

impl TerminalNarrator {
    pub fn new() -> Self {
        Self
    }
}

fn shooter_name(side: Side) -> &'static str {
    match side {
        Side::Human => "Captain",
        Side::Automated => "Opponent",
    }
}

/// 1-based "row column", the way targets are typed.
fn human_coord(at: Coordinate) -> String {
    format!("{} {}", at.row() + 1, at.col() + 1)
}

/// Text shown to the player for `event`. `None` for events the player never
/// sees.
pub fn message(event: &Event) -> Option<String> {
    let text = match *event {
        Event::Shot {
            shooter,
            target,
            outcome,
        } => {
            let verdict = match outcome {
                ShotOutcome::Miss => "Miss. Not this time.",
                ShotOutcome::Hit => "Hit! Fire again.",
                ShotOutcome::Destroyed => "Vessel destroyed!",
            };
            format!(
                "{} fires at {}: {}",
                shooter_name(shooter),
                human_coord(target),
                verdict
            )
        }
        Event::Rejected {
            shooter: Side::Automated,
            ..
        } => return None,
        Event::Rejected {
            error: BoardError::AlreadyTargeted(at),
            ..
        } => format!("We already fired at {}. Pick another cell.", human_coord(at)),
        Event::Rejected { .. } => "That target is off the board!".to_string(),
        Event::InvalidInput(e) => format!("{}. Try again, e.g. \"2 3\".", e),
        Event::GameOver {
            winner: Side::Human,
        } => "Victory! Every enemy vessel is on the bottom.".to_string(),
        Event::GameOver {
            winner: Side::Automated,
        } => "Defeat. Our whole fleet is lost.".to_string(),
    };
    Some(text)
}

impl Narrator for TerminalNarrator {
    fn announce(&mut self, event: &Event) {
        match message(event) {
            Some(text) => println!("{}", text),
            None => log::debug!("{:?}", event),
        }
    }
}
