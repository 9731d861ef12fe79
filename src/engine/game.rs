use alloc::boxed::Box;
use rand::rngs::SmallRng;

use super::board::Board;
use super::config::BOARD_SIZE;
use super::events::{Event, Narrator};
use super::placement::random_board;
use crate::player::{take_turn, Combatant};

/// One of the two seats at the table. The human seat moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }

    /// Turn index: 0 for the human, 1 for the automated side.
    pub fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Automated => 1,
        }
    }
}

/// Where the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for this side to shoot.
    AwaitingTurn(Side),
    /// Finished; carries the winner.
    GameOver(Side),
}

/// Statistics of a match, finished or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub winner: Option<Side>,
    /// Times play passed to the other side. Extra shots after a hit do not
    /// count.
    pub handovers: usize,
    /// Accepted shots fired by the human and automated side.
    pub shots: [usize; 2],
    /// Enemy vessels destroyed by the human and automated side.
    pub destroyed: [usize; 2],
}

/// Match controller: owns both home boards and both combatants, alternates
/// turns and decides the winner.
pub struct GameEngine<const N: usize> {
    boards: [Board<N>; 2],
    combatants: [Box<dyn Combatant>; 2],
    state: TurnState,
    shots: [usize; 2],
    handovers: usize,
}

/// Engine on the default board size.
pub type StandardGame = GameEngine<BOARD_SIZE>;

impl<const N: usize> GameEngine<N> {
    /// Start a match on prepared boards. Each board is the home board of the
    /// combatant passed next to it.
    pub fn new(
        human: Box<dyn Combatant>,
        human_board: Board<N>,
        automated: Box<dyn Combatant>,
        automated_board: Board<N>,
    ) -> Self {
        Self {
            boards: [human_board, automated_board],
            combatants: [human, automated],
            state: TurnState::AwaitingTurn(Side::Human),
            shots: [0; 2],
            handovers: 0,
        }
    }

    /// Start a match with both fleets placed at random.
    pub fn with_random_boards(
        human: Box<dyn Combatant>,
        automated: Box<dyn Combatant>,
        rng: &mut SmallRng,
    ) -> Self {
        let human_board = random_board::<N, _>(rng);
        let automated_board = random_board::<N, _>(rng);
        Self::new(human, human_board, automated, automated_board)
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Home board of `side`.
    pub fn board(&self, side: Side) -> &Board<N> {
        &self.boards[side.index()]
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    /// Play one turn: the current side fires until a shot is accepted.
    /// Does nothing once the game is over.
    pub fn step(
        &mut self,
        rng: &mut SmallRng,
        narrator: &mut dyn Narrator,
    ) -> anyhow::Result<TurnState> {
        let side = match self.state {
            TurnState::AwaitingTurn(side) => side,
            over @ TurnState::GameOver(_) => return Ok(over),
        };

        let [human_board, automated_board] = &mut self.boards;
        let enemy = match side {
            Side::Human => automated_board,
            Side::Automated => human_board,
        };
        let repeat = take_turn(
            side,
            self.combatants[side.index()].as_mut(),
            enemy,
            rng,
            narrator,
        )?;
        self.shots[side.index()] += 1;

        self.state = if self.board(Side::Automated).all_destroyed() {
            TurnState::GameOver(Side::Human)
        } else if self.board(Side::Human).all_destroyed() {
            TurnState::GameOver(Side::Automated)
        } else if repeat {
            TurnState::AwaitingTurn(side)
        } else {
            self.handovers += 1;
            TurnState::AwaitingTurn(side.opponent())
        };

        if let TurnState::GameOver(winner) = self.state {
            log::info!(
                "game over after {} shots, {:?} wins",
                self.shots[0] + self.shots[1],
                winner
            );
            narrator.announce(&Event::GameOver { winner });
        }
        Ok(self.state)
    }

    /// Step until one side wins and return the winner.
    pub fn run(&mut self, rng: &mut SmallRng, narrator: &mut dyn Narrator) -> anyhow::Result<Side> {
        loop {
            if let TurnState::GameOver(winner) = self.step(rng, narrator)? {
                return Ok(winner);
            }
        }
    }

    pub fn summary(&self) -> MatchSummary {
        let winner = match self.state {
            TurnState::GameOver(winner) => Some(winner),
            TurnState::AwaitingTurn(_) => None,
        };
        MatchSummary {
            winner,
            handovers: self.handovers,
            shots: self.shots,
            destroyed: [
                self.board(Side::Automated).destroyed_count(),
                self.board(Side::Human).destroyed_count(),
            ],
        }
    }
}
