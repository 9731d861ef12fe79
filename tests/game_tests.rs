use std::collections::VecDeque;

use rand::{rngs::SmallRng, SeedableRng};
use warships::{
    AutomatedCombatant, Board, BoardError, Combatant, Coordinate, Event, GameEngine, Narrator,
    Orientation, ShotOutcome, Side, Silent, StandardGame, TurnState, Vessel, BOARD_SIZE,
    FLEET_SIZE,
};

/// Fires at a fixed list of cells.
struct Scripted(VecDeque<Coordinate>);

impl Scripted {
    fn boxed(targets: &[(i32, i32)]) -> Box<dyn Combatant> {
        Box::new(Scripted(targets.iter().map(|&t| t.into()).collect()))
    }
}

impl Combatant for Scripted {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _narrator: &mut dyn Narrator,
    ) -> anyhow::Result<Coordinate> {
        self.0
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }
}

fn board(vessels: &[((i32, i32), usize, Orientation)]) -> Board<6> {
    let mut board = Board::new();
    for &(origin, length, orientation) in vessels {
        board
            .add_vessel(Vessel::new(origin.into(), length, orientation).unwrap())
            .unwrap();
    }
    board.reset_targeting();
    board
}

fn two_vessels() -> Board<6> {
    board(&[
        ((0, 0), 2, Orientation::Horizontal),
        ((5, 5), 1, Orientation::Vertical),
    ])
}

fn engine(human: &[(i32, i32)], automated: &[(i32, i32)]) -> GameEngine<6> {
    GameEngine::new(
        Scripted::boxed(human),
        two_vessels(),
        Scripted::boxed(automated),
        two_vessels(),
    )
}

#[test]
fn test_misses_alternate_turns() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game = engine(&[(3, 3), (3, 4)], &[(2, 2), (2, 3)]);
    assert_eq!(game.state(), TurnState::AwaitingTurn(Side::Human));

    let expected = [Side::Automated, Side::Human, Side::Automated, Side::Human];
    for side in expected {
        assert_eq!(
            game.step(&mut rng, &mut Silent).unwrap(),
            TurnState::AwaitingTurn(side)
        );
    }
    let summary = game.summary();
    assert_eq!(summary.shots, [2, 2]);
    assert_eq!(summary.handovers, 4);
}

#[test]
fn test_hit_keeps_the_turn_destroy_passes_it() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game = engine(&[(0, 0), (0, 1), (5, 5)], &[(3, 3)]);
    let mut events: Vec<Event> = Vec::new();

    assert_eq!(
        game.step(&mut rng, &mut events).unwrap(),
        TurnState::AwaitingTurn(Side::Human)
    );
    assert_eq!(
        game.step(&mut rng, &mut events).unwrap(),
        TurnState::AwaitingTurn(Side::Automated)
    );
    assert_eq!(
        game.step(&mut rng, &mut events).unwrap(),
        TurnState::AwaitingTurn(Side::Human)
    );
    assert_eq!(
        game.step(&mut rng, &mut events).unwrap(),
        TurnState::GameOver(Side::Human)
    );

    let outcomes: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            Event::Shot {
                shooter, outcome, ..
            } => Some((*shooter, *outcome)),
            _ => None,
        })
        .collect();
    assert_eq!(
        outcomes,
        vec![
            (Side::Human, ShotOutcome::Hit),
            (Side::Human, ShotOutcome::Destroyed),
            (Side::Automated, ShotOutcome::Miss),
            (Side::Human, ShotOutcome::Destroyed),
        ]
    );
    assert_eq!(
        events.last(),
        Some(&Event::GameOver {
            winner: Side::Human
        })
    );

    let summary = game.summary();
    assert_eq!(summary.winner, Some(Side::Human));
    assert_eq!(summary.shots, [3, 1]);
    assert_eq!(summary.destroyed, [2, 0]);
    // the hit kept the turn, so play only changed hands twice
    assert_eq!(summary.handovers, 2);
}

#[test]
fn test_refused_targets_are_retried() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game = engine(&[(9, 9), (0, 0), (0, 0), (-1, 2), (2, 2)], &[]);
    let mut events: Vec<Event> = Vec::new();

    // (9, 9) refused, (0, 0) hits
    assert_eq!(
        game.step(&mut rng, &mut events).unwrap(),
        TurnState::AwaitingTurn(Side::Human)
    );
    // (0, 0) and (-1, 2) refused, (2, 2) misses
    assert_eq!(
        game.step(&mut rng, &mut events).unwrap(),
        TurnState::AwaitingTurn(Side::Automated)
    );

    assert_eq!(
        events,
        vec![
            Event::Rejected {
                shooter: Side::Human,
                error: BoardError::OutOfBounds(Coordinate::new(9, 9)),
            },
            Event::Shot {
                shooter: Side::Human,
                target: Coordinate::new(0, 0),
                outcome: ShotOutcome::Hit,
            },
            Event::Rejected {
                shooter: Side::Human,
                error: BoardError::AlreadyTargeted(Coordinate::new(0, 0)),
            },
            Event::Rejected {
                shooter: Side::Human,
                error: BoardError::OutOfBounds(Coordinate::new(-1, 2)),
            },
            Event::Shot {
                shooter: Side::Human,
                target: Coordinate::new(2, 2),
                outcome: ShotOutcome::Miss,
            },
        ]
    );
    assert_eq!(game.summary().shots, [2, 0]);
}

#[test]
fn test_automated_side_can_win() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game = engine(&[(3, 3), (3, 4)], &[(0, 0), (0, 1), (5, 5)]);

    let winner = game.run(&mut rng, &mut Silent).unwrap();
    assert_eq!(winner, Side::Automated);
    assert!(game.is_over());
    assert!(game.board(Side::Human).all_destroyed());
    assert!(!game.board(Side::Automated).all_destroyed());
}

#[test]
fn test_step_after_game_over_is_noop() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game = engine(&[(0, 0), (0, 1), (5, 5)], &[(3, 3)]);
    game.run(&mut rng, &mut Silent).unwrap();

    let before = game.summary();
    let mut events: Vec<Event> = Vec::new();
    assert_eq!(
        game.step(&mut rng, &mut events).unwrap(),
        TurnState::GameOver(Side::Human)
    );
    assert!(events.is_empty());
    assert_eq!(game.summary(), before);
}

#[test]
fn test_combatant_errors_propagate() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game = engine(&[], &[]);
    assert!(game.step(&mut rng, &mut Silent).is_err());
    assert_eq!(game.state(), TurnState::AwaitingTurn(Side::Human));
}

#[test]
fn test_automated_vs_automated() {
    for seed in 0..16 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = StandardGame::with_random_boards(
            Box::new(AutomatedCombatant::new(BOARD_SIZE)),
            Box::new(AutomatedCombatant::default()),
            &mut rng,
        );
        let winner = game.run(&mut rng, &mut Silent).unwrap();

        let loser_board = game.board(winner.opponent());
        assert!(loser_board.all_destroyed());
        assert_eq!(loser_board.destroyed_count(), FLEET_SIZE);
        assert!(!game.board(winner).all_destroyed());

        let summary = game.summary();
        assert_eq!(summary.winner, Some(winner));
        assert_eq!(summary.destroyed[winner.index()], FLEET_SIZE);
        let cells = BOARD_SIZE * BOARD_SIZE;
        assert!(summary.shots.iter().all(|&s| s <= cells));
        assert!(summary.handovers < summary.shots[0] + summary.shots[1]);
    }
}
