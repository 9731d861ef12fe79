#![cfg(feature = "std")]

use warships::cli::{render, BoardView};
use warships::{Board, Coordinate, Orientation, Vessel};

fn sample() -> Board<3> {
    let mut board = Board::new();
    board
        .add_vessel(Vessel::new(Coordinate::new(0, 0), 2, Orientation::Horizontal).unwrap())
        .unwrap();
    board.reset_targeting();
    board.shot(Coordinate::new(0, 0)).unwrap();
    board.shot(Coordinate::new(2, 2)).unwrap();
    board
}

#[test]
fn test_render_shows_ships() {
    let expected = "  | 1 | 2 | 3 |\n\
                    1 | X | ■ | O |\n\
                    2 | O | O | O |\n\
                    3 | O | O | T |";
    assert_eq!(render(&sample(), false), expected);
}

#[test]
fn test_render_hides_ships() {
    let expected = "  | 1 | 2 | 3 |\n\
                    1 | X | O | O |\n\
                    2 | O | O | O |\n\
                    3 | O | O | T |";
    assert_eq!(BoardView::new(&sample(), true).to_string(), expected);
}
