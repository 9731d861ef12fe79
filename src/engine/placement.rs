// Random fleet placement by rejection sampling.

use rand::Rng;

use super::board::Board;
use super::common::PlacementError;
use super::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use super::coord::Coordinate;
use super::ship::{Orientation, Vessel};

/// Place `fleet` on a fresh board at random.
///
/// Every candidate gets a uniformly random origin on the grid and a random
/// orientation; candidates the board rejects are redrawn. One attempt counter
/// covers the whole fleet, and once it passes `max_attempts` the board is
/// abandoned with [`PlacementError::Exhausted`]. On success the placement-time
/// targeting is reset, so the board is ready for play.
pub fn try_random_board<const N: usize, R: Rng + ?Sized>(
    rng: &mut R,
    fleet: &[usize],
    max_attempts: usize,
) -> Result<Board<N>, PlacementError> {
    let mut board = Board::<N>::new();
    let mut attempts = 0usize;
    for &length in fleet {
        loop {
            attempts += 1;
            if attempts > max_attempts {
                return Err(PlacementError::Exhausted {
                    attempts: max_attempts,
                });
            }
            let origin = Coordinate::new(
                rng.random_range(0..N as i32),
                rng.random_range(0..N as i32),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let placed = Vessel::new(origin, length, orientation)
                .and_then(|vessel| board.add_vessel(vessel));
            if placed.is_ok() {
                break;
            }
        }
    }
    log::trace!("fleet placed after {} attempts", attempts);
    board.reset_targeting();
    Ok(board)
}

/// Place the standard fleet, restarting from an empty board whenever the
/// attempt budget runs out.
pub fn random_board<const N: usize, R: Rng + ?Sized>(rng: &mut R) -> Board<N> {
    let mut restarts = 0usize;
    loop {
        match try_random_board::<N, R>(rng, &FLEET, MAX_PLACEMENT_ATTEMPTS) {
            Ok(board) => return board,
            Err(e) => {
                restarts += 1;
                log::debug!("{}; restarting placement (restart #{})", e, restarts);
            }
        }
    }
}
