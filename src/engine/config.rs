/// Side of the square board.
pub const BOARD_SIZE: usize = 6;

/// Vessel lengths placed on every board, in placement order.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];

/// Number of vessels in the fleet.
pub const FLEET_SIZE: usize = 7;

/// Total number of cells the fleet occupies.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a whole fleet before the board is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
