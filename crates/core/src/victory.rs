//! Victory detection - the enclosure scan.
//!
//! A position is won when some interior cell is ringed by four beads of one
//! player and the trapped bead belongs to the other. The rule compares the
//! trapped cell against its south neighbour only; the rest of the ring is
//! covered by the unanimity requirement.

use crate::board::Board;
use crate::types::{Coord, Player, BOARD_SIZE};

/// Scan the interior for a winning enclosure.
///
/// Cells are visited in fixed x-major order ((1,1), (1,2), ... (3,3)) and
/// the first match is returned as the victory cell, for display.
pub fn find_victory(board: &Board) -> Option<Coord> {
    for x in 1..BOARD_SIZE - 1 {
        for y in 1..BOARD_SIZE - 1 {
            let coord = Coord::new(x, y);
            let ring_unanimous = board.is_enclosed_by(coord, Player::Red)
                || board.is_enclosed_by(coord, Player::Blue);
            if ring_unanimous {
                let south = Coord::new(x, y + 1);
                if board.opposed_pair(coord, south) {
                    return Some(coord);
                }
            }
        }
    }
    None
}
