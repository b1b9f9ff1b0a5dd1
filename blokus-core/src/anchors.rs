//! Anchor points: the empty cells a new piece may grow from.
//!
//! A new piece must touch one of its owner's pieces corner-to-corner, so
//! every legal placement covers at least one empty cell that is a diagonal
//! neighbor of an `Own` cell. Restricting the search to those cells prunes
//! without losing any legal placement.

use crate::board::Board;
use crate::{Cell, Coord};

/// True if `(x, y)` is empty and has an `Own` cell among its diagonal neighbors.
#[inline]
pub fn is_anchor(board: &Board, x: usize, y: usize) -> bool {
    board.get(x, y) == Some(Cell::Empty)
        && Board::diagonal_neighbors(x, y).any(|(nx, ny)| board.cell(nx, ny) == Cell::Own)
}

/// All anchor points of the board, in row-major order.
pub fn compute_anchors(board: &Board) -> Vec<Coord> {
    Board::coords()
        .filter(|c| is_anchor(board, c.x as usize, c.y as usize))
        .collect()
}
