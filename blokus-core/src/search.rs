//! Greedy placement search.
//!
//! Candidates are enumerated in a fixed order, which is also the tie-break
//! order (first-seen wins):
//! 1. Piece, in `PieceId::ALPHABET` order
//! 2. Rotation 0 → 3
//! 3. Flip: false, then true
//! 4. Anchor, row-major
//! 5. Filled cell of the oriented pattern, row-major (that cell is placed on the anchor)

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::pattern::Pattern;
use crate::pieces::{PieceId, PieceSet};
use crate::{Coord, Player};

/// Flip values in enumeration order.
pub const FLIPS: [bool; 2] = [false, true];

/// A piece in a given orientation with its bounding box's top-left at `(x, y)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub piece: PieceId,
    /// Counter-clockwise quarter turns (0-3), applied after the flip.
    pub rotation: u8,
    pub flip: bool,
    pub x: u8,
    pub y: u8,
}

impl Placement {
    /// Oriented pattern of this placement.
    #[inline]
    pub fn pattern(&self) -> Pattern {
        self.piece.pattern().orient(self.rotation, self.flip)
    }

    /// Orientation index 0-7: `rotation * 2 + flip`.
    #[inline]
    pub fn orientation(&self) -> u8 {
        (self.rotation % 4) * 2 + self.flip as u8
    }

    /// Cells covered by this placement. Unchecked placements (e.g. from
    /// `Move::decode`) may extend past the board edge.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (x, y) = (self.x, self.y);
        self.pattern().cells().map(move |(ox, oy)| Coord {
            x: x + ox as u8,
            y: y + oy as u8,
        })
    }
}

/// Counters from one search.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchStats {
    /// Candidates with a non-negative top-left.
    pub candidates: u64,
    /// Candidates that passed every legality check.
    pub legal: u64,
}

/// Positional score; lower is better.
///
/// Player One starts top-left and prefers placements near that corner,
/// Player Two the mirror image. The pattern is not consulted.
#[inline]
pub fn score(_pattern: &Pattern, x: usize, y: usize, player: Player) -> i32 {
    let distance = (x + y) as i32;
    match player {
        Player::One => distance,
        Player::Two => -distance,
    }
}

/// Visit every legal placement in enumeration order.
pub fn for_each_legal_placement<F>(
    board: &Board,
    remaining: PieceSet,
    anchors: &[Coord],
    mut visit: F,
) -> SearchStats
where
    F: FnMut(Placement, &Pattern),
{
    let mut stats = SearchStats::default();

    for piece in remaining.iter() {
        let canonical = piece.pattern();
        for rotation in 0..4u8 {
            for flip in FLIPS {
                let pattern = canonical.orient(rotation, flip);
                for anchor in anchors {
                    for (ox, oy) in pattern.cells() {
                        let (Some(x), Some(y)) = (
                            (anchor.x as usize).checked_sub(ox),
                            (anchor.y as usize).checked_sub(oy),
                        ) else {
                            continue;
                        };
                        stats.candidates += 1;

                        if board.is_out_of_bounds(&pattern, x, y)
                            || board.is_overlapping(&pattern, x, y)
                            || board.is_adjacent_to_own(&pattern, x, y)
                        {
                            continue;
                        }
                        stats.legal += 1;

                        let placement = Placement {
                            piece,
                            rotation,
                            flip,
                            x: x as u8,
                            y: y as u8,
                        };
                        visit(placement, &pattern);
                    }
                }
            }
        }
    }

    stats
}

/// All legal placements in enumeration order. Symmetric pieces produce
/// repeated placements under different (rotation, flip) labels.
pub fn legal_placements(board: &Board, remaining: PieceSet, anchors: &[Coord]) -> Vec<Placement> {
    let mut placements = Vec::new();
    for_each_legal_placement(board, remaining, anchors, |p, _| placements.push(p));
    placements
}

/// Best placement and the search counters.
pub fn select_with_stats(
    board: &Board,
    remaining: PieceSet,
    anchors: &[Coord],
    player: Player,
) -> (Option<Placement>, SearchStats) {
    let mut best: Option<(i32, Placement)> = None;

    let stats = for_each_legal_placement(board, remaining, anchors, |placement, pattern| {
        let s = score(pattern, placement.x as usize, placement.y as usize, player);
        if best.map_or(true, |(best_score, _)| s < best_score) {
            best = Some((s, placement));
        }
    });

    (best.map(|(_, p)| p), stats)
}

/// Lowest-scoring legal placement, or None if no piece fits anywhere.
/// Does not modify the board or the piece set.
pub fn select_best_placement(
    board: &Board,
    remaining: PieceSet,
    anchors: &[Coord],
    player: Player,
) -> Option<Placement> {
    select_with_stats(board, remaining, anchors, player).0
}
