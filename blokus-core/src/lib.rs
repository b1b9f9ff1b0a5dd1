//! Blokus Duo placement engine.
//!
//! # Board
//!
//! ```text
//! 14 x 14 grid, origin at the top-left corner.
//!   x = column (0-13), y = row (0-13)
//!
//! Each cell is stored relative to the player running the engine:
//!   Empty | Own | Other
//! ```
//!
//! # Pattern Encoding (32-bit)
//!
//! ```text
//! Bits 0-24:  filled cells of a 5x5 bounding box, bit index = y * 5 + x
//! Bits 25-31: unused (zero)
//! width/height stored alongside (1-5 each)
//! ```
//!
//! # Move Encoding (4 characters)
//!
//! ```text
//! char 0: piece id           'A'-'U'
//! char 1: orientation code   '0'-'7'  (rotation * 2 + flip)
//! char 2: x + 1              one uppercase hex digit
//! char 3: y + 1              one uppercase hex digit
//!
//! "X000" = no legal move (pass), also ends the session
//! ```

pub mod anchors;
pub mod board;
pub mod codec;
pub mod error;
pub mod pattern;
pub mod pieces;
pub mod record;
pub mod search;
pub mod session;

use serde::{Deserialize, Serialize};

pub use anchors::compute_anchors;
pub use board::Board;
pub use codec::{Move, NO_MOVE};
pub use error::{MalformedBoardError, MoveDecodeError, PlacementError, ReplayError, SessionError};
pub use pattern::Pattern;
pub use pieces::{PieceId, PieceSet};
pub use record::{GameRecord, TurnRecord};
pub use search::{select_best_placement, Placement, SearchStats};
pub use session::{Session, TurnReport};

/// Board width in cells.
pub const BOARD_WIDTH: usize = 14;
/// Board height in cells.
pub const BOARD_HEIGHT: usize = 14;

// Coordinates travel as single hex digits (1-based) on the wire.
const _: () = assert!(BOARD_WIDTH <= 15 && BOARD_HEIGHT <= 15);

/// Player identifier, as assigned by the server handshake.
///
/// `One` moves first and starts from the top-left corner, `Two` from the
/// bottom-right corner.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert from the handshake number (1 or 2) to Player.
    #[inline]
    pub fn from_number(number: u8) -> Option<Player> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The character this player's cells are drawn with on the wire board.
    #[inline]
    pub fn mark(self) -> char {
        match self {
            Player::One => 'o',
            Player::Two => 'x',
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Player::from_number(number).ok_or_else(|| format!("invalid player number: {number}"))
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player as u8
    }
}

/// State of one board cell, relative to the engine's own player.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Own,
    Other,
}

/// A cell position on the board (0-based).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column
    pub x: u8,
    /// Row
    pub y: u8,
}

impl Coord {
    #[inline]
    pub fn new(x: u8, y: u8) -> Coord {
        debug_assert!((x as usize) < BOARD_WIDTH && (y as usize) < BOARD_HEIGHT);
        Coord { x, y }
    }
}
