//! Move tokens exchanged with the game server.
//!
//! ```text
//! Token: 4 ASCII characters
//!
//!   U 0 4 5
//!   │ │ │ └─ hex(y + 1), top-left row
//!   │ │ └─── hex(x + 1), top-left column
//!   │ └───── orientation code, ORIENTATION_CODES[rotation * 2 + flip]
//!   └─────── piece id 'A'-'U'
//!
//! "X000" is the no-move sentinel.
//! ```

use std::fmt;

use crate::error::MoveDecodeError;
use crate::pieces::PieceId;
use crate::search::Placement;
use crate::Player;

/// Sent when no legal placement exists; received when the game is over.
pub const NO_MOVE: &str = "X000";

/// Orientation character for each `rotation * 2 + flip` index.
pub const ORIENTATION_CODES: [char; 8] = ['0', '1', '2', '3', '4', '5', '6', '7'];

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Piece played as the first move by both roles.
pub const OPENING_PIECE: PieceId = PieceId::U;

/// A move as sent on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Move {
    Place(Placement),
    Pass,
}

impl Move {
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    /// Wire token for this move.
    pub fn encode(&self) -> String {
        match self {
            Move::Pass => NO_MOVE.to_string(),
            Move::Place(p) => {
                let mut token = String::with_capacity(4);
                token.push(p.piece.to_char());
                token.push(ORIENTATION_CODES[p.orientation() as usize]);
                token.push(hex_digit(p.x + 1));
                token.push(hex_digit(p.y + 1));
                token
            }
        }
    }

    /// Parse a wire token. Coordinates are checked for syntax only, so a
    /// decoded placement may still fail `Board::place`.
    pub fn decode(token: &str) -> Result<Move, MoveDecodeError> {
        if token == NO_MOVE {
            return Ok(Move::Pass);
        }

        let chars: Vec<char> = token.chars().collect();
        let &[piece, orientation, x, y] = chars.as_slice() else {
            return Err(MoveDecodeError::WrongLength(chars.len()));
        };

        let piece = PieceId::from_char(piece).ok_or(MoveDecodeError::UnknownPiece(piece))?;
        let index = ORIENTATION_CODES
            .iter()
            .position(|&c| c == orientation)
            .ok_or(MoveDecodeError::UnknownOrientation(orientation))? as u8;

        Ok(Move::Place(Placement {
            piece,
            rotation: index / 2,
            flip: index % 2 == 1,
            x: coordinate(x)?,
            y: coordinate(y)?,
        }))
    }
}

impl From<Option<Placement>> for Move {
    fn from(placement: Option<Placement>) -> Self {
        placement.map_or(Move::Pass, Move::Place)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[inline]
fn hex_digit(value: u8) -> char {
    HEX_DIGITS[value as usize & 0xF] as char
}

/// Decode a 1-based hex coordinate into a 0-based one.
fn coordinate(c: char) -> Result<u8, MoveDecodeError> {
    HEX_DIGITS
        .iter()
        .position(|&d| d as char == c)
        .filter(|&v| v > 0)
        .map(|v| v as u8 - 1)
        .ok_or(MoveDecodeError::BadCoordinate(c))
}

/// Fixed first placement for each role: the X-pentomino covering that
/// role's start point at (4, 4) or (9, 9).
pub fn opening_placement(player: Player) -> Placement {
    let (x, y) = match player {
        Player::One => (3, 4),
        Player::Two => (8, 9),
    };
    Placement {
        piece: OPENING_PIECE,
        rotation: 0,
        flip: false,
        x,
        y,
    }
}

#[inline]
pub fn opening_move(player: Player) -> Move {
    Move::Place(opening_placement(player))
}

/// True if the text is the no-move sentinel, ignoring surrounding whitespace.
#[inline]
pub fn is_no_move(text: &str) -> bool {
    text.trim() == NO_MOVE
}
