//! Error types for board parsing, move decoding, placement and sessions.

use thiserror::Error;

/// The wire board did not have the expected dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedBoardError {
    #[error("board has {found} rows, expected at least {expected}")]
    TooFewRows { expected: usize, found: usize },

    #[error("board row {row} has {found} columns, expected at least {expected}")]
    RowTooShort {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A move token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveDecodeError {
    #[error("move token must be 4 characters, got {0}")]
    WrongLength(usize),

    #[error("unknown piece '{0}'")]
    UnknownPiece(char),

    #[error("unknown orientation code '{0}'")]
    UnknownOrientation(char),

    #[error("coordinate '{0}' is not on the board")]
    BadCoordinate(char),
}

/// Why a placement was rejected. Checks run in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("piece does not fit inside the board")]
    OutOfBounds,

    #[error("piece overlaps an occupied cell")]
    Overlapping,

    #[error("piece shares an edge with an own piece")]
    AdjacentToOwn,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("malformed board: {0}")]
    MalformedBoard(#[from] MalformedBoardError),

    #[error("session already finished")]
    Finished,
}

/// A recorded game did not replay identically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("turn {turn}: {source}")]
    Session {
        turn: u32,
        #[source]
        source: SessionError,
    },

    #[error("turn {turn}: recorded reply is not a move token")]
    Decode {
        turn: u32,
        #[source]
        source: MoveDecodeError,
    },

    #[error("turn {turn}: recorded reply {recorded} but engine played {actual}")]
    Mismatch {
        turn: u32,
        recorded: String,
        actual: String,
    },
}
