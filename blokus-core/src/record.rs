//! Serializable game records: every board received and the reply sent.

use serde::{Deserialize, Serialize};

use crate::codec::Move;
use crate::error::ReplayError;
use crate::session::{Session, TurnReport};
use crate::Player;

/// One exchange with the server.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    /// Wire board as received.
    pub board: String,
    /// Wire token as sent.
    pub reply: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameRecord {
    pub role: Player,
    pub turns: Vec<TurnRecord>,
}

impl GameRecord {
    pub fn new(role: Player) -> GameRecord {
        GameRecord {
            role,
            turns: Vec::new(),
        }
    }

    /// Append the board a session was given and the reply it produced.
    pub fn push(&mut self, board: &str, report: &TurnReport) {
        self.turns.push(TurnRecord {
            turn: report.turn,
            board: board.to_string(),
            reply: report.reply.encode(),
        });
    }

    /// Play every recorded board through a fresh session and check that
    /// each reply matches the recorded one.
    pub fn replay(&self) -> Result<(), ReplayError> {
        let mut session = Session::new(self.role);
        for record in &self.turns {
            let turn = record.turn;
            let recorded =
                Move::decode(&record.reply).map_err(|source| ReplayError::Decode { turn, source })?;
            let report = session
                .respond(&record.board)
                .map_err(|source| ReplayError::Session { turn, source })?;
            if report.reply != recorded {
                return Err(ReplayError::Mismatch {
                    turn,
                    recorded: record.reply.clone(),
                    actual: report.reply.encode(),
                });
            }
        }
        Ok(())
    }
}
