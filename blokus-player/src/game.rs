//! Handshake and turn loop.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use blokus_core::{Cell, GameRecord, Player, Session};
use log::{debug, info};

use crate::error::PlayerError;
use crate::transport::Transport;

/// Why the turn loop stopped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EndReason {
    /// We had no legal move and sent the sentinel.
    Passed,
    /// The server sent the sentinel.
    PeerPassed,
    /// The connection closed mid-game.
    Closed,
}

#[derive(Debug)]
pub struct Outcome {
    pub role: Player,
    pub reason: EndReason,
    /// Moves sent, opening and sentinel included.
    pub moves_sent: u32,
    /// Own cells on the last board we held.
    pub own_cells: usize,
    pub record: GameRecord,
}

/// Read the role number the server sends before the first board.
pub async fn handshake<T: Transport>(transport: &mut T) -> Result<Player, PlayerError> {
    let message = transport
        .recv()
        .await?
        .ok_or(PlayerError::ClosedBeforeHandshake)?;
    message
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Player::from_number)
        .ok_or(PlayerError::Handshake(message))
}

/// Play one game to the end.
pub async fn play<T: Transport>(transport: &mut T) -> Result<Outcome, PlayerError> {
    let role = handshake(transport).await?;
    info!("playing as player {} ('{}')", u8::from(role), role.mark());

    let mut session = Session::new(role);
    let mut record = GameRecord::new(role);

    let reason = loop {
        let Some(message) = transport.recv().await? else {
            break EndReason::Closed;
        };
        let Some(report) = session.receive(&message)? else {
            break EndReason::PeerPassed;
        };

        debug!(
            "turn {}: {} anchors, {} candidates, {} legal",
            report.turn, report.anchors, report.stats.candidates, report.stats.legal
        );
        let token = report.reply.encode();
        record.push(&message, &report);
        transport.send(&token).await?;
        info!("turn {}: sent {}", report.turn, token);
        debug!(
            "board after turn {}:\n{}",
            report.turn,
            session.board().render(role.mark(), role.opponent().mark())
        );

        if session.is_finished() {
            break EndReason::Passed;
        }
    };

    let own_cells = session.board().count(Cell::Own);
    info!(
        "game over ({:?}) after {} moves, {} cells placed, {} pieces left",
        reason,
        session.turn(),
        own_cells,
        session.remaining().len()
    );

    Ok(Outcome {
        role,
        reason,
        moves_sent: session.turn(),
        own_cells,
        record,
    })
}

pub fn write_record(path: &Path, record: &GameRecord) -> Result<(), PlayerError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, record)?;
    info!("wrote game record to {}", path.display());
    Ok(())
}
