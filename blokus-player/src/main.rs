//! Blokus Duo player
//!
//! Connects to a game server over websocket, receives a role number, then
//! answers every board with a move from blokus-core until either side
//! passes or the connection closes.

mod config;
mod error;
mod game;
mod transport;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::config::Args;
use crate::error::PlayerError;
use crate::transport::WsTransport;

// =============================================================================
// Logging
// =============================================================================

fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

// =============================================================================
// Main
// =============================================================================

async fn run(args: Args) -> Result<(), PlayerError> {
    let mut transport = WsTransport::connect(&args.url).await?;
    let outcome = game::play(&mut transport).await?;
    info!(
        "player {} finished: {:?}, {} moves sent, {} cells covered",
        u8::from(outcome.role),
        outcome.reason,
        outcome.moves_sent,
        outcome.own_cells
    );

    if let Some(path) = &args.record {
        game::write_record(path, &outcome.record)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
