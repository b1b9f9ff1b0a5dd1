use blokus_core::SessionError;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("connection closed before a role was assigned")]
    ClosedBeforeHandshake,

    #[error("expected role number 1 or 2, got {0:?}")]
    Handshake(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("writing game record: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding game record: {0}")]
    Json(#[from] serde_json::Error),
}
