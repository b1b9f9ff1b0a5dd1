//! Text-message transport to the game server.

use futures_util::{SinkExt, StreamExt};
use log::{info, warn};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::PlayerError;

/// One board per incoming message, one token per outgoing message.
pub trait Transport {
    /// Next text message, or None once the peer has closed the connection.
    async fn recv(&mut self) -> Result<Option<String>, PlayerError>;

    async fn send(&mut self, text: &str) -> Result<(), PlayerError>;
}

pub struct WsTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsTransport {
    pub async fn connect(url: &str) -> Result<WsTransport, PlayerError> {
        let (stream, response) = connect_async(url).await?;
        info!("connected to {} ({})", url, response.status());
        Ok(WsTransport { stream })
    }
}

impl Transport for WsTransport {
    async fn recv(&mut self) -> Result<Option<String>, PlayerError> {
        while let Some(message) = self.stream.next().await {
            match message? {
                Message::Text(text) => return Ok(Some(text)),
                Message::Close(frame) => {
                    info!("server closed the connection: {:?}", frame);
                    return Ok(None);
                }
                Message::Binary(data) => warn!("skipping binary frame ({} bytes)", data.len()),
                Message::Ping(_) | Message::Pong(_) => warn!("skipping control frame"),
                Message::Frame(_) => warn!("skipping raw frame"),
            }
        }
        Ok(None)
    }

    async fn send(&mut self, text: &str) -> Result<(), PlayerError> {
        self.stream.send(Message::Text(text.to_string())).await?;
        Ok(())
    }
}
