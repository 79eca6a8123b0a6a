//! Text-to-Speech client for the xfyun API.

use std::sync::Arc;

use base64::Engine;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info};

use crate::error::Error;
use crate::messages::{Business, TtsRequest, TtsResponse, STATUS_LAST_FRAME};
use crate::signer;
use crate::ws::WebSocket;

/// Configuration for the TTS client.
#[derive(Debug, Clone)]
pub struct TtsConfig {
    /// Application ID.
    pub app_id: String,
    /// API key carried in the authorization parameter.
    pub api_key: String,
    /// API secret used as the HMAC signing key.
    pub api_secret: String,
    /// WebSocket endpoint URL.
    pub endpoint: String,
}

impl TtsConfig {
    /// Creates a configuration pointing at the default endpoint.
    pub fn new(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            endpoint: crate::TTS_ENDPOINT.to_string(),
        }
    }

    /// Overrides the WebSocket endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Text-to-Speech client for streaming audio synthesis.
///
/// Each [`synthesize`](TtsClient::synthesize) call opens one connection,
/// sends one request and collects streamed fragments until the server marks
/// the stream complete. Connections are never reused across requests.
pub struct TtsClient {
    config: TtsConfig,
}

impl TtsClient {
    /// Creates a new TTS client with the given configuration.
    pub fn new(config: TtsConfig) -> Self {
        Self { config }
    }

    /// Synthesizes `text` with the given voice parameters and returns the
    /// accumulated audio.
    ///
    /// On any failure the session is aborted, the connection closed, and
    /// no audio is returned.
    pub async fn synthesize(&self, business: &Business, text: &str) -> Result<Vec<u8>, Error> {
        let session_id = uuid::Uuid::new_v4().to_string()[..8].to_string();
        info!(
            session_id = %session_id,
            voice = %business.vcn,
            chars = text.chars().count(),
            "TTS session starting"
        );

        let url = signer::sign_url(
            &self.config.endpoint,
            &self.config.api_key,
            &self.config.api_secret,
            &signer::http_date(),
        )?;
        let conn = Arc::new(WebSocket::connect(url.as_str()).await?);

        let request = TtsRequest::new(self.config.app_id.clone(), business.clone(), text);

        // One-shot completion signal: the first terminal outcome wins,
        // later writes are dropped by the full channel.
        let (done_tx, mut done_rx) = mpsc::channel::<Result<Vec<u8>, Error>>(1);

        let reader = Arc::clone(&conn);
        let receiver_tx = done_tx.clone();
        let receiver_session = session_id.clone();
        tokio::spawn(async move {
            let result = receive_audio(&reader, &receiver_session).await;
            let _ = receiver_tx.try_send(result);
        });

        match serde_json::to_string(&request) {
            Ok(json) => {
                debug!(session_id = %session_id, len = json.len(), "Sending TTS request");
                if let Err(e) = conn.send_text(&json).await {
                    let _ = done_tx.try_send(Err(e));
                }
            }
            Err(e) => {
                let _ = done_tx.try_send(Err(e.into()));
            }
        }

        let result = done_rx.recv().await.unwrap_or(Err(Error::StreamClosed));

        let _ = conn.close().await;

        match &result {
            Ok(audio) => {
                info!(session_id = %session_id, bytes = audio.len(), "TTS session complete")
            }
            Err(e) => error!(session_id = %session_id, error = %e, "TTS session failed"),
        }
        result
    }
}

/// Receive loop for one session.
///
/// Accumulates decoded fragments until the final status marker, a server
/// error, or a transport failure. The buffer is owned here and handed back
/// only through the returned result.
async fn receive_audio(conn: &WebSocket, session_id: &str) -> Result<Vec<u8>, Error> {
    let mut audio = Vec::new();

    loop {
        let msg = conn.recv().await?;

        let text = match msg {
            Message::Text(t) => t,
            Message::Binary(b) => match String::from_utf8(b) {
                Ok(s) => s,
                Err(e) => {
                    error!(session_id = %session_id, error = %e, "Invalid UTF-8 in server message");
                    return Err(Error::InvalidUtf8);
                }
            },
            Message::Ping(data) => {
                debug!(session_id = %session_id, "Received ping, sending pong");
                let _ = conn.send_pong(data).await;
                continue;
            }
            Message::Pong(_) => {
                debug!(session_id = %session_id, "Received pong");
                continue;
            }
            Message::Close(frame) => {
                debug!(session_id = %session_id, frame = ?frame, "Close before final fragment");
                return Err(Error::StreamClosed);
            }
            Message::Frame(_) => continue,
        };

        let frame: TtsResponse = match serde_json::from_str(&text) {
            Ok(frame) => frame,
            Err(e) => {
                error!(session_id = %session_id, error = %e, "Failed to parse server frame");
                return Err(Error::Json(e));
            }
        };

        if frame.code != 0 {
            error!(
                session_id = %session_id,
                code = frame.code,
                message = %frame.message,
                sid = %frame.sid,
                "Server error"
            );
            return Err(Error::Server {
                message: frame.message,
                code: frame.code,
            });
        }

        let chunk = match base64::engine::general_purpose::STANDARD.decode(&frame.data.audio) {
            Ok(chunk) => chunk,
            Err(e) => {
                error!(session_id = %session_id, error = %e, "Failed to decode audio fragment");
                return Err(Error::AudioDecode(e));
            }
        };

        debug!(
            session_id = %session_id,
            bytes = chunk.len(),
            status = frame.data.status,
            "Audio fragment received"
        );
        audio.extend_from_slice(&chunk);

        if frame.data.status == STATUS_LAST_FRAME {
            return Ok(audio);
        }
    }
}
