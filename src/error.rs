//! Error types for the xfyun TTS client library.

use thiserror::Error;

/// Error type for TTS client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Endpoint URL could not be parsed or has no host.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// HMAC signing failure.
    #[error("signing error: {0}")]
    Signing(String),

    /// Server rejected the WebSocket handshake; carries the HTTP response body.
    #[error("connection failed: {body}")]
    Connection {
        /// HTTP error response body returned by the server.
        body: String,
    },

    /// Connection or read timeout.
    #[error("connection timeout")]
    ConnectionTimeout,

    /// WebSocket transport error.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Connection closed before the final audio fragment arrived.
    #[error("stream closed before final fragment")]
    StreamClosed,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Audio fragment was not valid base64.
    #[error("audio decode error: {0}")]
    AudioDecode(#[from] base64::DecodeError),

    /// Server message was not valid UTF-8.
    #[error("invalid UTF-8 in server message")]
    InvalidUtf8,

    /// Server returned a non-zero result code.
    #[error("server error: {message} (code: {code})")]
    Server {
        /// Error message from the server.
        message: String,
        /// Error code from the server.
        code: i32,
    },
}
