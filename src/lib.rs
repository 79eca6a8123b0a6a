//! Rust client library for the iFlytek (xfyun) streaming Text-to-Speech WebSocket API.
//!
//! The vendor authenticates the connection URL itself: an HMAC-SHA256
//! signature over the host, an RFC 1123 date and the request line is
//! carried in query parameters. One connection serves exactly one synthesis
//! request; audio arrives as base64-encoded fragments that are accumulated
//! until the server marks the stream complete.
//!
//! # Example
//!
//! ```no_run
//! use xfyun_tts::{Business, TtsClient, TtsConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), xfyun_tts::Error> {
//!     let config = TtsConfig::new(
//!         std::env::var("XFYUN_APP_ID").expect("XFYUN_APP_ID not set"),
//!         std::env::var("XFYUN_API_KEY").expect("XFYUN_API_KEY not set"),
//!         std::env::var("XFYUN_API_SECRET").expect("XFYUN_API_SECRET not set"),
//!     );
//!
//!     let client = TtsClient::new(config);
//!     let audio = client
//!         .synthesize(&Business::new(xfyun_tts::DEFAULT_VOICE), "Hello, world!")
//!         .await?;
//!
//!     println!("Received {} bytes of PCM audio", audio.len());
//!     Ok(())
//! }
//! ```

mod error;
mod messages;
mod signer;
mod tts;
mod ws;

pub use error::Error;
pub use messages::{
    Business, Common, RequestData, ResponseData, TtsRequest, TtsResponse, STATUS_LAST_FRAME,
};
pub use signer::{http_date, sign_url};
pub use tts::{TtsClient, TtsConfig};

/// Default TTS WebSocket endpoint.
pub const TTS_ENDPOINT: &str = "wss://tts-api.xfyun.cn/v2/tts";

/// Default voice for TTS.
pub const DEFAULT_VOICE: &str = "xiaoyan";
