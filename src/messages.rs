//! Message types for the xfyun TTS WebSocket protocol.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Status marker for the final fragment of a stream.
///
/// On the request side the vendor protocol uses the same value to mean
/// "whole text delivered in one shot".
pub const STATUS_LAST_FRAME: i32 = 2;

// ============================================================================
// Request
// ============================================================================

/// Common request section carrying the application identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Common {
    /// Application ID issued with the API credentials.
    pub app_id: String,
}

/// Voice and audio parameters for a synthesis request.
///
/// Field values are vendor-defined enums; unlisted values are rejected by
/// the server, not validated client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    /// Engine variant: `aisound`, `intp65`, `intp65_en`, `mtts`, `xtts`.
    pub ent: String,

    /// Audio codec: `raw` (uncompressed PCM), `speex;N`, `speex-wb;N`,
    /// `speex-org-nb;N`, `speex-org-wb;N` with compression level N.
    pub aue: String,

    /// Sample rate: `audio/L16;rate=8000` or `audio/L16;rate=16000`.
    pub auf: String,

    /// Voice name.
    pub vcn: String,

    /// Speed, 0-100.
    pub speed: i32,

    /// Volume, 0-100.
    pub volume: i32,

    /// Pitch, 0-100.
    pub pitch: i32,

    /// Background music: 0 = none, 1 = on.
    pub bgs: i32,

    /// Text encoding: `UTF8`, `GB2312`, `GBK`, `BIG5`, `UNICODE`, `GB18030`.
    pub tte: String,

    /// English reading mode: "0" = auto, "1" = spell out, "2" = auto with
    /// letter fallback.
    pub reg: String,

    /// Read out punctuation: "0" = no, "1" = yes.
    pub ram: String,

    /// Digit reading mode: "0" = auto, "1" = numeric value, "2" = digit
    /// string, "3" = string preferred.
    pub rdn: String,
}

impl Business {
    /// Creates the default parameter preset for the given voice: `intp65`
    /// engine, raw 16 kHz PCM, UTF-8 text, mid speed/volume/pitch.
    pub fn new(vcn: impl Into<String>) -> Self {
        Self {
            ent: "intp65".to_string(),
            aue: "raw".to_string(),
            auf: "audio/L16;rate=16000".to_string(),
            vcn: vcn.into(),
            speed: 50,
            volume: 50,
            pitch: 50,
            bgs: 0,
            tte: "UTF8".to_string(),
            reg: "0".to_string(),
            ram: "0".to_string(),
            rdn: "0".to_string(),
        }
    }
}

/// Text payload section of a synthesis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestData {
    /// Base64-encoded text to synthesize.
    pub text: String,
    /// Always [`STATUS_LAST_FRAME`]: the whole text is sent at once.
    pub status: i32,
}

/// A complete synthesis request, the single outbound message of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsRequest {
    /// Common section.
    pub common: Common,
    /// Voice and audio parameters.
    pub business: Business,
    /// Text payload.
    pub data: RequestData,
}

impl TtsRequest {
    /// Creates a request for the given application, parameters and plain
    /// text. The text is base64-encoded as the protocol requires.
    pub fn new(app_id: impl Into<String>, business: Business, text: &str) -> Self {
        Self {
            common: Common {
                app_id: app_id.into(),
            },
            business,
            data: RequestData {
                text: base64::engine::general_purpose::STANDARD.encode(text.as_bytes()),
                status: STATUS_LAST_FRAME,
            },
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Audio payload section of a server frame.
///
/// Error frames omit this section, so every field defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseData {
    /// Base64-encoded audio fragment.
    #[serde(default)]
    pub audio: String,
    /// Progress marker for the synthesized text.
    #[serde(default)]
    pub ced: String,
    /// Fragment status; [`STATUS_LAST_FRAME`] marks the final fragment.
    #[serde(default)]
    pub status: i32,
}

/// One inbound server frame: a result code plus an audio fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsResponse {
    /// Result code; 0 is success, anything else is a vendor error.
    pub code: i32,
    /// Vendor message accompanying a non-zero code.
    #[serde(default)]
    pub message: String,
    /// Session ID assigned by the server.
    #[serde(default)]
    pub sid: String,
    /// Audio payload; absent on error frames.
    #[serde(default)]
    pub data: ResponseData,
}
