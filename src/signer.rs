//! HMAC-SHA256 request signing for the xfyun WebSocket endpoint.
//!
//! The vendor authenticates the connection URL itself: a canonical string
//! built from the host, an RFC 1123 date and the request line is signed
//! with the API secret, and the result is carried in `host`, `date` and
//! `authorization` query parameters.

use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

use crate::error::Error;

type HmacSha256 = Hmac<Sha256>;

/// Returns the current UTC time formatted for the `date` signing field,
/// e.g. `Mon, 02 Jan 2006 15:04:05 GMT`.
pub fn http_date() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Builds the signed connection URL for the given endpoint and credentials.
///
/// Deterministic in its inputs; callers pass the current [`http_date`] as
/// `date`. Fails fast if the endpoint does not parse or has no host.
pub fn sign_url(endpoint: &str, api_key: &str, api_secret: &str, date: &str) -> Result<Url, Error> {
    let mut url =
        Url::parse(endpoint).map_err(|e| Error::InvalidEndpoint(format!("{endpoint}: {e}")))?;

    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => return Err(Error::InvalidEndpoint(format!("{endpoint}: no host"))),
    };

    // Canonical signing string: three lines, no trailing newline.
    let signing_input = format!("host: {host}\ndate: {date}\nGET {} HTTP/1.1", url.path());

    let mut mac = HmacSha256::new_from_slice(api_secret.as_bytes())
        .map_err(|e| Error::Signing(format!("invalid secret: {e}")))?;
    mac.update(signing_input.as_bytes());
    let signature = base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes());

    let authorization = format!(
        "api_key=\"{api_key}\", algorithm=\"hmac-sha256\", \
         headers=\"host date request-line\", signature=\"{signature}\""
    );
    let authorization = base64::engine::general_purpose::STANDARD.encode(authorization.as_bytes());

    url.query_pairs_mut()
        .append_pair("host", &host)
        .append_pair("date", date)
        .append_pair("authorization", &authorization);

    Ok(url)
}
