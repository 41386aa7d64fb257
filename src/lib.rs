pub mod error;
pub mod file_b64;
pub mod logger;
pub mod markdown;

use base64::{Engine as _, engine::general_purpose};

pub use error::Error;

/// Encode text as standard Base64 (padded, no line wrapping).
pub fn encode(plaintext: &str) -> String {
    general_purpose::STANDARD.encode(plaintext.as_bytes())
}

/// Decode a standard Base64 payload back to UTF-8 text.
pub fn decode(payload: &str) -> Result<String, Error> {
    let bytes = general_purpose::STANDARD.decode(payload.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
