//! LINE webhook signature verification.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Verify the webhook signature.
///
/// LINE sends `base64(HMAC-SHA256(channel_secret, body))` in the
/// `X-Line-Signature` header.
pub fn verify_signature(body: &[u8], signature_header: &str, channel_secret: &str) -> bool {
    let expected = match STANDARD.decode(signature_header.trim()) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!("signature header is not valid base64");
            return false;
        }
    };

    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            tracing::warn!("failed to create HMAC");
            return false;
        }
    };

    mac.update(body);
    // verify_slice compares in constant time
    mac.verify_slice(&expected).is_ok()
}

/// Signature LINE would send for `body`.
///
/// Used by tests and local tooling to build signed webhook deliveries.
/// Returns `None` if the HMAC cannot be keyed.
pub fn sign(body: &[u8], channel_secret: &str) -> Option<String> {
    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            tracing::warn!("failed to create HMAC");
            return None;
        }
    };
    mac.update(body);
    Some(STANDARD.encode(mac.finalize().into_bytes()))
}
