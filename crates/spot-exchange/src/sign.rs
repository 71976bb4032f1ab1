//! HMAC-SHA256 request signing for Binance signed endpoints.
//!
//! Binance authenticates `USER_DATA` endpoints by requiring an HMAC-SHA256
//! signature over the exact query string (parameters in the order they are
//! sent, including `timestamp` and `recvWindow`), hex-encoded and appended
//! as a final `signature` parameter. The key is the account's API secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign a canonical query string with the API secret.
///
/// The query must already contain `timestamp` (and `recvWindow` if used);
/// the signature covers the bytes exactly as they will appear in the URL.
pub fn sign_query(query: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(query.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
