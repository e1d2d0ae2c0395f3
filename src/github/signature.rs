// Start of file: /src/github/signature.rs

/*
    * X-Hub-Signature-256 handling. GitHub signs the raw request body with
    * HMAC SHA-256 and sends the hex digest prefixed with "sha256=".
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_PREFIX: &str = "sha256=";

/// Computes the signature header value GitHub would send for `body`.
pub fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac: HmacSha256 = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(body);

    format!("{SIGNATURE_PREFIX}{}", hex::encode(mac.finalize().into_bytes()))
}

/// Constant-time check of a delivery signature against the shared secret.
/// Anything malformed (wrong prefix, bad hex) simply fails verification.
pub fn verify(secret: &str, body: &[u8], header: &str) -> bool {
    let Some(hex_digest) = header.strip_prefix(SIGNATURE_PREFIX) else {
        return false;
    };

    let Ok(expected) = hex::decode(hex_digest) else {
        return false;
    };

    let mut mac: HmacSha256 = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(body);

    mac.verify_slice(&expected).is_ok()
}


// End of file: /src/github/signature.rs
