//! Domain Services
//!
//! Pure token logic. A token never contains the secret, only a salt and a
//! MAC binding that salt to the secret under the server key.

use platform::crypto::{from_base64_url, hmac_sha256, random_bytes, to_base64_url, verify_hmac_sha256};

const SEPARATOR: char = '.';

/// Generate a fresh per-client secret (base64url)
pub fn generate_secret(len: usize) -> String {
    to_base64_url(&random_bytes(len))
}

/// Whether `secret` looks like one produced by [`generate_secret`]
pub fn is_well_formed_secret(secret: &str, len: usize) -> bool {
    from_base64_url(secret).is_ok_and(|bytes| bytes.len() == len)
}

fn token_message(secret: &str, salt: &str) -> Vec<u8> {
    format!("{secret}{SEPARATOR}{salt}").into_bytes()
}

/// Mint a token for `secret` with a fresh random salt
pub fn mint_token(signing_key: &[u8], secret: &str, salt_len: usize) -> String {
    let salt = to_base64_url(&random_bytes(salt_len));
    let mac = hmac_sha256(signing_key, &token_message(secret, &salt));
    format!("{salt}{SEPARATOR}{}", to_base64_url(&mac))
}

/// Check that `token` was minted for `secret` under `signing_key`
pub fn verify_token(signing_key: &[u8], secret: &str, token: &str) -> bool {
    let Some((salt, mac_b64)) = token.split_once(SEPARATOR) else {
        return false;
    };
    if salt.is_empty() {
        return false;
    }
    let Ok(mac) = from_base64_url(mac_b64) else {
        return false;
    };
    verify_hmac_sha256(signing_key, &token_message(secret, salt), &mac)
}
