// src/auth/token.rs
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

const TOKEN_BYTES: usize = 32;

pub type TokenHash = [u8; 32];

/// A freshly minted session token: the raw value goes into the cookie,
/// only `hash` is persisted.
pub struct IssuedToken {
    pub raw: String,
    pub hash: TokenHash,
}

impl IssuedToken {
    pub fn issue() -> Self {
        Self::issue_with(&mut OsRng)
    }

    /// 32 random bytes, base64url without padding (43 cookie-safe chars).
    pub fn issue_with<R: RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        rng.fill_bytes(&mut bytes);

        let raw = URL_SAFE_NO_PAD.encode(bytes);
        let hash = hash_token(&raw);
        Self { raw, hash }
    }
}

pub fn hash_token(raw: &str) -> TokenHash {
    Sha256::digest(raw.as_bytes()).into()
}
