//! Crypto transport for attendee collections
//!
//! The producer serializes a collection to JSON and encrypts it under a key
//! derived from a pre-shared passphrase; the consumer reverses the process.
//!
//! # Wire format
//!
//! The envelope payload is standard Base64 over:
//!
//! ```text
//! "RSTR1" (5 bytes) | salt (16 bytes) | nonce (12 bytes) | AES-256-GCM ciphertext + tag
//! ```
//!
//! The key is `SHA-256(salt || passphrase)`. A fresh salt and nonce are drawn
//! for every encryption, so two envelopes of the same collection never match.
//!
//! # Fail-open decryption
//!
//! [`decrypt`] never returns an error: malformed payloads, a wrong passphrase,
//! or invalid JSON all yield an empty collection and an `error!` log line.
//! Callers that need to tell "no records" from "could not decrypt" use
//! [`decrypt_with_status`] instead.

use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, error};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Result, RosterError};
use crate::types::{validate_collection, Attendee, Envelope};

/// Environment variable holding the shared passphrase
pub const SHARED_SECRET_ENV: &str = "ROSTER_SHARED_SECRET";

/// Format marker at the start of every decoded payload
pub const MAGIC: &[u8; 5] = b"RSTR1";

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;

const HEADER_LEN: usize = MAGIC.len() + SALT_LEN + NONCE_LEN;

/// Pre-shared passphrase known to both producer and consumer.
///
/// The passphrase is wiped from memory on drop and never printed by `Debug`.
#[derive(Clone)]
pub struct SharedSecret(Zeroizing<String>);

impl SharedSecret {
    /// Wrap a passphrase; empty or whitespace-only passphrases are rejected
    pub fn new(passphrase: impl Into<String>) -> Result<Self> {
        let passphrase = Zeroizing::new(passphrase.into());
        if passphrase.trim().is_empty() {
            return Err(RosterError::Config(format!(
                "{} must not be empty",
                SHARED_SECRET_ENV
            )));
        }
        Ok(Self(passphrase))
    }

    /// Read the passphrase from `ROSTER_SHARED_SECRET`
    pub fn from_env() -> Result<Self> {
        let value = std::env::var(SHARED_SECRET_ENV).map_err(|_| {
            RosterError::Config(format!(
                "{} is not set; both server and client need the same value",
                SHARED_SECRET_ENV
            ))
        })?;
        Self::new(value)
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    fn cipher(&self, salt: &[u8]) -> Aes256Gcm {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(self.as_bytes());
        let mut key: [u8; 32] = hasher.finalize().into();
        let cipher = Aes256Gcm::new(&key.into());
        key.zeroize();
        cipher
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

/// Why a payload could not be turned back into a collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecryptFailure {
    #[error("payload is not valid base64")]
    InvalidEncoding,

    #[error("payload is too short ({0} bytes)")]
    Truncated(usize),

    #[error("payload has an unknown format marker")]
    UnknownFormat,

    #[error("authentication failed (wrong passphrase or tampered payload)")]
    Authentication,

    #[error("plaintext is not valid UTF-8")]
    InvalidUtf8,

    #[error("plaintext is not an attendee array: {0}")]
    Malformed(String),

    #[error("decrypted record violates an invariant: {0}")]
    InvalidRecord(String),
}

impl From<DecryptFailure> for RosterError {
    fn from(failure: DecryptFailure) -> Self {
        RosterError::Decryption(failure.to_string())
    }
}

/// Outcome signal accompanying a fail-open decryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecryptStatus {
    Decrypted,
    Failed(DecryptFailure),
}

/// Result of [`decrypt_with_status`]: the (possibly empty) collection and
/// whether it came from a successful decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptOutcome {
    pub attendees: Vec<Attendee>,
    pub status: DecryptStatus,
}

impl DecryptOutcome {
    pub fn is_decrypted(&self) -> bool {
        self.status == DecryptStatus::Decrypted
    }

    pub fn failure(&self) -> Option<&DecryptFailure> {
        match &self.status {
            DecryptStatus::Decrypted => None,
            DecryptStatus::Failed(failure) => Some(failure),
        }
    }
}

/// Serialize and encrypt a collection into a transport envelope
pub fn encrypt(attendees: &[Attendee], secret: &SharedSecret) -> Result<Envelope> {
    let plaintext = Zeroizing::new(serde_json::to_vec(attendees)?);

    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = secret
        .cipher(&salt)
        .encrypt(&nonce, plaintext.as_slice())
        .map_err(|e| RosterError::Encryption(format!("AES-256-GCM encryption failed: {}", e)))?;

    let mut blob = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    blob.extend_from_slice(MAGIC);
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    debug!(
        records = attendees.len(),
        plaintext_bytes = plaintext.len(),
        payload_bytes = blob.len(),
        "Encrypted attendee collection"
    );

    Ok(Envelope::new(STANDARD.encode(blob)))
}

/// Decrypt and deserialize a payload, reporting the precise failure
pub fn try_decrypt(
    payload: &str,
    secret: &SharedSecret,
) -> std::result::Result<Vec<Attendee>, DecryptFailure> {
    let blob = STANDARD
        .decode(payload.trim())
        .map_err(|_| DecryptFailure::InvalidEncoding)?;

    if blob.len() < HEADER_LEN + TAG_LEN {
        return Err(DecryptFailure::Truncated(blob.len()));
    }

    let (magic, rest) = blob.split_at(MAGIC.len());
    if magic != MAGIC {
        return Err(DecryptFailure::UnknownFormat);
    }
    let (salt, rest) = rest.split_at(SALT_LEN);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

    let plaintext = Zeroizing::new(
        secret
            .cipher(salt)
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| DecryptFailure::Authentication)?,
    );

    let text = std::str::from_utf8(&plaintext).map_err(|_| DecryptFailure::InvalidUtf8)?;
    let attendees: Vec<Attendee> =
        serde_json::from_str(text).map_err(|e| DecryptFailure::Malformed(e.to_string()))?;

    validate_collection(&attendees).map_err(|e| DecryptFailure::InvalidRecord(e.to_string()))?;

    Ok(attendees)
}

/// Fail-open decryption with an explicit status signal
pub fn decrypt_with_status(payload: &str, secret: &SharedSecret) -> DecryptOutcome {
    match try_decrypt(payload, secret) {
        Ok(attendees) => {
            debug!(records = attendees.len(), "Decrypted attendee collection");
            DecryptOutcome {
                attendees,
                status: DecryptStatus::Decrypted,
            }
        },
        Err(failure) => {
            error!(error = %failure, "Decryption failed");
            DecryptOutcome {
                attendees: Vec::new(),
                status: DecryptStatus::Failed(failure),
            }
        },
    }
}

/// Fail-open decryption: any failure yields an empty collection
pub fn decrypt(payload: &str, secret: &SharedSecret) -> Vec<Attendee> {
    decrypt_with_status(payload, secret).attendees
}
