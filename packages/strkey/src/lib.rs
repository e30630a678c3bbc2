#![doc = "Strkey codec for the ledger's ed25519 public account keys"]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

//! A strkey is the ledger ecosystem's human-readable rendering of key
//! material: a one-byte version tag, the raw key, and a CRC16-XMODEM
//! checksum, all base32-encoded without padding. Ed25519 public account
//! keys carry version byte `6 << 3` and therefore always start with `G`
//! and span exactly 56 characters.
//!
//! Decoding is fail-closed: any length, alphabet, version, or checksum
//! violation is a distinct [`StrkeyError`], never a silent mismatch.

mod base32;
mod crc;
mod error;

pub use error::StrkeyError;

/// Length of a raw ed25519 public key in bytes.
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;

/// Length of the base32 text form of an ed25519 public key strkey.
pub const ENCODED_LEN: usize = 56;

/// Version byte for ed25519 public account keys (`G` prefix).
const VERSION_ED25519_PUBLIC: u8 = 6 << 3;

/// Version byte + raw key, the portion covered by the checksum.
const PAYLOAD_LEN: usize = 1 + ED25519_PUBLIC_KEY_LEN;

/// Decode an ed25519 public key from its strkey text form.
///
/// # Errors
/// Returns an error if:
/// - The input is not exactly [`ENCODED_LEN`] characters
/// - The input contains a character outside the strict uppercase
///   base32 alphabet (`A-Z`, `2-7`), including padding or lowercase
/// - The version byte does not mark an ed25519 public key
/// - The trailing CRC16 checksum does not match the payload
pub fn decode_ed25519_public_key(
    input: &str,
) -> Result<[u8; ED25519_PUBLIC_KEY_LEN], StrkeyError> {
    if input.len() != ENCODED_LEN {
        return Err(StrkeyError::InvalidLength { got: input.len() });
    }

    // 56 base32 characters decode to exactly 35 bytes, no leftover bits.
    let decoded = base32::decode(input)?;

    if decoded[0] != VERSION_ED25519_PUBLIC {
        return Err(StrkeyError::WrongVersionByte { got: decoded[0] });
    }

    let (payload, checksum) = decoded.split_at(PAYLOAD_LEN);
    let expected = crc::checksum(payload);
    let got = u16::from_le_bytes([checksum[0], checksum[1]]);
    if got != expected {
        return Err(StrkeyError::ChecksumMismatch);
    }

    let mut key = [0u8; ED25519_PUBLIC_KEY_LEN];
    key.copy_from_slice(&payload[1..]);
    Ok(key)
}

/// Encode raw ed25519 public key bytes into strkey text form.
#[must_use]
pub fn encode_ed25519_public_key(key: &[u8; ED25519_PUBLIC_KEY_LEN]) -> String {
    let mut raw = Vec::with_capacity(PAYLOAD_LEN + 2);
    raw.push(VERSION_ED25519_PUBLIC);
    raw.extend_from_slice(key);
    let checksum = crc::checksum(&raw).to_le_bytes();
    raw.extend_from_slice(&checksum);
    base32::encode(&raw)
}

/// Whether the input is a well-formed ed25519 public key strkey.
#[must_use]
pub fn is_valid_ed25519_public_key(input: &str) -> bool {
    decode_ed25519_public_key(input).is_ok()
}
