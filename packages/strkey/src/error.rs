//! Error types for strkey decoding

use thiserror::Error;

/// Reasons a strkey fails to decode. Fail-closed: every variant is a
/// hard rejection of the whole input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum StrkeyError {
    /// Input is not the fixed text length of an account key
    #[error("strkey has length {got}, expected 56 characters")]
    InvalidLength {
        /// Length of the rejected input in bytes
        got: usize,
    },

    /// Input contains a character outside the uppercase base32 alphabet
    #[error("strkey contains invalid base32 character {ch:?}")]
    InvalidChar {
        /// The offending character
        ch: char,
    },

    /// Version byte does not mark an ed25519 public key
    #[error("strkey version byte {got:#04x} is not an ed25519 public key")]
    WrongVersionByte {
        /// The decoded version byte
        got: u8,
    },

    /// Trailing CRC16 checksum does not match the payload
    #[error("strkey checksum does not match payload")]
    ChecksumMismatch,
}
