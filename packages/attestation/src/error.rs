//! Error taxonomy for attestation verification

use thiserror::Error;

/// Why a scanned payload was rejected.
///
/// A closed set, so callers pattern-match exhaustively instead of
/// sniffing message text. Every rejection is final; none is a retryable
/// state. [`AttestationError::user_message`] maps each kind to its
/// stable user-facing reason string.
#[derive(Error, Debug)]
pub enum AttestationError {
    /// Scanned text does not parse as a structured document
    #[error("scanned text is not a well-formed document")]
    MalformedDocument(#[source] serde_json::Error),

    /// Document parses but required fields are missing or mistyped
    #[error("payload does not have the shape of an attestation")]
    BadStructure,

    /// Embedded public key fails ledger key validation
    #[error("public key {key:?} rejected: {reason}")]
    BadKeyFormat {
        /// The offending key string, for diagnostics
        key: String,
        /// Why the key was rejected
        reason: String,
    },

    /// Signature field is not valid base64
    #[error("signature is not valid base64")]
    MalformedSignatureEncoding(#[source] base64::DecodeError),

    /// Every candidate serialization of the data was exhausted
    #[error("signature does not match any canonical form of the attested data")]
    NoMatchingSignature,
}

impl AttestationError {
    /// Stable, user-displayable reason string keyed by rejection kind.
    ///
    /// Never raw low-level error text; the `Display` and `source`
    /// chains carry the diagnostic detail instead.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MalformedDocument(_) => "QR code does not contain a readable credential",
            Self::BadStructure => "QR code is missing required credential fields",
            Self::BadKeyFormat { .. } => "credential carries an invalid public key",
            Self::MalformedSignatureEncoding(_) => "credential signature is not readable",
            Self::NoMatchingSignature => "credential was altered or signed by a different key",
        }
    }
}
