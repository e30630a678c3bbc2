#![doc = "QR-borne vaccination-credential verification"]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

//! Verifies scanned credential payloads claiming "this patient's
//! vaccination record was attested by key K": structural validation of
//! the decoded QR text, then ed25519 verification of the attached
//! signature against the embedded ledger public key, probing a fixed
//! list of canonical serializations of the attested data.
//!
//! The caller owns camera capture and QR symbol decoding and hands this
//! crate the decoded text; every rejection is a typed, final outcome.

pub mod canonical;
pub mod error;
pub mod payload;
pub mod structure;
pub mod verify;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use canonical::CanonicalForm;
pub use error::AttestationError;
pub use payload::{AttestationData, AttestationPayload, VerifiedAttestation};
pub use structure::{parse_attestation_text, validate_structure};
pub use verify::{verify_scan, verify_signature};
