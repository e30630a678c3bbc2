//! Scanned attestation payload types

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalForm;

/// The identity fields an attestation binds to a public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationData {
    /// Subject's display name
    pub name: String,
    /// National identity/document number, treated as an opaque string
    #[serde(rename = "identityNumber")]
    pub identity_number: String,
    /// Strkey text form of the attesting ed25519 public key
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

/// The top-level scanned object: identity data plus a detached
/// signature produced off-system.
///
/// Constructed transiently per scan and never persisted; each
/// verification attempt owns its own payload and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct AttestationPayload {
    /// The claimed identity fields
    pub data: AttestationData,
    /// Base64 text of the 64-byte ed25519 signature over a canonical
    /// form of `data`
    pub signature: String,
}

/// A successfully verified scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAttestation {
    /// Identity data embedded in the payload
    pub data: AttestationData,
    /// The canonical serialization the signature matched
    pub form: CanonicalForm,
}
