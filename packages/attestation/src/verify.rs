//! Ed25519 signature verification over canonical forms

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ed25519_dalek::{Signature, Verifier as _, VerifyingKey};
use tracing::{debug, trace};

use crate::{
    canonical::CanonicalForm,
    error::AttestationError,
    payload::{AttestationPayload, VerifiedAttestation},
    structure,
};

/// Decide whether the payload's signature is a valid ed25519 signature
/// over some canonical form of its data, produced by the private
/// counterpart of the key embedded in the data.
///
/// The key format is checked exactly once, before any probing, and the
/// signature is base64-decoded once, up front. Candidates are then
/// probed in the fixed order of [`CanonicalForm::ALL`]; the first match
/// wins and a per-candidate verification failure continues the loop.
///
/// Pure per call: no shared state, no I/O, identical payloads yield
/// identical outcomes.
///
/// # Errors
/// Returns an error if:
/// - The embedded key fails strkey validation or its bytes are not a
///   decodable curve point (`BadKeyFormat`)
/// - The signature is not valid base64 (`MalformedSignatureEncoding`)
/// - Every candidate serialization is exhausted (`NoMatchingSignature`)
pub fn verify_signature(
    payload: &AttestationPayload,
) -> Result<CanonicalForm, AttestationError> {
    let key_bytes = vaxpass_strkey::decode_ed25519_public_key(&payload.data.public_key)
        .map_err(|err| AttestationError::BadKeyFormat {
            key: payload.data.public_key.clone(),
            reason: err.to_string(),
        })?;
    let verifying_key =
        VerifyingKey::from_bytes(&key_bytes).map_err(|_| AttestationError::BadKeyFormat {
            key: payload.data.public_key.clone(),
            reason: "key bytes are not a decodable curve point".to_owned(),
        })?;

    let signature_bytes = BASE64
        .decode(&payload.signature)
        .map_err(AttestationError::MalformedSignatureEncoding)?;
    let Ok(signature) = Signature::from_slice(&signature_bytes) else {
        // A signature of the wrong length fails every candidate the
        // same way, so probing is pointless.
        debug!(len = signature_bytes.len(), "signature has invalid length");
        return Err(AttestationError::NoMatchingSignature);
    };

    for form in CanonicalForm::ALL {
        let Ok(message) = form.render(&payload.data) else {
            trace!(?form, "candidate failed to render, skipping");
            continue;
        };
        if verifying_key.verify(message.as_bytes(), &signature).is_ok() {
            debug!(?form, candidate = form.index(), "signature matched");
            return Ok(form);
        }
        trace!(?form, candidate = form.index(), "candidate did not match");
    }

    Err(AttestationError::NoMatchingSignature)
}

/// Parse and verify raw scanned text in one call.
///
/// The scan loop that owns camera capture and QR symbol decoding hands
/// this the decoded text; on success it receives the embedded identity
/// data and the canonical form that matched.
///
/// # Errors
/// Returns any [`AttestationError`]: parse and structure rejections
/// from [`structure::parse_attestation_text`], key and signature
/// rejections from [`verify_signature`].
pub fn verify_scan(raw: &str) -> Result<VerifiedAttestation, AttestationError> {
    let payload = structure::parse_attestation_text(raw)?;
    let form = verify_signature(&payload)?;
    Ok(VerifiedAttestation {
        data: payload.data,
        form,
    })
}
