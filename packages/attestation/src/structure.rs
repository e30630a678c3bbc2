//! Structural validation of scanned payloads
//!
//! Shape is checked before any cryptographic work runs: a parse failure
//! and a structural failure are distinct, reportable rejections, and
//! neither is ever bundled with a crypto error.

use serde_json::{Map, Value};
use tracing::debug;

use crate::{error::AttestationError, payload::AttestationPayload};

/// Whether a parsed document has the exact shape of an attestation
/// payload: an object with a `data` object holding string `name`,
/// `identityNumber` and `publicKey` fields, and a string top-level
/// `signature`.
///
/// A total pure predicate over arbitrary documents; null, arrays and
/// primitives are all `false`, with no partial acceptance. Per-field
/// diagnostics are emitted at debug level and never influence the
/// result.
#[must_use]
pub fn validate_structure(parsed: &Value) -> bool {
    let data = parsed.get("data").and_then(Value::as_object);
    let has_name = field_is_string(data, "name");
    let has_identity_number = field_is_string(data, "identityNumber");
    let has_public_key = field_is_string(data, "publicKey");
    let has_signature = parsed.get("signature").is_some_and(Value::is_string);

    let valid = has_name && has_identity_number && has_public_key && has_signature;
    debug!(
        has_data = data.is_some(),
        has_name,
        has_identity_number,
        has_public_key,
        has_signature,
        valid,
        "structural validation"
    );
    valid
}

fn field_is_string(data: Option<&Map<String, Value>>, field: &str) -> bool {
    data.and_then(|object| object.get(field))
        .is_some_and(Value::is_string)
}

/// Parse raw scanned text into a typed payload.
///
/// # Errors
/// Returns an error if:
/// - The text is not well-formed JSON (`MalformedDocument`)
/// - The document lacks the required shape (`BadStructure`)
pub fn parse_attestation_text(raw: &str) -> Result<AttestationPayload, AttestationError> {
    let parsed: Value =
        serde_json::from_str(raw).map_err(AttestationError::MalformedDocument)?;
    if !validate_structure(&parsed) {
        return Err(AttestationError::BadStructure);
    }
    // The shape was just checked, so typed deserialization can only
    // restate a structural failure.
    serde_json::from_value(parsed).map_err(|_| AttestationError::BadStructure)
}
