//! End-to-end scan flow: decoded QR text in, verified identity data or
//! a typed rejection out.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ed25519_dalek::{Signer as _, SigningKey};
use serde_json::json;
use vaxpass_attestation::{
    verify_scan, AttestationError, CanonicalForm, VerifiedAttestation,
};

fn scan_signer() -> SigningKey {
    SigningKey::from_bytes(&[0x1F; 32])
}

fn patient_public_key() -> String {
    vaxpass_strkey::encode_ed25519_public_key(scan_signer().verifying_key().as_bytes())
}

/// Raw QR text carrying a signature over the given canonical form.
fn scanned_text(form: CanonicalForm) -> String {
    let data = vaxpass_attestation::AttestationData {
        name: "João Silva".to_owned(),
        identity_number: "12345678901".to_owned(),
        public_key: patient_public_key(),
    };
    let message = form.render(&data).expect("must render");
    let signature = scan_signer().sign(message.as_bytes());
    json!({
        "data": {
            "name": data.name,
            "identityNumber": data.identity_number,
            "publicKey": data.public_key,
        },
        "signature": BASE64.encode(signature.to_bytes()),
    })
    .to_string()
}

#[test]
fn accepts_pipe_separated_credential_as_fifth_candidate() {
    let raw = scanned_text(CanonicalForm::PipeSeparated);
    let VerifiedAttestation { data, form } = verify_scan(&raw).expect("must accept");

    assert_eq!(data.name, "João Silva");
    assert_eq!(data.identity_number, "12345678901");
    assert_eq!(data.public_key, patient_public_key());
    assert_eq!(form, CanonicalForm::PipeSeparated);
    assert_eq!(form.index(), 5);
}

#[test]
fn accepts_credentials_signed_over_every_canonical_form() {
    for signed_form in CanonicalForm::ALL {
        let raw = scanned_text(signed_form);
        let verified = verify_scan(&raw).expect("must accept");
        assert_eq!(
            verified.form.render(&verified.data).expect("must render"),
            signed_form.render(&verified.data).expect("must render"),
        );
    }
}

#[test]
fn rejects_unreadable_qr_text_before_any_crypto() {
    let err = verify_scan("%%% not a credential %%%").expect_err("must reject");
    assert!(matches!(err, AttestationError::MalformedDocument(_)));
    assert_eq!(
        err.user_message(),
        "QR code does not contain a readable credential"
    );
}

#[test]
fn rejects_incomplete_credential_before_any_crypto() {
    let raw = json!({"data": {"name": "x"}, "signature": "c2ln"}).to_string();
    let err = verify_scan(&raw).expect_err("must reject");
    assert!(matches!(err, AttestationError::BadStructure));
    assert_eq!(
        err.user_message(),
        "QR code is missing required credential fields"
    );
}

#[test]
fn rejects_credential_with_corrupted_key_checksum() {
    let raw = scanned_text(CanonicalForm::PipeSeparated);
    let key = patient_public_key();
    let mut corrupted_key = key.clone();
    let last = corrupted_key.pop().expect("non-empty");
    corrupted_key.push(if last == 'A' { 'B' } else { 'A' });
    let raw = raw.replace(&key, &corrupted_key);

    let err = verify_scan(&raw).expect_err("must reject");
    assert!(matches!(err, AttestationError::BadKeyFormat { .. }));
    assert_eq!(err.user_message(), "credential carries an invalid public key");
}

#[test]
fn rejects_credential_with_non_base64_signature() {
    let raw = json!({
        "data": {
            "name": "João Silva",
            "identityNumber": "12345678901",
            "publicKey": patient_public_key(),
        },
        "signature": "not-base64!!",
    })
    .to_string();

    let err = verify_scan(&raw).expect_err("must reject");
    assert!(matches!(err, AttestationError::MalformedSignatureEncoding(_)));
    assert_eq!(err.user_message(), "credential signature is not readable");
}

#[test]
fn rejects_tampered_identity_fields() {
    let raw = scanned_text(CanonicalForm::PipeSeparated);
    let tampered = raw.replace("12345678901", "10987654321");

    let err = verify_scan(&tampered).expect_err("must reject");
    assert!(matches!(err, AttestationError::NoMatchingSignature));
    assert_eq!(
        err.user_message(),
        "credential was altered or signed by a different key"
    );
}

#[test]
fn scanning_the_same_credential_twice_is_identical() {
    let raw = scanned_text(CanonicalForm::Concatenated);
    let first = verify_scan(&raw).expect("must accept");
    let second = verify_scan(&raw).expect("must accept");
    assert_eq!(first, second);
}
