//! Test fixtures for attestation verification

pub use fixtures::*;

#[allow(clippy::missing_panics_doc)]
mod fixtures {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use ed25519_dalek::{Signer as _, SigningKey};

    use crate::canonical::CanonicalForm;
    use crate::payload::{AttestationData, AttestationPayload};

    /// Deterministic fixture signer.
    #[must_use]
    pub fn signer() -> SigningKey {
        SigningKey::from_bytes(&[0xCD; 32])
    }

    /// Identity data bound to the fixture signer's public key.
    #[must_use]
    pub fn sample_data() -> AttestationData {
        let public = signer().verifying_key();
        AttestationData {
            name: "João Silva".to_owned(),
            identity_number: "12345678901".to_owned(),
            public_key: vaxpass_strkey::encode_ed25519_public_key(public.as_bytes()),
        }
    }

    /// A payload whose signature was produced over the given canonical
    /// form of [`sample_data`].
    #[must_use]
    pub fn signed_payload(form: CanonicalForm) -> AttestationPayload {
        let data = sample_data();
        let message = form.render(&data).expect("fixture data renders");
        let signature = signer().sign(message.as_bytes());
        AttestationPayload {
            data,
            signature: BASE64.encode(signature.to_bytes()),
        }
    }
}
