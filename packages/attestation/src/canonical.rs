//! Canonical serializations of attestation data
//!
//! The byte sequence originally signed is not dictated by a single wire
//! format, so verification probes a fixed, ordered list of candidate
//! renderings. The list and its order are part of the verification
//! contract: two independent verifiers must accept and reject the same
//! inputs identically.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::payload::AttestationData;

/// One deterministic byte-rendering of [`AttestationData`].
///
/// Probed in the order of [`CanonicalForm::ALL`]. `JsonNatural`,
/// `JsonExplicitOrder` and `JsonCompact` render identically under this
/// crate's serializer; they stay distinct entries so the probe order is
/// stable against signers whose serializer's natural field order is not
/// the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::module_name_repetitions)]
pub enum CanonicalForm {
    /// Whole-object JSON in natural (declaration) field order
    JsonNatural,
    /// JSON with the literal field order `name`, `identityNumber`,
    /// `publicKey`
    JsonExplicitOrder,
    /// Compact JSON with no inserted whitespace
    JsonCompact,
    /// Field values concatenated with no separator
    Concatenated,
    /// Field values joined with `|`
    PipeSeparated,
    /// JSON with field names sorted lexicographically
    JsonSortedFields,
}

impl CanonicalForm {
    /// All candidate forms in their fixed probe order.
    pub const ALL: [Self; 6] = [
        Self::JsonNatural,
        Self::JsonExplicitOrder,
        Self::JsonCompact,
        Self::Concatenated,
        Self::PipeSeparated,
        Self::JsonSortedFields,
    ];

    /// One-based position in the probe order, for diagnostics.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::JsonNatural => 1,
            Self::JsonExplicitOrder => 2,
            Self::JsonCompact => 3,
            Self::Concatenated => 4,
            Self::PipeSeparated => 5,
            Self::JsonSortedFields => 6,
        }
    }

    /// Render the data under this form. The signed message is the UTF-8
    /// bytes of the returned string.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails; the verifier
    /// treats that as "this candidate did not match" and keeps probing.
    pub fn render(self, data: &AttestationData) -> Result<String, serde_json::Error> {
        match self {
            Self::JsonNatural | Self::JsonCompact => serde_json::to_string(data),
            Self::JsonExplicitOrder => serde_json::to_string(&ExplicitOrder {
                name: &data.name,
                identity_number: &data.identity_number,
                public_key: &data.public_key,
            }),
            Self::Concatenated => Ok(format!(
                "{}{}{}",
                data.name, data.identity_number, data.public_key
            )),
            Self::PipeSeparated => Ok(format!(
                "{}|{}|{}",
                data.name, data.identity_number, data.public_key
            )),
            Self::JsonSortedFields => {
                let sorted: BTreeMap<&str, &str> = [
                    ("name", data.name.as_str()),
                    ("identityNumber", data.identity_number.as_str()),
                    ("publicKey", data.public_key.as_str()),
                ]
                .into_iter()
                .collect();
                serde_json::to_string(&sorted)
            }
        }
    }
}

/// Field-by-field mirror of [`AttestationData`] pinning the literal
/// field order of the explicit-order candidate.
#[derive(Serialize)]
struct ExplicitOrder<'a> {
    name: &'a str,
    #[serde(rename = "identityNumber")]
    identity_number: &'a str,
    #[serde(rename = "publicKey")]
    public_key: &'a str,
}
