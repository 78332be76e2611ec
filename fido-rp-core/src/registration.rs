use serde::{Deserialize, Serialize};

use crate::keys::{AttestationCertificate, HasKeyHandle, KeyHandle, PublicKey};

/// A registered credential. This is what the relying party persists for an account.
///
/// A registration is never modified in place. A successful authentication returns a new
/// registration carrying the updated counter, which replaces the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    key_handle: KeyHandle,
    public_key: PublicKey,
    attestation_certificate: AttestationCertificate,
    counter: u32,
}

impl Registration {
    /// Restore a registration from storage.
    pub fn new(
        key_handle: KeyHandle,
        public_key: PublicKey,
        attestation_certificate: AttestationCertificate,
        counter: u32,
    ) -> Self {
        Registration {
            key_handle,
            public_key,
            attestation_certificate,
            counter,
        }
    }

    /// The credential public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The certificate presented when the credential was registered.
    pub fn attestation_certificate(&self) -> &AttestationCertificate {
        &self.attestation_certificate
    }

    /// The last signature counter the authenticator reported.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub(crate) fn with_counter(&self, counter: u32) -> Self {
        Registration {
            counter,
            ..self.clone()
        }
    }
}

impl HasKeyHandle for Registration {
    fn key_handle(&self) -> &KeyHandle {
        &self.key_handle
    }
}
