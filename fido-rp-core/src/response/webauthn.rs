//! Credentials returned by `navigator.credentials.create` and `navigator.credentials.get`.

use fido_rp_proto::u2f::ClientResponse;
use fido_rp_proto::webauthn::{PublicKeyCredential, RegisterPublicKeyCredential};
use uuid::Uuid;

use super::{client_response, u2f_registration_signed_data};
use super::{AuthenticationCeremony, RegistrationCeremony};
use crate::client_data::{ClientData, ClientDataType};
use crate::crypto::{compute_sha256, constant_time_eq};
use crate::error::{FidoError, FidoResult};
use crate::keys::{AttestationCertificate, HasKeyHandle, KeyHandle, PublicKey};
use crate::wire::{AttestationObject, AuthenticatorData};

/// A well formed, fido-u2f attested, new credential.
#[derive(Debug, Clone)]
pub struct WebauthnRegisterResponse {
    client_data: ClientData,
    rp_id_hash: Vec<u8>,
    aaguid: Uuid,
    key_handle: KeyHandle,
    public_key: PublicKey,
    attestation_certificate: AttestationCertificate,
    signature: Vec<u8>,
}

impl WebauthnRegisterResponse {
    /// Validate the credential the browser returned.
    pub fn from_credential(reg: &RegisterPublicKeyCredential) -> FidoResult<Self> {
        let client_data = ClientData::from_webauthn_bytes(&reg.response.client_data_json.0)?;
        client_data.expect_type(ClientDataType::WebauthnCreate)?;

        let ao = AttestationObject::try_from(reg.response.attestation_object.0.as_slice())?;
        let stmt = ao.fido_u2f_statement()?;

        let ad = AuthenticatorData::try_from(ao.auth_data.as_slice())?;
        if !ad.user_present {
            return Err(FidoError::UserNotPresent);
        }

        let acd = ad
            .attested_credential_data
            .as_ref()
            .ok_or(FidoError::MissingAttestationCredentialData)?;

        if !constant_time_eq(acd.credential_id, &reg.raw_id.0) {
            return Err(FidoError::CredentialIdMismatch);
        }

        let public_key = PublicKey::try_from(&acd.credential_public_key)?;

        trace!(
            flags = ad.flags,
            user_verified = ad.user_verified,
            counter = ad.counter,
            aaguid = %acd.aaguid,
            "attested credential"
        );

        Ok(WebauthnRegisterResponse {
            rp_id_hash: ad.rp_id_hash.to_vec(),
            aaguid: acd.aaguid,
            key_handle: KeyHandle::from(acd.credential_id),
            public_key,
            attestation_certificate: AttestationCertificate::from(stmt.x5c),
            signature: stmt.sig.to_vec(),
            client_data,
        })
    }

    /// Validate what the client sent, which may be an error report instead of a credential.
    pub fn from_client_response(
        rsp: &ClientResponse<RegisterPublicKeyCredential>,
    ) -> FidoResult<Self> {
        client_response(rsp).and_then(Self::from_credential)
    }

    /// The authenticator model. U2F authenticators report all zeros.
    pub fn aaguid(&self) -> &Uuid {
        &self.aaguid
    }
}

impl HasKeyHandle for WebauthnRegisterResponse {
    fn key_handle(&self) -> &KeyHandle {
        &self.key_handle
    }
}

impl RegistrationCeremony for WebauthnRegisterResponse {
    fn client_data(&self) -> &ClientData {
        &self.client_data
    }

    // Both the authenticator and the browser must agree on the relying party.
    fn relying_party_matches(&self, rp_id_hash: &[u8; 32]) -> bool {
        let ad = constant_time_eq(&self.rp_id_hash, rp_id_hash);
        let cd = constant_time_eq(self.client_data.application_parameter(), rp_id_hash);
        ad & cd
    }

    fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    fn attestation_certificate(&self) -> &AttestationCertificate {
        &self.attestation_certificate
    }

    // The fido-u2f statement signs the U2F registration layout, rebuilt from authenticator
    // data fields.
    fn signed_data(&self) -> Vec<u8> {
        u2f_registration_signed_data(
            &self.rp_id_hash,
            &self.client_data.challenge_parameter(),
            self.key_handle.as_bytes(),
            self.public_key.as_ref(),
        )
    }

    fn signature(&self) -> &[u8] {
        &self.signature
    }
}

/// A well formed assertion.
#[derive(Debug, Clone)]
pub struct WebauthnSignResponse {
    client_data: ClientData,
    key_handle: KeyHandle,
    authenticator_data: Vec<u8>,
    rp_id_hash: Vec<u8>,
    user_verified: bool,
    counter: u32,
    signature: Vec<u8>,
}

impl WebauthnSignResponse {
    /// Validate the assertion the browser returned.
    pub fn from_credential(cred: &PublicKeyCredential) -> FidoResult<Self> {
        let key_handle = cred.get_credential_id();
        if key_handle.is_empty() {
            return Err(FidoError::EmptyKeyHandle);
        }

        let client_data = ClientData::from_webauthn_bytes(&cred.response.client_data_json.0)?;
        client_data.expect_type(ClientDataType::WebauthnGet)?;

        let ad = AuthenticatorData::try_from(cred.response.authenticator_data.0.as_slice())?;
        if !ad.user_present {
            return Err(FidoError::UserNotPresent);
        }

        Ok(WebauthnSignResponse {
            client_data,
            key_handle: KeyHandle::from(key_handle),
            authenticator_data: ad.raw.to_vec(),
            rp_id_hash: ad.rp_id_hash.to_vec(),
            user_verified: ad.user_verified,
            counter: ad.counter,
            signature: cred.response.signature.0.clone(),
        })
    }

    /// Validate what the client sent, which may be an error report instead of a credential.
    pub fn from_client_response(rsp: &ClientResponse<PublicKeyCredential>) -> FidoResult<Self> {
        client_response(rsp).and_then(Self::from_credential)
    }

    /// Whether the authenticator verified the user, for example with a PIN or biometric.
    pub fn user_verified(&self) -> bool {
        self.user_verified
    }
}

impl HasKeyHandle for WebauthnSignResponse {
    fn key_handle(&self) -> &KeyHandle {
        &self.key_handle
    }
}

impl AuthenticationCeremony for WebauthnSignResponse {
    fn client_data(&self) -> &ClientData {
        &self.client_data
    }

    fn relying_party_matches(&self, rp_id_hash: &[u8; 32]) -> bool {
        let ad = constant_time_eq(&self.rp_id_hash, rp_id_hash);
        let cd = constant_time_eq(self.client_data.application_parameter(), rp_id_hash);
        ad & cd
    }

    fn counter(&self) -> u32 {
        self.counter
    }

    // authenticatorData ‖ SHA-256(clientDataJSON)
    fn signed_data(&self) -> Vec<u8> {
        let mut data = self.authenticator_data.clone();
        data.extend_from_slice(&compute_sha256(self.client_data.as_bytes()));
        data
    }

    fn signature(&self) -> &[u8] {
        &self.signature
    }
}
