//! Responses of the U2F JavaScript API.

use fido_rp_proto::u2f as proto;
use fido_rp_proto::u2f::ClientResponse;

use super::{client_response, u2f_registration_signed_data};
use super::{AuthenticationCeremony, RegistrationCeremony};
use crate::client_data::{ClientData, ClientDataType};
use crate::constants::U2F_USER_PRESENCE_BIT;
use crate::crypto::constant_time_eq;
use crate::error::{FidoError, FidoResult};
use crate::keys::{AttestationCertificate, HasKeyHandle, KeyHandle, PublicKey};
use crate::wire::{U2fRegistrationData, U2fSignatureData};

/// A well formed answer to a [RegisterRequest](crate::RegisterRequest).
#[derive(Debug, Clone)]
pub struct U2fRegisterResponse {
    client_data: ClientData,
    key_handle: KeyHandle,
    public_key: PublicKey,
    attestation_certificate: AttestationCertificate,
    signature: Vec<u8>,
}

impl U2fRegisterResponse {
    /// Validate the raw registration message and the client data it was made for.
    pub fn from_bytes(registration_data: &[u8], client_data: &[u8]) -> FidoResult<Self> {
        let client_data = ClientData::from_u2f_bytes(client_data)?;
        client_data.expect_type(ClientDataType::U2fRegister)?;

        let rd = U2fRegistrationData::try_from(registration_data)?;

        Ok(U2fRegisterResponse {
            client_data,
            key_handle: KeyHandle::from(rd.key_handle),
            public_key: PublicKey::try_from(rd.public_key)?,
            attestation_certificate: AttestationCertificate::from(rd.attestation_certificate),
            signature: rd.signature.to_vec(),
        })
    }

    /// Validate what the client sent, which may be an error report instead of a response.
    pub fn from_client_response(rsp: &ClientResponse<proto::RegisterResponse>) -> FidoResult<Self> {
        let rsp = client_response(rsp)?;
        Self::from_bytes(&rsp.registration_data.0, &rsp.client_data.0)
    }
}

impl HasKeyHandle for U2fRegisterResponse {
    fn key_handle(&self) -> &KeyHandle {
        &self.key_handle
    }
}

impl RegistrationCeremony for U2fRegisterResponse {
    fn client_data(&self) -> &ClientData {
        &self.client_data
    }

    fn relying_party_matches(&self, rp_id_hash: &[u8; 32]) -> bool {
        constant_time_eq(self.client_data.application_parameter(), rp_id_hash)
    }

    fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    fn attestation_certificate(&self) -> &AttestationCertificate {
        &self.attestation_certificate
    }

    fn signed_data(&self) -> Vec<u8> {
        u2f_registration_signed_data(
            self.client_data.application_parameter(),
            &self.client_data.challenge_parameter(),
            self.key_handle.as_bytes(),
            self.public_key.as_ref(),
        )
    }

    fn signature(&self) -> &[u8] {
        &self.signature
    }
}

/// A well formed answer to a [SignRequest](crate::SignRequest).
#[derive(Debug, Clone)]
pub struct U2fSignResponse {
    client_data: ClientData,
    key_handle: KeyHandle,
    user_presence: u8,
    counter: u32,
    signature: Vec<u8>,
}

impl U2fSignResponse {
    /// Validate the raw signature message, the key handle that made it and the client data it
    /// was made for.
    pub fn from_bytes(
        key_handle: &[u8],
        signature_data: &[u8],
        client_data: &[u8],
    ) -> FidoResult<Self> {
        if key_handle.is_empty() {
            return Err(FidoError::EmptyKeyHandle);
        }

        let client_data = ClientData::from_u2f_bytes(client_data)?;
        client_data.expect_type(ClientDataType::U2fSign)?;

        let sd = U2fSignatureData::try_from(signature_data)?;
        if sd.user_presence & U2F_USER_PRESENCE_BIT == 0 {
            return Err(FidoError::UserNotPresent);
        }

        Ok(U2fSignResponse {
            client_data,
            key_handle: KeyHandle::from(key_handle),
            user_presence: sd.user_presence,
            counter: sd.counter,
            signature: sd.signature.to_vec(),
        })
    }

    /// Validate what the client sent, which may be an error report instead of a response.
    pub fn from_client_response(rsp: &ClientResponse<proto::SignResponse>) -> FidoResult<Self> {
        let rsp = client_response(rsp)?;
        Self::from_bytes(
            &rsp.key_handle.0,
            &rsp.signature_data.0,
            &rsp.client_data.0,
        )
    }
}

impl HasKeyHandle for U2fSignResponse {
    fn key_handle(&self) -> &KeyHandle {
        &self.key_handle
    }
}

impl AuthenticationCeremony for U2fSignResponse {
    fn client_data(&self) -> &ClientData {
        &self.client_data
    }

    fn relying_party_matches(&self, rp_id_hash: &[u8; 32]) -> bool {
        constant_time_eq(self.client_data.application_parameter(), rp_id_hash)
    }

    fn counter(&self) -> u32 {
        self.counter
    }

    // applicationParameter ‖ userPresence ‖ counter (BE) ‖ challengeParameter
    fn signed_data(&self) -> Vec<u8> {
        let challenge_parameter = self.client_data.challenge_parameter();
        let mut data = Vec::with_capacity(32 + 1 + 4 + 32);
        data.extend_from_slice(self.client_data.application_parameter());
        data.push(self.user_presence);
        data.extend_from_slice(&self.counter.to_be_bytes());
        data.extend_from_slice(&challenge_parameter);
        data
    }

    fn signature(&self) -> &[u8] {
        &self.signature
    }
}
