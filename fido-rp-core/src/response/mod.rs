//! Response validators. Each one turns what the client sent into a ceremony the verification
//! engine can check: the signed data, the signature, the key handle and the client data.
//!
//! Building a response only proves it is well formed. Nothing here decides whether it is
//! trustworthy, that is the engine's job.

use fido_rp_proto::u2f::{ClientErrorReport, ClientResponse};

use crate::client_data::ClientData;
use crate::constants::U2F_REGISTRATION_SIGNED_PREFIX;
use crate::error::{FidoError, FidoResult};
use crate::keys::{AttestationCertificate, HasKeyHandle, PublicKey};

pub mod u2f;
pub mod webauthn;

/// A validated registration response, from either protocol.
pub trait RegistrationCeremony: HasKeyHandle {
    /// The client data the authenticator signed over.
    fn client_data(&self) -> &ClientData;

    /// Whether the response was produced for the relying party with this identity hash.
    fn relying_party_matches(&self, rp_id_hash: &[u8; 32]) -> bool;

    /// The new credential public key.
    fn public_key(&self) -> &PublicKey;

    /// The certificate whose key made [Self::signature].
    fn attestation_certificate(&self) -> &AttestationCertificate;

    /// The exact bytes the attestation signature covers.
    fn signed_data(&self) -> Vec<u8>;

    /// The attestation signature.
    fn signature(&self) -> &[u8];
}

/// A validated authentication response, from either protocol.
pub trait AuthenticationCeremony: HasKeyHandle {
    /// The client data the authenticator signed over.
    fn client_data(&self) -> &ClientData;

    /// Whether the response was produced for the relying party with this identity hash.
    fn relying_party_matches(&self, rp_id_hash: &[u8; 32]) -> bool;

    /// The signature counter the authenticator reported.
    fn counter(&self) -> u32;

    /// The exact bytes the assertion signature covers.
    fn signed_data(&self) -> Vec<u8>;

    /// The assertion signature, made with the registered credential key.
    fn signature(&self) -> &[u8];
}

/// Unwrap the response data, or report the error the client sent in its place. An error code of
/// zero means "ok" in the U2F JavaScript API, which is only valid alongside response data.
pub(crate) fn client_response<T>(rsp: &ClientResponse<T>) -> FidoResult<&T> {
    match rsp {
        ClientResponse::Response(data) => Ok(data),
        ClientResponse::Error(ClientErrorReport { error_code: 0, .. }) => {
            Err(FidoError::MissingResponseData)
        }
        ClientResponse::Error(report) => Err(FidoError::ClientError {
            code: report.error_code.into(),
            message: report.error_message.clone(),
        }),
    }
}

/// `0x00 ‖ applicationParameter ‖ challengeParameter ‖ keyHandle ‖ publicKey`
pub(crate) fn u2f_registration_signed_data(
    application_parameter: &[u8],
    challenge_parameter: &[u8],
    key_handle: &[u8],
    public_key: &[u8],
) -> Vec<u8> {
    let mut data = Vec::with_capacity(
        1 + application_parameter.len()
            + challenge_parameter.len()
            + key_handle.len()
            + public_key.len(),
    );
    data.push(U2F_REGISTRATION_SIGNED_PREFIX);
    data.extend_from_slice(application_parameter);
    data.extend_from_slice(challenge_parameter);
    data.extend_from_slice(key_handle);
    data.extend_from_slice(public_key);
    data
}
