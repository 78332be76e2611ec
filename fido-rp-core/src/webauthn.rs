//! A Webauthn relying party for security keys using the fido-u2f attestation format.
//!
//! The ceremony is the same as for U2F: start, hand the options to the browser and keep the
//! returned request in the session, then finish with what the browser sent back.

use fido_rp_proto::u2f::ClientResponse;
use fido_rp_proto::webauthn::*;
use fido_rp_proto::Base64UrlSafeData;

use crate::challenge::Challenge;
use crate::config::RelyingPartyConfig;
use crate::constants::COSE_ALGORITHM_ES256;
use crate::engine::{verify_authentication, verify_registration};
use crate::error::{FidoError, FidoResult};
use crate::keys::HasKeyHandle;
use crate::registration::Registration;
use crate::request::{RegisterRequest, SignRequest};
use crate::response::webauthn::{WebauthnRegisterResponse, WebauthnSignResponse};

/// Issues Webauthn ceremony options and verifies the credentials the browser returns.
#[derive(Debug, Clone)]
pub struct RelyingPartyServer {
    config: RelyingPartyConfig,
}

impl RelyingPartyServer {
    /// A server for this relying party.
    pub fn new(config: RelyingPartyConfig) -> Self {
        RelyingPartyServer { config }
    }

    /// The relying party configuration.
    pub fn config(&self) -> &RelyingPartyConfig {
        &self.config
    }

    fn descriptors(registrations: &[Registration]) -> Vec<PublicKeyCredentialDescriptor> {
        registrations
            .iter()
            .map(|reg| PublicKeyCredentialDescriptor::from(reg.key_handle().as_bytes()))
            .collect()
    }

    /// Initiate the registration of a new security key for a user. The user's existing
    /// registrations are excluded, so the same key can not be registered twice.
    ///
    /// The `CreationChallengeResponse` is sent to the browser. The `RegisterRequest` must be
    /// kept server side until [Self::finish_registration].
    pub fn start_registration(
        &self,
        user_id: &[u8],
        user_name: &str,
        user_display_name: &str,
        existing: &[Registration],
    ) -> (CreationChallengeResponse, RegisterRequest) {
        let challenge = Challenge::generate();

        let exclude_credentials = if existing.is_empty() {
            None
        } else {
            Some(Self::descriptors(existing))
        };

        let ccr = CreationChallengeResponse {
            public_key: PublicKeyCredentialCreationOptions {
                rp: RelyingParty {
                    name: self.config.rp_name().to_string(),
                    id: self.config.rp_id().to_string(),
                },
                user: User {
                    id: Base64UrlSafeData(user_id.to_vec()),
                    name: user_name.to_string(),
                    display_name: user_display_name.to_string(),
                },
                challenge: challenge.clone().into(),
                pub_key_cred_params: vec![PubKeyCredParams {
                    type_: PUBLIC_KEY_CREDENTIAL_TYPE.to_string(),
                    alg: COSE_ALGORITHM_ES256 as i64,
                }],
                timeout: Some(self.config.timeout()),
                attestation: Some(AttestationConveyancePreference::Direct),
                exclude_credentials,
            },
        };

        (ccr, RegisterRequest::new(challenge, self.config.app_id()))
    }

    /// Complete the registration of the credential.
    pub fn finish_registration(
        &self,
        request: Option<&RegisterRequest>,
        response: &ClientResponse<RegisterPublicKeyCredential>,
    ) -> FidoResult<Registration> {
        let response = WebauthnRegisterResponse::from_client_response(response)?;
        verify_registration(&self.config, request, &response)
    }

    /// Initiate an authentication with any of the user's registered security keys.
    ///
    /// The `RequestChallengeResponse` is sent to the browser. The sign requests must be kept
    /// server side until [Self::finish_authentication].
    pub fn start_authentication(
        &self,
        registrations: &[Registration],
    ) -> FidoResult<(RequestChallengeResponse, Vec<SignRequest>)> {
        if registrations.is_empty() {
            return Err(FidoError::NoRegistrations);
        }

        let challenge = Challenge::generate();

        let rcr = RequestChallengeResponse {
            public_key: PublicKeyCredentialRequestOptions {
                challenge: challenge.clone().into(),
                timeout: Some(self.config.timeout()),
                rp_id: self.config.rp_id().to_string(),
                allow_credentials: Self::descriptors(registrations),
            },
        };

        let sign_requests = registrations
            .iter()
            .map(|reg| {
                SignRequest::new(
                    challenge.clone(),
                    self.config.app_id(),
                    reg.key_handle().clone(),
                )
            })
            .collect();

        Ok((rcr, sign_requests))
    }

    /// Complete the authentication. The returned registration carries the new counter and must
    /// replace the stored one.
    pub fn finish_authentication(
        &self,
        registrations: &[Registration],
        sign_requests: &[SignRequest],
        response: &ClientResponse<PublicKeyCredential>,
    ) -> FidoResult<Registration> {
        let response = WebauthnSignResponse::from_client_response(response)?;
        verify_authentication(&self.config, registrations, sign_requests, &response)
    }
}
