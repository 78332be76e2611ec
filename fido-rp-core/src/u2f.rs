//! A FIDO U2F relying party.
//!
//! ```
//! use fido_rp_core::{RelyingPartyBuilder, U2fServer};
//! use url::Url;
//!
//! let app_id = Url::parse("https://u2f.example.com").expect("Invalid URL");
//! let config = RelyingPartyBuilder::new(&app_id)
//!     .expect("Invalid configuration")
//!     .build();
//! let server = U2fServer::new(config);
//!
//! // Keep the request in the session, send its JSON form to the client.
//! let request = server.generate_register_request();
//! let json = serde_json::to_string(&fido_rp_core::proto::RegisterRequest::from(&request))
//!     .expect("Failed to serialise");
//! assert!(json.contains(r#""appId":"https://u2f.example.com""#));
//! ```

use fido_rp_proto::u2f as proto;
use fido_rp_proto::u2f::ClientResponse;

use crate::challenge::Challenge;
use crate::config::RelyingPartyConfig;
use crate::engine::{verify_authentication, verify_registration};
use crate::error::{FidoError, FidoResult};
use crate::keys::HasKeyHandle;
use crate::registration::Registration;
use crate::request::{RegisterRequest, SignRequest};
use crate::response::u2f::{U2fRegisterResponse, U2fSignResponse};

/// Issues U2F requests and verifies the responses. All methods take `&self`, so one server
/// can be shared by every request handler.
#[derive(Debug, Clone)]
pub struct U2fServer {
    config: RelyingPartyConfig,
}

impl U2fServer {
    /// A server for this relying party.
    pub fn new(config: RelyingPartyConfig) -> Self {
        U2fServer { config }
    }

    /// The relying party configuration.
    pub fn config(&self) -> &RelyingPartyConfig {
        &self.config
    }

    /// Begin a registration with a fresh challenge.
    pub fn generate_register_request(&self) -> RegisterRequest {
        RegisterRequest::new(Challenge::generate(), self.config.app_id())
    }

    /// Begin an authentication. One request per registration, all sharing one fresh challenge,
    /// so the user may touch whichever of their tokens is at hand.
    pub fn generate_sign_requests(
        &self,
        registrations: &[Registration],
    ) -> FidoResult<Vec<SignRequest>> {
        if registrations.is_empty() {
            return Err(FidoError::NoRegistrations);
        }
        let challenge = Challenge::generate();
        Ok(registrations
            .iter()
            .map(|reg| {
                SignRequest::new(
                    challenge.clone(),
                    self.config.app_id(),
                    reg.key_handle().clone(),
                )
            })
            .collect())
    }

    /// Complete a registration.
    pub fn register(
        &self,
        request: Option<&RegisterRequest>,
        response: &U2fRegisterResponse,
    ) -> FidoResult<Registration> {
        verify_registration(&self.config, request, response)
    }

    /// Complete a registration from the JSON the client returned.
    pub fn register_json(
        &self,
        request: Option<&RegisterRequest>,
        response: &ClientResponse<proto::RegisterResponse>,
    ) -> FidoResult<Registration> {
        let response = U2fRegisterResponse::from_client_response(response)?;
        self.register(request, &response)
    }

    /// Complete an authentication. The returned registration carries the new counter and
    /// must replace the stored one.
    pub fn authenticate(
        &self,
        registrations: &[Registration],
        sign_requests: &[SignRequest],
        response: &U2fSignResponse,
    ) -> FidoResult<Registration> {
        verify_authentication(&self.config, registrations, sign_requests, response)
    }

    /// Complete an authentication from the JSON the client returned.
    pub fn authenticate_json(
        &self,
        registrations: &[Registration],
        sign_requests: &[SignRequest],
        response: &ClientResponse<proto::SignResponse>,
    ) -> FidoResult<Registration> {
        let response = U2fSignResponse::from_client_response(response)?;
        self.authenticate(registrations, sign_requests, &response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fixtures::*;
    use crate::keys::KeyHandle;
    use crate::response::RegistrationCeremony;
    use crate::RelyingPartyBuilder;
    use url::Url;

    fn u2f_server(verify_attestation_ca: bool) -> U2fServer {
        let app_id = Url::parse(U2F_APP_ID).unwrap();
        let config = RelyingPartyBuilder::new(&app_id)
            .unwrap()
            .trusted_roots_pem(U2F_TEST_ROOT_PEM.as_bytes())
            .unwrap()
            .verify_attestation_ca(verify_attestation_ca)
            .build();
        U2fServer::new(config)
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest::new(
            Challenge::new(hex::decode(U2F_REGISTER_CHALLENGE_HEX).unwrap()),
            U2F_APP_ID,
        )
    }

    fn register_response() -> proto::RegisterResponse {
        serde_json::from_str(U2F_REGISTER_RESPONSE).unwrap()
    }

    fn sign_requests(reg: &Registration, challenge_hex: &str) -> Vec<SignRequest> {
        vec![SignRequest::new(
            Challenge::new(hex::decode(challenge_hex).unwrap()),
            U2F_APP_ID,
            reg.key_handle().clone(),
        )]
    }

    fn sign_response(json: &str) -> ClientResponse<proto::SignResponse> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn generate_requests() {
        let server = u2f_server(true);
        let a = server.generate_register_request();
        let b = server.generate_register_request();
        assert_eq!(a.app_id(), U2F_APP_ID);
        assert_ne!(a.challenge(), b.challenge());

        assert!(matches!(
            server.generate_sign_requests(&[]),
            Err(FidoError::NoRegistrations)
        ));

        let reg = server
            .register_json(Some(&register_request()), &register_response().into())
            .unwrap();
        let other = Registration::new(
            KeyHandle::from(vec![0x01; 8]),
            reg.public_key().clone(),
            reg.attestation_certificate().clone(),
            0,
        );
        let reqs = server.generate_sign_requests(&[reg.clone(), other]).unwrap();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].key_handle(), reg.key_handle());
        assert_eq!(reqs[1].key_handle(), &KeyHandle::from(vec![0x01; 8]));
        assert_eq!(reqs[0].challenge(), reqs[1].challenge());
        assert_eq!(reqs[0].app_id(), U2F_APP_ID);
    }

    #[test]
    fn register_then_authenticate() {
        let _ = tracing_subscriber::fmt::try_init();
        let server = u2f_server(true);

        let reg = server
            .register_json(Some(&register_request()), &register_response().into())
            .unwrap();
        assert_eq!(reg.counter(), 0);
        assert_eq!(reg.key_handle().as_bytes(), hex::decode(U2F_KEY_HANDLE_HEX).unwrap());
        assert_eq!(
            reg.public_key().as_ref(),
            hex::decode(U2F_PUBLIC_KEY_HEX).unwrap().as_slice()
        );
        assert_eq!(
            reg.attestation_certificate().as_ref(),
            hex::decode(U2F_ATTESTATION_CERT_HEX).unwrap().as_slice()
        );

        let reqs = sign_requests(&reg, U2F_SIGN_CHALLENGE_HEX);
        let rsp = sign_response(U2F_SIGN_RESPONSE);
        let next = server
            .authenticate_json(&[reg.clone()], &reqs, &rsp)
            .unwrap();
        assert_eq!(next.counter(), 1);
        assert_eq!(next.key_handle(), reg.key_handle());
        assert_eq!(next.public_key(), reg.public_key());

        // The same response again, against the updated registration.
        let replay = server.authenticate_json(&[next], &reqs, &rsp);
        assert!(matches!(replay, Err(FidoError::CounterUsed)));
        assert_eq!(replay.unwrap_err().kind(), ErrorKind::Security);
    }

    #[test]
    fn counterless_token() {
        let server = u2f_server(true);
        let reg = server
            .register_json(Some(&register_request()), &register_response().into())
            .unwrap();
        let reqs = sign_requests(&reg, U2F_ZERO_COUNTER_CHALLENGE_HEX);
        let rsp = sign_response(U2F_ZERO_COUNTER_SIGN_RESPONSE);

        let next = server.authenticate_json(&[reg], &reqs, &rsp).unwrap();
        assert_eq!(next.counter(), 0);
        let again = server.authenticate_json(&[next], &reqs, &rsp).unwrap();
        assert_eq!(again.counter(), 0);
    }

    #[test]
    fn challenge_mismatch_precedes_signature() {
        let server = u2f_server(true);
        let reg = server
            .register_json(Some(&register_request()), &register_response().into())
            .unwrap();

        let wrong = RegisterRequest::new(Challenge::generate(), U2F_APP_ID);
        assert!(matches!(
            server.register_json(Some(&wrong), &register_response().into()),
            Err(FidoError::ChallengeMismatch)
        ));

        let reqs = sign_requests(&reg, U2F_REGISTER_CHALLENGE_HEX);
        assert!(matches!(
            server.authenticate_json(&[reg], &reqs, &sign_response(U2F_SIGN_RESPONSE)),
            Err(FidoError::ChallengeMismatch)
        ));
    }

    #[test]
    fn empty_trust_store() {
        let app_id = Url::parse(U2F_APP_ID).unwrap();
        let server = U2fServer::new(RelyingPartyBuilder::new(&app_id).unwrap().build());
        assert!(matches!(
            server.register_json(Some(&register_request()), &register_response().into()),
            Err(FidoError::NoTrustedCa)
        ));

        // Trusting an unrelated root is no better.
        let yubico = openssl::x509::X509::from_pem(
            YUBICO_U2F_ROOT_CA_SERIAL_457200631_PEM.as_bytes(),
        )
        .unwrap();
        let server = U2fServer::new(
            RelyingPartyBuilder::new(&app_id)
                .unwrap()
                .trusted_root(yubico)
                .build(),
        );
        assert!(matches!(
            server.register_json(Some(&register_request()), &register_response().into()),
            Err(FidoError::NoTrustedCa)
        ));
    }

    // Flip each byte of the key handle, the public key and the attestation certificate. The
    // signature covers all three, directly or through the certificate's key.
    #[test]
    fn tampered_registration() {
        let _ = tracing_subscriber::fmt::try_init();
        let server = u2f_server(false);
        let rsp = register_response();
        let raw = rsp.registration_data.0.clone();

        let key_handle_len = hex::decode(U2F_KEY_HANDLE_HEX).unwrap().len();
        let cert_len = hex::decode(U2F_ATTESTATION_CERT_HEX).unwrap().len();
        let public_key = 1..66;
        let key_handle = 67..67 + key_handle_len;
        let cert_start = key_handle.end;

        for i in public_key.clone().skip(1).chain(key_handle.clone()) {
            let mut data = raw.clone();
            data[i] ^= 0x01;
            let tampered = U2fRegisterResponse::from_bytes(&data, &rsp.client_data.0).unwrap();
            assert!(
                matches!(
                    server.register(Some(&register_request()), &tampered),
                    Err(FidoError::SignatureInvalid)
                ),
                "byte {}",
                i
            );
        }

        // Inside the certificate, flip bytes of the subject key, which change who signed.
        let key_start = cert_start + U2F_ATTESTATION_CERT_KEY_OFFSET;
        for i in key_start..key_start + 65 {
            let mut data = raw.clone();
            data[i] ^= 0x01;
            let tampered = U2fRegisterResponse::from_bytes(&data, &rsp.client_data.0).unwrap();
            assert!(
                matches!(
                    server.register(Some(&register_request()), &tampered),
                    Err(FidoError::SignatureInvalid)
                ),
                "byte {}",
                i
            );
        }
        assert!(key_start + 65 <= cert_start + cert_len);

        // With CA checks on, a tampered certificate no longer chains. The serial number, a
        // validity date and the subject name are signed by the issuer, as is the last byte of
        // the issuer's signature.
        let strict = u2f_server(true);
        for i in [
            U2F_ATTESTATION_CERT_SERIAL_OFFSET,
            U2F_ATTESTATION_CERT_NOT_BEFORE_OFFSET,
            U2F_ATTESTATION_CERT_SUBJECT_OFFSET,
            cert_len - 1,
        ] {
            let mut data = raw.clone();
            data[cert_start + i] ^= 0x01;
            let tampered = U2fRegisterResponse::from_bytes(&data, &rsp.client_data.0).unwrap();
            assert_eq!(tampered.attestation_certificate().as_ref().len(), cert_len);
            assert!(
                matches!(
                    strict.register(Some(&register_request()), &tampered),
                    Err(FidoError::NoTrustedCa)
                ),
                "certificate byte {}",
                i
            );
        }
        let untouched = U2fRegisterResponse::from_bytes(&raw, &rsp.client_data.0).unwrap();
        assert!(strict.register(Some(&register_request()), &untouched).is_ok());
    }

    #[test]
    fn client_errors() {
        let server = u2f_server(true);
        let err: ClientResponse<proto::RegisterResponse> =
            serde_json::from_str(r#"{"errorCode":4}"#).unwrap();
        let e = server.register_json(Some(&register_request()), &err).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::ClientReported);

        let ok: ClientResponse<proto::RegisterResponse> =
            serde_json::from_str(r#"{"errorCode":0}"#).unwrap();
        assert!(matches!(
            server.register_json(Some(&register_request()), &ok),
            Err(FidoError::MissingResponseData)
        ));
    }

    #[test]
    fn missing_request() {
        let server = u2f_server(true);
        let e = server
            .register_json(None, &register_response().into())
            .unwrap_err();
        assert!(matches!(e, FidoError::MissingRegisterRequest));
        assert_eq!(e.kind(), ErrorKind::CallerMisuse);
    }
}
