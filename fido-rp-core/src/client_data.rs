//! The client data an authenticator signs over, and the two hashes derived from it.

use fido_rp_proto::client_data::*;
use fido_rp_proto::Base64UrlSafeData;
use url::Url;

use crate::challenge::Challenge;
use crate::crypto::compute_sha256;
use crate::error::{FidoError, FidoResult};

/// Which ceremony step produced a piece of client data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientDataType {
    /// U2F `navigator.id.finishEnrollment`
    U2fRegister,
    /// U2F `navigator.id.getAssertion`
    U2fSign,
    /// Webauthn `webauthn.create`
    WebauthnCreate,
    /// Webauthn `webauthn.get`
    WebauthnGet,
}

impl ClientDataType {
    /// The literal that appears in the client data.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientDataType::U2fRegister => U2F_TYPE_REGISTER,
            ClientDataType::U2fSign => U2F_TYPE_SIGN,
            ClientDataType::WebauthnCreate => WEBAUTHN_TYPE_CREATE,
            ClientDataType::WebauthnGet => WEBAUTHN_TYPE_GET,
        }
    }

    fn from_u2f(typ: &str) -> FidoResult<Self> {
        match typ {
            U2F_TYPE_REGISTER => Ok(ClientDataType::U2fRegister),
            U2F_TYPE_SIGN => Ok(ClientDataType::U2fSign),
            _ => Err(FidoError::InvalidClientDataType),
        }
    }

    fn from_webauthn(typ: &str) -> FidoResult<Self> {
        match typ {
            WEBAUTHN_TYPE_CREATE => Ok(ClientDataType::WebauthnCreate),
            WEBAUTHN_TYPE_GET => Ok(ClientDataType::WebauthnGet),
            _ => Err(FidoError::InvalidClientDataType),
        }
    }
}

/// Client data together with the exact bytes the authenticator signed.
#[derive(Debug, Clone)]
pub struct ClientData {
    typ: ClientDataType,
    challenge: Challenge,
    origin: Url,
    raw: Vec<u8>,
    application_parameter: [u8; 32],
}

fn application_parameter(origin: &Url) -> FidoResult<[u8; 32]> {
    let host = origin
        .host_str()
        .ok_or(FidoError::InvalidClientDataOrigin)?
        .to_ascii_lowercase();
    Ok(compute_sha256(host.as_bytes()))
}

fn parse_origin(origin: &str) -> FidoResult<Url> {
    Url::parse(origin).map_err(|e| {
        debug!(?e, %origin, "client data origin is not a url");
        FidoError::InvalidClientDataOrigin
    })
}

impl ClientData {
    fn assemble(
        typ: ClientDataType,
        challenge: Base64UrlSafeData,
        origin: &str,
        raw: Vec<u8>,
    ) -> FidoResult<Self> {
        let origin = parse_origin(origin)?;
        let application_parameter = application_parameter(&origin)?;
        Ok(ClientData {
            typ,
            challenge: challenge.into(),
            origin,
            raw,
            application_parameter,
        })
    }

    /// Parse the client data of the U2F JavaScript API.
    pub fn from_u2f_bytes(raw: &[u8]) -> FidoResult<Self> {
        let cd: U2fClientData = serde_json::from_slice(raw)?;
        let typ = ClientDataType::from_u2f(&cd.typ)?;
        Self::assemble(typ, cd.challenge, &cd.origin, raw.to_vec())
    }

    /// Parse Webauthn `clientDataJSON`.
    pub fn from_webauthn_bytes(raw: &[u8]) -> FidoResult<Self> {
        let cd: CollectedClientData = serde_json::from_slice(raw)?;
        let typ = ClientDataType::from_webauthn(&cd.type_)?;
        Self::assemble(typ, cd.challenge, &cd.origin, raw.to_vec())
    }

    /// Build U2F client data in-process. The canonical form is compact JSON with the members in
    /// the order `typ`, `challenge`, `origin`.
    pub fn new_u2f(typ: ClientDataType, challenge: &Challenge, origin: &str) -> FidoResult<Self> {
        if !matches!(typ, ClientDataType::U2fRegister | ClientDataType::U2fSign) {
            return Err(FidoError::InvalidClientDataType);
        }
        let cd = U2fClientData {
            typ: typ.as_str().to_string(),
            challenge: challenge.clone().into(),
            origin: origin.to_string(),
            cid_pubkey: None,
        };
        let raw = serde_json::to_vec(&cd)?;
        Self::assemble(typ, cd.challenge, &cd.origin, raw)
    }

    /// Fail unless this client data was produced for the given ceremony step.
    pub fn expect_type(&self, typ: ClientDataType) -> FidoResult<()> {
        if self.typ == typ {
            Ok(())
        } else {
            debug!(expected = typ.as_str(), found = self.typ.as_str(), "client data type");
            Err(FidoError::InvalidClientDataType)
        }
    }

    /// The ceremony step.
    pub fn typ(&self) -> ClientDataType {
        self.typ
    }

    /// The challenge the client was given.
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// The origin the client reported.
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// The exact signed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// SHA-256 of the lower-cased origin host.
    pub fn application_parameter(&self) -> &[u8; 32] {
        &self.application_parameter
    }

    /// SHA-256 of the signed bytes.
    pub fn challenge_parameter(&self) -> [u8; 32] {
        compute_sha256(&self.raw)
    }
}
