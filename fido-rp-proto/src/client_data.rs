//! The client data records that the browser (or U2F client) assembles and the authenticator
//! signs over, in their JSON form.

use crate::base64_data::Base64UrlSafeData;
use serde::{Deserialize, Serialize};

/// `typ` of U2F client data produced during registration.
pub const U2F_TYPE_REGISTER: &str = "navigator.id.finishEnrollment";
/// `typ` of U2F client data produced during authentication.
pub const U2F_TYPE_SIGN: &str = "navigator.id.getAssertion";
/// `type` of Webauthn client data produced by `navigator.credentials.create`.
pub const WEBAUTHN_TYPE_CREATE: &str = "webauthn.create";
/// `type` of Webauthn client data produced by `navigator.credentials.get`.
pub const WEBAUTHN_TYPE_GET: &str = "webauthn.get";

/// U2F client data, as produced by the U2F JavaScript API.
///
/// When serialised the fields are written in declaration order, which is the normalised order
/// used when the relying party builds client data itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct U2fClientData {
    /// One of [U2F_TYPE_REGISTER] or [U2F_TYPE_SIGN].
    pub typ: String,
    /// The server issued challenge.
    pub challenge: Base64UrlSafeData,
    /// The origin of the page that made the request.
    pub origin: String,
    /// The TLS channel id, if the client reported one. Either the string "unused" or a JWK.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid_pubkey: Option<serde_json::Value>,
}

/// The data collected and hashed by the browser during a Webauthn operation.
/// <https://www.w3.org/TR/webauthn-2/#dictdef-collectedclientdata>
///
/// Unknown members (`clientExtensions`, `hashAlgorithm` and friends from older browsers) are
/// ignored, the signature covers the exact bytes regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedClientData {
    /// One of [WEBAUTHN_TYPE_CREATE] or [WEBAUTHN_TYPE_GET].
    #[serde(rename = "type")]
    pub type_: String,
    /// The challenge.
    pub challenge: Base64UrlSafeData,
    /// The rp origin as the browser understood it.
    pub origin: String,
    /// The inverse of the sameOriginWithAncestors argument value that was
    /// passed into the internal method.
    #[serde(rename = "crossOrigin", default, skip_serializing_if = "Option::is_none")]
    pub cross_origin: Option<bool>,
}
