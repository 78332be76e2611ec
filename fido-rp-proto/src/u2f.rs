//! Messages of the FIDO U2F JavaScript API.

use crate::base64_data::Base64UrlSafeData;
use serde::{Deserialize, Serialize};

/// The only protocol version this relying party speaks.
pub const U2F_VERSION: &str = "U2F_V2";

/// A registration challenge sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Always [U2F_VERSION].
    pub version: String,
    /// The one-time challenge for the token to sign.
    pub challenge: Base64UrlSafeData,
    /// The application id the token binds the new key to.
    pub app_id: String,
}

/// An authentication challenge for one specific key handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    /// Always [U2F_VERSION].
    pub version: String,
    /// The one-time challenge for the token to sign.
    pub challenge: Base64UrlSafeData,
    /// The application id the key was registered under.
    pub app_id: String,
    /// The key handle the token must sign with.
    pub key_handle: Base64UrlSafeData,
}

/// What a successful `u2f.register` call returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// The raw registration message from the token.
    pub registration_data: Base64UrlSafeData,
    /// The exact client data bytes the token signed over.
    pub client_data: Base64UrlSafeData,
}

/// What a successful `u2f.sign` call returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignResponse {
    /// The key handle that produced the signature.
    pub key_handle: Base64UrlSafeData,
    /// User presence, counter and signature from the token.
    pub signature_data: Base64UrlSafeData,
    /// The exact client data bytes the token signed over.
    pub client_data: Base64UrlSafeData,
}

/// The error the client reports instead of response data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientErrorReport {
    /// 1 other, 2 bad request, 3 configuration unsupported, 4 device ineligible, 5 timeout.
    pub error_code: u16,
    /// Free form detail from the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Either the response data, or the error the client reported in its place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientResponse<T> {
    /// The client produced a response.
    Response(T),
    /// The client failed and only reported an error code.
    Error(ClientErrorReport),
}

impl<T> From<T> for ClientResponse<T> {
    fn from(t: T) -> Self {
        ClientResponse::Response(t)
    }
}
