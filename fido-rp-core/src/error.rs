//! Possible errors that may occur during U2F and Webauthn operations.

use fido_rp_cbor::CborError;
use thiserror::Error;

/// A wrapper for `Result<T, FidoError>`
pub type FidoResult<T> = core::result::Result<T, FidoError>;

/// The four broad classes every [FidoError] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be parsed or was structurally invalid. Reject it whole.
    MalformedData,
    /// A verification step failed. The ceremony is aborted and no registration changes.
    Security,
    /// The client or authenticator reported an error instead of a response.
    ClientReported,
    /// The caller did not supply the state the operation needs. This is a programming error.
    CallerMisuse,
}

/// Error codes of the U2F JavaScript API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorCode {
    /// 1: an error not covered by the other codes.
    OtherError,
    /// 2: the request could not be processed.
    BadRequest,
    /// 3: the client configuration is not supported.
    ConfigurationUnsupported,
    /// 4: the presented device is not eligible for this request.
    DeviceIneligible,
    /// 5: the request timed out.
    Timeout,
    /// Any other code, kept as reported.
    Unknown(u16),
}

impl From<u16> for ClientErrorCode {
    fn from(code: u16) -> Self {
        match code {
            1 => ClientErrorCode::OtherError,
            2 => ClientErrorCode::BadRequest,
            3 => ClientErrorCode::ConfigurationUnsupported,
            4 => ClientErrorCode::DeviceIneligible,
            5 => ClientErrorCode::Timeout,
            c => ClientErrorCode::Unknown(c),
        }
    }
}

/// Possible errors that may occur during U2F and Webauthn operations.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum FidoError {
    #[error("The relying party configuration is invalid: {0}")]
    Configuration(&'static str),

    #[error("A register request must be supplied")]
    MissingRegisterRequest,

    #[error("No registrations were supplied")]
    NoRegistrations,

    #[error("No sign requests were supplied")]
    NoSignRequests,

    #[error("The client reported error {code:?}")]
    ClientError {
        code: ClientErrorCode,
        message: Option<String>,
    },

    #[error("The client reported success but sent no response data")]
    MissingResponseData,

    #[error("The challenge in the client data did not match the request")]
    ChallengeMismatch,

    #[error("The response was made for a different relying party")]
    WrongRelyingParty,

    #[error("The attestation certificate does not chain to a trusted root")]
    NoTrustedCa,

    #[error("The signature over the response is invalid")]
    SignatureInvalid,

    #[error("The key handle is not recognised")]
    KeyHandleUnrecognized,

    #[error("The signature counter did not increase")]
    CounterUsed,

    #[error("Failed to parse the binary message")]
    ParseNOMFailure,

    #[error("A public key must be 65 bytes, found {0}")]
    InvalidPublicKeyLength(usize),

    #[error("A public key must start with 0x04, found {0:#04x}")]
    InvalidPublicKeyTag(u8),

    #[error("The client data type is not valid for this ceremony")]
    InvalidClientDataType,

    #[error("The client data origin has no host")]
    InvalidClientDataOrigin,

    #[error("The user present flag is not set")]
    UserNotPresent,

    #[error("Authenticator data extensions are not supported")]
    ExtensionsUnsupported,

    #[error("The authenticator data does not contain attested credential data")]
    MissingAttestationCredentialData,

    #[error("Unexpected bytes follow the authenticator data")]
    AuthenticatorDataTrailingBytes,

    #[error("The attested credential id does not match the credential")]
    CredentialIdMismatch,

    #[error("The attestation format {0:?} is not supported")]
    AttestationFormatUnsupported(String),

    #[error("The attestation object has a missing or malformed {0}")]
    AttestationObjectInvalid(&'static str),

    #[error("The attestation statement has no signature")]
    AttestationStatementSigMissing,

    #[error("The attestation statement must carry exactly one certificate")]
    AttestationStatementX5CInvalid,

    #[error("A COSE key member has an unexpected CBOR type")]
    COSEKeyInvalidCBORValue,

    #[error("The COSE key is not an ES256 P-256 key")]
    COSEKeyInvalidType,

    #[error("The request version {0:?} is not supported")]
    UnsupportedVersion(String),

    #[error("The key handle must not be empty")]
    EmptyKeyHandle,

    #[error("CBOR decoding failed: {0}")]
    ParseCBORFailure(#[from] CborError),

    #[error("JSON parsing failed: {0}")]
    ParseJSONFailure(#[from] serde_json::Error),

    #[error("OpenSSL error: {0}")]
    OpenSSLError(#[from] openssl::error::ErrorStack),
}

impl FidoError {
    /// Which of the broad error classes this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FidoError::Configuration(_)
            | FidoError::MissingRegisterRequest
            | FidoError::NoRegistrations
            | FidoError::NoSignRequests
            | FidoError::OpenSSLError(_) => ErrorKind::CallerMisuse,

            FidoError::ClientError { .. } => ErrorKind::ClientReported,

            FidoError::ChallengeMismatch
            | FidoError::WrongRelyingParty
            | FidoError::NoTrustedCa
            | FidoError::SignatureInvalid
            | FidoError::KeyHandleUnrecognized
            | FidoError::CounterUsed => ErrorKind::Security,

            FidoError::MissingResponseData
            | FidoError::ParseNOMFailure
            | FidoError::InvalidPublicKeyLength(_)
            | FidoError::InvalidPublicKeyTag(_)
            | FidoError::InvalidClientDataType
            | FidoError::InvalidClientDataOrigin
            | FidoError::UserNotPresent
            | FidoError::ExtensionsUnsupported
            | FidoError::MissingAttestationCredentialData
            | FidoError::AuthenticatorDataTrailingBytes
            | FidoError::CredentialIdMismatch
            | FidoError::AttestationFormatUnsupported(_)
            | FidoError::AttestationObjectInvalid(_)
            | FidoError::AttestationStatementSigMissing
            | FidoError::AttestationStatementX5CInvalid
            | FidoError::COSEKeyInvalidCBORValue
            | FidoError::COSEKeyInvalidType
            | FidoError::UnsupportedVersion(_)
            | FidoError::EmptyKeyHandle
            | FidoError::ParseCBORFailure(_)
            | FidoError::ParseJSONFailure(_) => ErrorKind::MalformedData,
        }
    }
}
