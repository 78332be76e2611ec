//! Single-use challenge bundles issued to the client. Keep them in the session until the
//! matching response arrives, then discard them whatever the outcome.

use fido_rp_proto::u2f::{self as proto, U2F_VERSION};

use crate::challenge::Challenge;
use crate::error::{FidoError, FidoResult};
use crate::keys::{HasKeyHandle, KeyHandle};

/// An outstanding registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    challenge: Challenge,
    app_id: String,
}

impl RegisterRequest {
    /// Bundle a challenge with the application id it was issued for.
    pub fn new(challenge: Challenge, app_id: &str) -> Self {
        RegisterRequest {
            challenge,
            app_id: app_id.to_string(),
        }
    }

    /// The challenge the response must carry.
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// The application id.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }
}

impl From<&RegisterRequest> for proto::RegisterRequest {
    fn from(req: &RegisterRequest) -> Self {
        proto::RegisterRequest {
            version: U2F_VERSION.to_string(),
            challenge: req.challenge.clone().into(),
            app_id: req.app_id.clone(),
        }
    }
}

fn check_version(version: &str) -> FidoResult<()> {
    if version == U2F_VERSION {
        Ok(())
    } else {
        Err(FidoError::UnsupportedVersion(version.to_string()))
    }
}

impl TryFrom<&proto::RegisterRequest> for RegisterRequest {
    type Error = FidoError;

    fn try_from(req: &proto::RegisterRequest) -> FidoResult<Self> {
        check_version(&req.version)?;
        Ok(RegisterRequest {
            challenge: req.challenge.clone().into(),
            app_id: req.app_id.clone(),
        })
    }
}

/// An outstanding authentication for one key handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    challenge: Challenge,
    app_id: String,
    key_handle: KeyHandle,
}

impl SignRequest {
    /// Bundle a challenge with the application id and the key handle it was issued for.
    pub fn new(challenge: Challenge, app_id: &str, key_handle: KeyHandle) -> Self {
        SignRequest {
            challenge,
            app_id: app_id.to_string(),
            key_handle,
        }
    }

    /// The challenge the response must carry.
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// The application id.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }
}

impl HasKeyHandle for SignRequest {
    fn key_handle(&self) -> &KeyHandle {
        &self.key_handle
    }
}

impl From<&SignRequest> for proto::SignRequest {
    fn from(req: &SignRequest) -> Self {
        proto::SignRequest {
            version: U2F_VERSION.to_string(),
            challenge: req.challenge.clone().into(),
            app_id: req.app_id.clone(),
            key_handle: req.key_handle.clone().into(),
        }
    }
}

impl TryFrom<&proto::SignRequest> for SignRequest {
    type Error = FidoError;

    fn try_from(req: &proto::SignRequest) -> FidoResult<Self> {
        check_version(&req.version)?;
        if req.key_handle.0.is_empty() {
            return Err(FidoError::EmptyKeyHandle);
        }
        Ok(SignRequest {
            challenge: req.challenge.clone().into(),
            app_id: req.app_id.clone(),
            key_handle: req.key_handle.clone().into(),
        })
    }
}
