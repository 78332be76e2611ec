//! The CBOR attestation object returned by `navigator.credentials.create`.
//! <https://w3c.github.io/webauthn/#sctn-attestation>

use fido_rp_cbor::Value;

use crate::constants::ATTESTATION_FORMAT_FIDO_U2F;
use crate::error::{FidoError, FidoResult};

/// `{fmt, authData, attStmt}` with the members checked for type, but not yet interpreted.
#[derive(Debug)]
pub(crate) struct AttestationObject {
    pub fmt: String,
    pub auth_data: Vec<u8>,
    pub att_stmt: Value,
}

impl TryFrom<&[u8]> for AttestationObject {
    type Error = FidoError;

    fn try_from(data: &[u8]) -> FidoResult<Self> {
        let aoi = fido_rp_cbor::from_slice(data)?;
        if aoi.as_map().is_none() {
            return Err(FidoError::AttestationObjectInvalid("top level map"));
        }

        let fmt = aoi
            .get_text("fmt")
            .and_then(Value::as_text)
            .ok_or(FidoError::AttestationObjectInvalid("fmt"))?
            .to_string();

        let auth_data = aoi
            .get_text("authData")
            .and_then(Value::as_bytes)
            .ok_or(FidoError::AttestationObjectInvalid("authData"))?
            .to_vec();

        let att_stmt = aoi
            .get_text("attStmt")
            .filter(|v| v.as_map().is_some())
            .ok_or(FidoError::AttestationObjectInvalid("attStmt"))?
            .clone();

        Ok(AttestationObject {
            fmt,
            auth_data,
            att_stmt,
        })
    }
}

/// The fido-u2f attestation statement, `{sig, x5c: [cert]}`.
/// <https://w3c.github.io/webauthn/#sctn-fido-u2f-attestation>
#[derive(Debug)]
pub(crate) struct FidoU2fAttestationStatement<'a> {
    pub sig: &'a [u8],
    pub x5c: &'a [u8],
}

impl AttestationObject {
    /// Interpret the statement, refusing every format other than fido-u2f.
    pub(crate) fn fido_u2f_statement(&self) -> FidoResult<FidoU2fAttestationStatement<'_>> {
        if self.fmt != ATTESTATION_FORMAT_FIDO_U2F {
            debug!(fmt = %self.fmt, "unsupported attestation format");
            return Err(FidoError::AttestationFormatUnsupported(self.fmt.clone()));
        }

        let sig = self
            .att_stmt
            .get_text("sig")
            .ok_or(FidoError::AttestationStatementSigMissing)?
            .as_bytes()
            .ok_or(FidoError::AttestationObjectInvalid("sig"))?;

        // The fido-u2f format carries the attestation certificate alone, with no chain.
        let x5c = match self.att_stmt.get_text("x5c").and_then(Value::as_array) {
            Some([cert]) => cert
                .as_bytes()
                .ok_or(FidoError::AttestationStatementX5CInvalid)?,
            _ => return Err(FidoError::AttestationStatementX5CInvalid),
        };

        Ok(FidoU2fAttestationStatement { sig, x5c })
    }
}
