//! Webauthn authenticator data.
//! <https://w3c.github.io/webauthn/#sctn-authenticator-data>

use fido_rp_cbor::{Decoder, Value};
use nom::bytes::complete::take;
use nom::combinator::map_res;
use nom::multi::length_data;
use nom::number::complete::{be_u16, be_u32, be_u8};
use uuid::Uuid;

use crate::constants::*;
use crate::error::{FidoError, FidoResult};

/// The credential created by a registration.
#[derive(Debug)]
pub(crate) struct AttestedCredentialData<'a> {
    pub aaguid: Uuid,
    pub credential_id: &'a [u8],
    pub credential_public_key: Value,
}

/// Parsed authenticator data. `raw` keeps the exact bytes, which are part of the signed data
/// of an assertion.
#[derive(Debug)]
pub(crate) struct AuthenticatorData<'a> {
    pub raw: &'a [u8],
    pub rp_id_hash: &'a [u8],
    pub flags: u8,
    pub user_present: bool,
    pub user_verified: bool,
    pub counter: u32,
    pub attested_credential_data: Option<AttestedCredentialData<'a>>,
}

fn header_parser(i: &[u8]) -> nom::IResult<&[u8], (&[u8], u8, u32)> {
    let (i, rp_id_hash) = take(SHA256_LEN)(i)?;
    let (i, flags) = be_u8(i)?;
    let (i, counter) = be_u32(i)?;
    Ok((i, (rp_id_hash, flags, counter)))
}

fn acd_parser(i: &[u8]) -> nom::IResult<&[u8], (Uuid, &[u8])> {
    let (i, aaguid) = map_res(take(AAGUID_LEN), Uuid::from_slice)(i)?;
    let (i, credential_id) = length_data(be_u16)(i)?;
    Ok((i, (aaguid, credential_id)))
}

fn nom_failure<E: std::fmt::Debug>(e: E) -> FidoError {
    debug!(?e, "invalid authenticator data");
    FidoError::ParseNOMFailure
}

impl<'a> TryFrom<&'a [u8]> for AuthenticatorData<'a> {
    type Error = FidoError;

    fn try_from(raw: &'a [u8]) -> FidoResult<Self> {
        let (i, (rp_id_hash, flags, counter)) = header_parser(raw).map_err(nom_failure)?;

        // flags:   [ Exten | Attested | 0 | 0 | 0 | UVer | 0 | UPres ]
        if flags & FLAG_EXTENSION_DATA != 0 {
            return Err(FidoError::ExtensionsUnsupported);
        }
        let user_present = flags & FLAG_USER_PRESENT != 0;
        let user_verified = flags & FLAG_USER_VERIFIED != 0;

        let (i, attested_credential_data) = if flags & FLAG_ATTESTED_CREDENTIAL_DATA != 0 {
            let (i, (aaguid, credential_id)) = acd_parser(i).map_err(nom_failure)?;

            // The key has no length prefix, it ends where its CBOR encoding ends.
            let mut decoder = Decoder::new(i);
            let credential_public_key = decoder.decode_value()?;
            (
                decoder.remaining(),
                Some(AttestedCredentialData {
                    aaguid,
                    credential_id,
                    credential_public_key,
                }),
            )
        } else {
            (i, None)
        };

        if !i.is_empty() {
            debug!(trailing = i.len(), "authenticator data is longer than its content");
            return Err(FidoError::AuthenticatorDataTrailingBytes);
        }

        Ok(AuthenticatorData {
            raw,
            rp_id_hash,
            flags,
            user_present,
            user_verified,
            counter,
            attested_credential_data,
        })
    }
}
