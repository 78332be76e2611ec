//! Raw U2F authenticator messages.

use nom::bytes::complete::take;
use nom::combinator::{rest, verify};
use nom::multi::length_data;
use nom::number::complete::{be_u32, be_u8};

use crate::constants::{
    ASN1_MAX_LENGTH_OCTETS, ASN1_SEQUENCE_TAG_NUMBER, PUBLIC_KEY_LEN,
    U2F_REGISTRATION_RESERVED_BYTE,
};
use crate::error::FidoError;

// The format of the registration data is as follows:
//
// Bytes  Value
// 1      0x05
// 65     public key
// 1      key handle length
// *      key handle
// ASN.1  attestation certificate
// *      attestation signature

/// The fields of a U2F registration message, borrowed from the message.
#[derive(Debug)]
pub(crate) struct U2fRegistrationData<'a> {
    pub public_key: &'a [u8],
    pub key_handle: &'a [u8],
    pub attestation_certificate: &'a [u8],
    pub signature: &'a [u8],
}

fn asn1_failure<T>(i: &[u8], kind: nom::error::ErrorKind) -> nom::IResult<&[u8], T> {
    Err(nom::Err::Failure(nom::error::Error::new(i, kind)))
}

/// Split a DER SEQUENCE, header included, off the front of the input. Only the framing is
/// checked, the content is opaque here.
fn asn1_seq_extractor(i: &[u8]) -> nom::IResult<&[u8], &[u8]> {
    // Assert we have enough bytes for the ASN.1 header.
    if i.len() < 2 {
        return asn1_failure(i, nom::error::ErrorKind::LengthValue);
    }
    if i[0] & 0x1f != ASN1_SEQUENCE_TAG_NUMBER {
        // It's not an ASN.1 sequence.
        return asn1_failure(i, nom::error::ErrorKind::IsNot);
    }

    let (header_len, length) = if i[1] & 0x80 == 0 {
        (2, i[1] as usize)
    } else {
        // Long form, the low bits count the big-endian length octets that follow.
        let octets = (i[1] & 0x7f) as usize;
        if octets == 0 || octets > ASN1_MAX_LENGTH_OCTETS {
            return asn1_failure(i, nom::error::ErrorKind::TooLarge);
        }
        if i.len() < 2 + octets {
            return asn1_failure(i, nom::error::ErrorKind::LengthValue);
        }
        let length = i[2..2 + octets]
            .iter()
            .fold(0u64, |acc, b| (acc << 8) | *b as u64);
        match usize::try_from(length) {
            Ok(length) => (2 + octets, length),
            Err(_) => return asn1_failure(i, nom::error::ErrorKind::TooLarge),
        }
    };

    if i.len() - header_len < length {
        // Not enough bytes to satisfy.
        return asn1_failure(i, nom::error::ErrorKind::Eof);
    }

    let (cert, rem) = i.split_at(header_len + length);
    Ok((rem, cert))
}

fn u2rd_parser(i: &[u8]) -> nom::IResult<&[u8], U2fRegistrationData<'_>> {
    let (i, _reserved) = verify(be_u8, |b: &u8| *b == U2F_REGISTRATION_RESERVED_BYTE)(i)?;
    let (i, public_key) = take(PUBLIC_KEY_LEN)(i)?;
    let (i, key_handle) = verify(length_data(be_u8), |kh: &[u8]| !kh.is_empty())(i)?;
    let (i, attestation_certificate) = asn1_seq_extractor(i)?;
    let (i, signature) = verify(rest, |sig: &[u8]| !sig.is_empty())(i)?;

    Ok((
        i,
        U2fRegistrationData {
            public_key,
            key_handle,
            attestation_certificate,
            signature,
        },
    ))
}

impl<'a> TryFrom<&'a [u8]> for U2fRegistrationData<'a> {
    type Error = FidoError;

    fn try_from(data: &'a [u8]) -> Result<Self, FidoError> {
        u2rd_parser(data)
            .map_err(|e| {
                debug!(?e, len = data.len(), "invalid u2f registration data");
                FidoError::ParseNOMFailure
            })
            .map(|(_, rd)| rd)
    }
}

// The format of the signature data is as follows:
//
//  1     User presence
//  4     Counter
//  *     Signature

/// The fields of a U2F authentication message.
#[derive(Debug)]
pub(crate) struct U2fSignatureData<'a> {
    pub user_presence: u8,
    pub counter: u32,
    pub signature: &'a [u8],
}

fn u2sd_parser(i: &[u8]) -> nom::IResult<&[u8], U2fSignatureData<'_>> {
    let (i, user_presence) = be_u8(i)?;
    let (i, counter) = be_u32(i)?;
    let (i, signature) = verify(rest, |sig: &[u8]| !sig.is_empty())(i)?;
    Ok((
        i,
        U2fSignatureData {
            user_presence,
            counter,
            signature,
        },
    ))
}

impl<'a> TryFrom<&'a [u8]> for U2fSignatureData<'a> {
    type Error = FidoError;

    fn try_from(data: &'a [u8]) -> Result<Self, FidoError> {
        u2sd_parser(data)
            .map_err(|e| {
                debug!(?e, len = data.len(), "invalid u2f signature data");
                FidoError::ParseNOMFailure
            })
            .map(|(_, sd)| sd)
    }
}
