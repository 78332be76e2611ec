//! The credential material a relying party keeps: the public key, the key handle that names
//! it on the authenticator, and the certificate that attested to it.

use std::fmt;

use fido_rp_cbor::Value;
use fido_rp_proto::Base64UrlSafeData;
use openssl::x509::X509;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::crypto::constant_time_eq;
use crate::error::{FidoError, FidoResult};

/// Anything that names a credential by its key handle.
pub trait HasKeyHandle {
    /// The key handle (Webauthn: credential id).
    fn key_handle(&self) -> &KeyHandle;
}

/// An uncompressed P-256 public key point, `0x04 ‖ x ‖ y`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Base64UrlSafeData", into = "Base64UrlSafeData")]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    /// The x coordinate.
    pub fn x(&self) -> &[u8] {
        &self.0[1..1 + EC_COORDINATE_LEN]
    }

    /// The y coordinate.
    pub fn y(&self) -> &[u8] {
        &self.0[1 + EC_COORDINATE_LEN..]
    }

    fn from_coordinates(x: &[u8], y: &[u8]) -> FidoResult<Self> {
        if x.len() != EC_COORDINATE_LEN || y.len() != EC_COORDINATE_LEN {
            return Err(FidoError::COSEKeyInvalidType);
        }
        let mut point = [0; PUBLIC_KEY_LEN];
        point[0] = EC_UNCOMPRESSED_POINT_TAG;
        point[1..1 + EC_COORDINATE_LEN].copy_from_slice(x);
        point[1 + EC_COORDINATE_LEN..].copy_from_slice(y);
        Ok(PublicKey(point))
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = FidoError;

    fn try_from(bytes: &[u8]) -> FidoResult<Self> {
        let point: [u8; PUBLIC_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| FidoError::InvalidPublicKeyLength(bytes.len()))?;
        if point[0] != EC_UNCOMPRESSED_POINT_TAG {
            return Err(FidoError::InvalidPublicKeyTag(point[0]));
        }
        Ok(PublicKey(point))
    }
}

impl TryFrom<Base64UrlSafeData> for PublicKey {
    type Error = FidoError;

    fn try_from(data: Base64UrlSafeData) -> FidoResult<Self> {
        PublicKey::try_from(data.0.as_slice())
    }
}

fn cose_label(cose: &Value, label: i128) -> FidoResult<&Value> {
    cose.get_int(label).ok_or(FidoError::COSEKeyInvalidType)
}

/// Extract the key from a COSE_Key map. Only EC2 keys on P-256 for ES256 are accepted.
impl TryFrom<&Value> for PublicKey {
    type Error = FidoError;

    fn try_from(cose: &Value) -> FidoResult<Self> {
        if cose.as_map().is_none() {
            return Err(FidoError::COSEKeyInvalidCBORValue);
        }

        let kty = cose_label(cose, COSE_KEY_TYPE)?
            .as_integer()
            .ok_or(FidoError::COSEKeyInvalidCBORValue)?;
        let alg = cose_label(cose, COSE_KEY_ALGORITHM)?
            .as_integer()
            .ok_or(FidoError::COSEKeyInvalidCBORValue)?;
        let crv = cose_label(cose, COSE_KEY_CURVE)?
            .as_integer()
            .ok_or(FidoError::COSEKeyInvalidCBORValue)?;

        if kty != COSE_KEY_TYPE_EC2 || alg != COSE_ALGORITHM_ES256 || crv != COSE_CURVE_P256 {
            debug!(?kty, ?alg, ?crv, "unsupported COSE key");
            return Err(FidoError::COSEKeyInvalidType);
        }

        let x = cose_label(cose, COSE_KEY_X)?
            .as_bytes()
            .ok_or(FidoError::COSEKeyInvalidCBORValue)?;
        let y = cose_label(cose, COSE_KEY_Y)?
            .as_bytes()
            .ok_or(FidoError::COSEKeyInvalidCBORValue)?;

        PublicKey::from_coordinates(x, y)
    }
}

impl From<PublicKey> for Base64UrlSafeData {
    fn from(key: PublicKey) -> Self {
        Base64UrlSafeData(key.0.to_vec())
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey")
            .field(&Base64UrlSafeData(self.0.to_vec()).to_string())
            .finish()
    }
}

/// The opaque handle an authenticator uses to find (or unwrap) the private key.
///
/// Equality is constant time.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "Base64UrlSafeData", into = "Base64UrlSafeData")]
pub struct KeyHandle(Vec<u8>);

impl KeyHandle {
    /// The raw handle bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for KeyHandle {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for KeyHandle {}

impl From<Vec<u8>> for KeyHandle {
    fn from(v: Vec<u8>) -> Self {
        KeyHandle(v)
    }
}

impl From<&[u8]> for KeyHandle {
    fn from(v: &[u8]) -> Self {
        KeyHandle(v.to_vec())
    }
}

impl From<Base64UrlSafeData> for KeyHandle {
    fn from(data: Base64UrlSafeData) -> Self {
        KeyHandle(data.0)
    }
}

impl From<KeyHandle> for Base64UrlSafeData {
    fn from(kh: KeyHandle) -> Self {
        Base64UrlSafeData(kh.0)
    }
}

impl AsRef<[u8]> for KeyHandle {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyHandle")
            .field(&Base64UrlSafeData(self.0.clone()).to_string())
            .finish()
    }
}

/// The DER encoded certificate the authenticator presented at registration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Base64UrlSafeData", into = "Base64UrlSafeData")]
pub struct AttestationCertificate(Vec<u8>);

impl AttestationCertificate {
    /// The certificate in PEM form. Fails if the bytes are not a DER certificate.
    pub fn to_pem(&self) -> FidoResult<String> {
        let pem = X509::from_der(&self.0)?.to_pem()?;
        Ok(String::from_utf8_lossy(&pem).into_owned())
    }
}

impl From<Vec<u8>> for AttestationCertificate {
    fn from(v: Vec<u8>) -> Self {
        AttestationCertificate(v)
    }
}

impl From<&[u8]> for AttestationCertificate {
    fn from(v: &[u8]) -> Self {
        AttestationCertificate(v.to_vec())
    }
}

impl From<Base64UrlSafeData> for AttestationCertificate {
    fn from(data: Base64UrlSafeData) -> Self {
        AttestationCertificate(data.0)
    }
}

impl From<AttestationCertificate> for Base64UrlSafeData {
    fn from(cert: AttestationCertificate) -> Self {
        Base64UrlSafeData(cert.0)
    }
}

impl AsRef<[u8]> for AttestationCertificate {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for AttestationCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttestationCertificate({} bytes)", self.0.len())
    }
}
