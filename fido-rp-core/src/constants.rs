/// Bytes of randomness in every challenge.
pub const CHALLENGE_SIZE_BYTES: usize = 32;

/// Length of an uncompressed P-256 point.
pub const PUBLIC_KEY_LEN: usize = 65;
pub(crate) const EC_UNCOMPRESSED_POINT_TAG: u8 = 0x04;
pub(crate) const EC_COORDINATE_LEN: usize = 32;

pub(crate) const SHA256_LEN: usize = 32;

// U2F raw message framing
pub(crate) const U2F_REGISTRATION_RESERVED_BYTE: u8 = 0x05;
pub(crate) const U2F_REGISTRATION_SIGNED_PREFIX: u8 = 0x00;
pub(crate) const U2F_USER_PRESENCE_BIT: u8 = 0x01;

// The low five bits of a DER SEQUENCE tag, and how many length octets we accept.
pub(crate) const ASN1_SEQUENCE_TAG_NUMBER: u8 = 0x10;
pub(crate) const ASN1_MAX_LENGTH_OCTETS: usize = 4;

// Authenticator data
pub(crate) const AAGUID_LEN: usize = 16;
pub(crate) const FLAG_USER_PRESENT: u8 = 0x01;
pub(crate) const FLAG_USER_VERIFIED: u8 = 0x04;
pub(crate) const FLAG_ATTESTED_CREDENTIAL_DATA: u8 = 0x40;
pub(crate) const FLAG_EXTENSION_DATA: u8 = 0x80;

// COSE_Key map labels and the only values we accept for them.
pub(crate) const COSE_KEY_TYPE: i128 = 1;
pub(crate) const COSE_KEY_ALGORITHM: i128 = 3;
pub(crate) const COSE_KEY_CURVE: i128 = -1;
pub(crate) const COSE_KEY_X: i128 = -2;
pub(crate) const COSE_KEY_Y: i128 = -3;
pub(crate) const COSE_KEY_TYPE_EC2: i128 = 2;
pub(crate) const COSE_ALGORITHM_ES256: i128 = -7;
pub(crate) const COSE_CURVE_P256: i128 = 1;

pub(crate) const ATTESTATION_FORMAT_FIDO_U2F: &str = "fido-u2f";

/// Milliseconds a browser should wait for the authenticator.
pub(crate) const DEFAULT_AUTHENTICATOR_TIMEOUT: u32 = 60000;
