//! Byte exact parsers for the messages authenticators produce. Nothing here checks a
//! signature; the parsers only guarantee that every field is present and in bounds.

pub(crate) mod attestation_object;
pub(crate) mod authenticator_data;
pub(crate) mod u2f;

pub(crate) use self::attestation_object::AttestationObject;
pub(crate) use self::authenticator_data::AuthenticatorData;
pub(crate) use self::u2f::{U2fRegistrationData, U2fSignatureData};
