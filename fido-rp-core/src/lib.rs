//! fido-rp-core - FIDO U2F and Webauthn relying party verification
//!
//! U2F security keys, and Webauthn authenticators using the fido-u2f attestation format, prove
//! possession of a key pair bound to your site. This library verifies those proofs: it parses
//! the binary messages the authenticator produced, checks that they answer the challenge you
//! issued, for your site, signed by a key you trust, and tracks the signature counter to
//! detect cloned authenticators.
//!
//! Start with a [RelyingPartyBuilder], then use a [U2fServer] for the U2F JavaScript API or a
//! [RelyingPartyServer] for Webauthn. Both servers are immutable once built. The requests they
//! issue and the registrations they return are yours to store, for example in a
//! [RegistrationStore].
//!
//! The engine never reports which check failed other than through the returned [FidoError].
//! Use [FidoError::kind] to separate malformed input from failed security checks.

#![deny(warnings)]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

#[macro_use]
extern crate tracing;

mod constants;

mod challenge;
mod client_data;
mod config;
mod crypto;
mod engine;
mod keys;
mod registration;
mod request;
mod response;
mod store;
mod u2f;
mod webauthn;
mod wire;

pub mod error;

#[cfg(test)]
mod fixtures;

/// Protocol bindings
pub mod proto {
    pub use fido_rp_proto::*;
}

pub use crate::challenge::Challenge;
pub use crate::client_data::{ClientData, ClientDataType};
pub use crate::config::{RelyingPartyBuilder, RelyingPartyConfig};
pub use crate::constants::{CHALLENGE_SIZE_BYTES, PUBLIC_KEY_LEN};
pub use crate::error::{ClientErrorCode, ErrorKind, FidoError, FidoResult};
pub use crate::keys::{AttestationCertificate, HasKeyHandle, KeyHandle, PublicKey};
pub use crate::registration::Registration;
pub use crate::request::{RegisterRequest, SignRequest};
pub use crate::response::u2f::{U2fRegisterResponse, U2fSignResponse};
pub use crate::response::webauthn::{WebauthnRegisterResponse, WebauthnSignResponse};
pub use crate::response::{AuthenticationCeremony, RegistrationCeremony};
pub use crate::store::{EphemeralRegistrationStore, RegistrationStore};
pub use crate::u2f::U2fServer;
pub use crate::webauthn::RelyingPartyServer;
