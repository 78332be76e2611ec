//! JSON protocol structures and representations for communication between a FIDO relying
//! party and its clients: the U2F JavaScript API messages, Webauthn credential creation and
//! request options, the credentials returned by the browser, and the client data both protocols
//! sign over.

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

pub mod base64_data;
pub mod client_data;
pub mod u2f;
pub mod webauthn;

pub use base64_data::Base64UrlSafeData;
pub use client_data::*;
pub use u2f::*;
pub use webauthn::*;
