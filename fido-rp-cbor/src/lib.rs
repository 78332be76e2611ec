//! A decoder for the Concise Binary Object Representation (CBOR, RFC 8949) as it appears inside
//! FIDO attestation objects and COSE keys.
//!
//! The decoder turns untrusted bytes into a generic [Value] tree. Every length read from the input
//! is checked against the remaining buffer before it is used, nesting depth is bounded, and the
//! indefinite-length "break" marker never escapes the loop that consumes it.
//!
//! ```
//! use fido_rp_cbor::{from_slice, Value};
//!
//! // {1: 2, 3: -7}
//! let v = from_slice(&[0xa2, 0x01, 0x02, 0x03, 0x26]).expect("invalid cbor");
//! assert_eq!(v.get_int(3), Some(&Value::Integer(-7)));
//! ```

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

mod decode;
mod error;
mod value;


pub use crate::decode::{from_slice, Decoder, DEFAULT_MAX_DEPTH};
pub use crate::error::CborError;
pub use crate::value::Value;
