//! The FIDO2 demo protocol bindings.
//!
//! These are the request shapes handed to the `WebAuthn` client helper and
//! the options it is constructed with. The helper forwards them to the
//! server's webauthn endpoints, so field names here are wire names.

#![deny(warnings)]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

pub mod constants;
pub mod v1;
