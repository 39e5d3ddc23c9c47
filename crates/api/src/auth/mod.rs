//! Authentication primitives.
//!
//! - [`jwt`] -- validation (and issuance, for the sign-in flow and tests) of
//!   the HS256 access tokens minted by the auth provider.

pub mod jwt;
