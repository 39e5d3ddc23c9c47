//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated caller from a JWT Bearer
//!   token. Use `Option<AuthUser>` where the handler decides what an anonymous
//!   caller gets.

pub mod auth;
