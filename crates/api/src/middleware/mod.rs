//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated session from a JWT
//!   Bearer token. Required on every editing/listing route.

pub mod auth;
