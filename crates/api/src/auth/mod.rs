//! Session-token validation at the identity boundary.
//!
//! Token *issuance* belongs to the external identity provider; this service
//! only validates the HS256 tokens it receives on editing and listing
//! routes. The respond routes are intentionally public.

pub mod jwt;
