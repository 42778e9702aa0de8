//! Request extractors shared by handlers.
//!
//! - [`auth::AuthUser`] -- The verified caller id supplied by the upstream
//!   auth collaborator.
//! - [`extract::ApiJson`] / [`extract::ApiQuery`] -- Body and query
//!   extractors that reject with the JSON error envelope.

pub mod auth;
pub mod extract;
