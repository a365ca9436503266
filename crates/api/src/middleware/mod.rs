//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`request_id::RequestId`] -- Reads the correlation id set by the request-id layer.
//! - [`extract::AppJson`], [`extract::AppQuery`], [`extract::AppPath`] -- Enveloped rejections.

pub mod auth;
pub mod extract;
pub mod request_id;
