//! Authentication primitives.
//!
//! - [`demo`] -- the configured demo credential pair.
//! - [`jwt`] -- JWT access-token generation and validation.

pub mod demo;
pub mod jwt;
