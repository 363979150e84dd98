//! Data models for credentials and token-endpoint responses.

pub mod token;

pub use token::{TokenBundle, TokenResponse};
