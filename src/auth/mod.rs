//! OAuth2 authorization-code + refresh-token session lifecycle.

pub mod oauth;
pub mod session;
pub mod state;

pub use oauth::ClientIdentity;
pub use session::{AuthSession, LoginOutcome, SessionState};
