//! # msgraph-client
//!
//! Rust client library for the Microsoft Graph API.
//!
//! Covers the OAuth2 authorization-code and refresh-token lifecycle
//! (persisted credentials, silent sign-on, pre-request validation) and
//! a catalogue of resource services: users, groups, search, drives,
//! drive items, mail, OneNote, personal contacts, and Excel workbooks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use msgraph_client::{GraphClient, LoginOutcome, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = GraphClient::builder()
//!         .client_id("<application-id>")
//!         .client_secret("<client-secret>")
//!         .redirect_uri("https://localhost/redirect")
//!         .scope("User.Read")
//!         .scope("offline_access")
//!         .build()?;
//!
//!     match client.login().await? {
//!         LoginOutcome::Authenticated => {}
//!         LoginOutcome::InteractiveRequired { authorization_url } => {
//!             println!("Visit: {authorization_url}");
//!             let redirect = "<paste the redirect URL here>";
//!             client.complete_login(redirect).await?;
//!         }
//!     }
//!
//!     let me = client.users().list_users().await?;
//!     println!("{me}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;
pub mod storage;
pub mod transport;

// Re-exports for ergonomic usage
pub use auth::{AuthSession, ClientIdentity, LoginOutcome, SessionState};
pub use client::{GraphClient, GraphClientBuilder};
pub use config::{AccountType, Authority};
pub use error::{Error, Result};
pub use models::TokenBundle;
pub use storage::TokenStore;
pub use transport::{GraphHttpClient, GraphRequest, GraphSession};
