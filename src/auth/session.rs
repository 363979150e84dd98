//! The authentication session state machine.
//!
//! Moves a client from "no credentials" through authorization-code
//! exchange, silent refresh, and authenticated request execution.
//! Thread-safe: the bundle sits behind an `RwLock` so concurrent
//! `validate()` calls collapse into a single refresh.

use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::config::{Authority, DEFAULT_VALIDATION_THRESHOLD_SECS};
use crate::error::{Error, Result};
use crate::models::TokenBundle;
use crate::storage::TokenStore;

use super::oauth::{self, ClientIdentity};
use super::state::generate_state_token;

/// Observable lifecycle states of an [`AuthSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No credentials loaded yet.
    Unauthenticated,
    /// A persisted or refreshed bundle is live; no user interaction needed.
    SilentlyAuthenticated,
    /// An authorization URL was issued; waiting for the redirect capture.
    AwaitingInteractiveCode,
    /// A bundle was obtained through the interactive code exchange.
    Authenticated,
    /// The refresh token was rejected; the persisted file must be
    /// discarded and the interactive flow re-run.
    Failed,
}

/// Result of [`AuthSession::login`].
#[derive(Debug)]
pub enum LoginOutcome {
    /// A valid bundle is in place; requests can be issued immediately.
    Authenticated,
    /// Silent authentication was not possible. Direct the user to the
    /// URL, capture the redirect, and call
    /// [`AuthSession::complete_login`] with it.
    InteractiveRequired { authorization_url: String },
}

struct Inner {
    bundle: Option<TokenBundle>,
    state: SessionState,
    /// Anti-CSRF token issued with the last authorization URL.
    csrf_token: Option<String>,
}

/// Owns the OAuth2 state machine and the latest [`TokenBundle`].
///
/// One session per client instance; no process-wide singleton.
pub struct AuthSession {
    identity: ClientIdentity,
    authority: Authority,
    authority_base: Option<String>,
    store: TokenStore,
    http: reqwest::Client,
    inner: RwLock<Inner>,
}

impl AuthSession {
    /// Create a session from a client registration and a token store.
    pub fn new(identity: ClientIdentity, authority: Authority, store: TokenStore) -> Self {
        Self {
            identity,
            authority,
            authority_base: None,
            store,
            http: reqwest::Client::new(),
            inner: RwLock::new(Inner {
                bundle: None,
                state: SessionState::Unauthenticated,
                csrf_token: None,
            }),
        }
    }

    /// Set the HTTP client (custom TLS config, timeouts).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Override the authority base URL. Used by tests to point the
    /// token endpoint at a mock server.
    pub fn with_authority_base(mut self, base: impl Into<String>) -> Self {
        self.authority_base = Some(base.into());
        self
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> SessionState {
        self.inner.read().await.state
    }

    /// The current access token, if a bundle is in place.
    pub async fn access_token(&self) -> Result<String> {
        let inner = self.inner.read().await;
        inner
            .bundle
            .as_ref()
            .map(|b| b.access_token.clone())
            .ok_or(Error::NotAuthenticated)
    }

    /// Snapshot of the current bundle.
    pub async fn bundle(&self) -> Option<TokenBundle> {
        self.inner.read().await.bundle.clone()
    }

    fn token_url(&self) -> String {
        self.authority.token_url(self.authority_base.as_deref())
    }

    /// Load persisted state and attempt silent authentication.
    ///
    /// Falls back to the interactive flow: the returned
    /// [`LoginOutcome::InteractiveRequired`] carries the authorization
    /// URL the user must visit.
    pub async fn login(&self) -> Result<LoginOutcome> {
        match self.store.load() {
            Ok(bundle) => {
                let mut inner = self.inner.write().await;
                inner.bundle = Some(bundle);
            }
            Err(e) if e.is_recoverable_state() => {
                debug!("No usable persisted state: {}", e);
            }
            Err(e) => return Err(e),
        }

        if self.silent_sso().await? {
            let mut inner = self.inner.write().await;
            inner.state = SessionState::SilentlyAuthenticated;
            info!("Silent authentication succeeded");
            return Ok(LoginOutcome::Authenticated);
        }

        let authorization_url = self.authorization_url().await;
        let mut inner = self.inner.write().await;
        inner.state = SessionState::AwaitingInteractiveCode;
        info!("Interactive authorization required");
        Ok(LoginOutcome::InteractiveRequired { authorization_url })
    }

    /// Attempt silent authentication with the loaded bundle.
    ///
    /// Policy: a live access token wins outright; otherwise any
    /// non-empty refresh token is tried and the provider's verdict is
    /// authoritative. A rejection here falls back to the interactive
    /// flow instead of failing the session.
    async fn silent_sso(&self) -> Result<bool> {
        let (access_live, has_refresh) = {
            let inner = self.inner.read().await;
            match inner.bundle.as_ref() {
                Some(b) => (b.access_is_live(), b.has_refresh_token()),
                None => return Ok(false),
            }
        };

        if access_live {
            return Ok(true);
        }
        if !has_refresh {
            return Ok(false);
        }

        match self.refresh_inner(Some(DEFAULT_VALIDATION_THRESHOLD_SECS)).await {
            Ok(()) => Ok(true),
            Err(Error::ProviderRejection { error, description }) => {
                warn!(error, description, "Silent refresh rejected; falling back to interactive flow");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Build the authorization URL with a freshly generated anti-CSRF
    /// `state` token. The token is recorded so the redirect capture can
    /// be checked against it.
    pub async fn authorization_url(&self) -> String {
        let csrf = generate_state_token();
        let url = format!(
            "{}?client_id={}&redirect_uri={}&scope={}&response_type=code&response_mode=query&state={}",
            self.authority.authorize_url(self.authority_base.as_deref()),
            urlencoding::encode(&self.identity.client_id),
            urlencoding::encode(&self.identity.redirect_uri),
            urlencoding::encode(&self.identity.scope_string()),
            urlencoding::encode(&csrf),
        );
        let mut inner = self.inner.write().await;
        inner.csrf_token = Some(csrf);
        url
    }

    /// Complete the interactive leg: extract the authorization code
    /// from the captured redirect URL, exchange it, and persist the
    /// resulting bundle.
    pub async fn complete_login(&self, redirect_url: &str) -> Result<()> {
        let capture = parse_redirect_capture(redirect_url, &self.identity.redirect_uri)?;

        {
            let inner = self.inner.read().await;
            if let (Some(expected), Some(received)) = (&inner.csrf_token, &capture.state) {
                if expected != received {
                    return Err(Error::Config(
                        "state token on the redirect does not match the one issued".into(),
                    ));
                }
            }
        }

        let result = oauth::exchange_code(
            &self.http,
            &self.token_url(),
            &self.identity,
            &capture.code,
        )
        .await;

        match result {
            Ok(response) => {
                let bundle = response.into_bundle(None);
                self.store.save(&bundle)?;
                let mut inner = self.inner.write().await;
                inner.bundle = Some(bundle);
                inner.state = SessionState::Authenticated;
                inner.csrf_token = None;
                info!("Authorization code exchanged; session authenticated");
                Ok(())
            }
            // Only a provider verdict fails the session; a transport
            // error leaves it awaiting the code so the capture can be
            // re-pasted.
            Err(e @ Error::ProviderRejection { .. }) => {
                let mut inner = self.inner.write().await;
                inner.state = SessionState::Failed;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Ensure the access token is valid for at least `min_seconds`,
    /// refreshing synchronously when it is not.
    pub async fn validate(&self, min_seconds: i64) -> Result<()> {
        let remaining = {
            let inner = self.inner.read().await;
            match inner.bundle.as_ref() {
                Some(b) => b.remaining_access_seconds(),
                None => return Err(Error::NotAuthenticated),
            }
        };
        if remaining < min_seconds {
            self.refresh_with(Some(min_seconds)).await?;
        }
        Ok(())
    }

    /// [`validate`](Self::validate) with the default 60-second threshold.
    pub async fn validate_default(&self) -> Result<()> {
        self.validate(DEFAULT_VALIDATION_THRESHOLD_SECS).await
    }

    /// Refresh the access token with the `refresh_token` grant,
    /// unconditionally.
    ///
    /// A provider rejection is fatal for the session: the state moves
    /// to [`SessionState::Failed`] and the error instructs the caller
    /// to discard the persisted file. No internal retry.
    pub async fn refresh(&self) -> Result<()> {
        self.refresh_with(None).await
    }

    /// Refresh with the fatal-state bookkeeping. `min_seconds` is the
    /// threshold the post-lock re-check uses; `None` always refreshes.
    async fn refresh_with(&self, min_seconds: Option<i64>) -> Result<()> {
        match self.refresh_inner(min_seconds).await {
            Ok(()) => Ok(()),
            Err(Error::ProviderRejection { error, description }) => {
                let mut inner = self.inner.write().await;
                inner.state = SessionState::Failed;
                let path = self.store.path().display();
                error!(
                    error,
                    description,
                    "Refresh token rejected; delete {} and re-run the interactive login",
                    path
                );
                Err(Error::ProviderRejection {
                    error,
                    description: format!(
                        "{} (delete {} and re-run the interactive login)",
                        description, path
                    ),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// The refresh call itself, without the fatal-state bookkeeping.
    async fn refresh_inner(&self, min_seconds: Option<i64>) -> Result<()> {
        let mut inner = self.inner.write().await;
        let bundle = inner.bundle.as_ref().ok_or(Error::NotAuthenticated)?;

        // Another task may have refreshed while we waited for the lock;
        // the re-check uses the caller's own threshold.
        if let Some(threshold) = min_seconds {
            if bundle.remaining_access_seconds() >= threshold {
                return Ok(());
            }
        }

        let previous_refresh = bundle.refresh_token.clone();
        let response = oauth::refresh_token(
            &self.http,
            &self.token_url(),
            &self.identity,
            &previous_refresh,
        )
        .await?;

        let updated = response.into_bundle(Some(&previous_refresh));
        self.store.save(&updated)?;
        inner.bundle = Some(updated);
        if inner.state != SessionState::Authenticated {
            inner.state = SessionState::SilentlyAuthenticated;
        }
        info!("Access token refreshed");
        Ok(())
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("client_id", &self.identity.client_id)
            .field("authority", &self.authority)
            .field("store", &self.store.path())
            .finish()
    }
}

struct RedirectCapture {
    code: String,
    state: Option<String>,
}

/// Extract the authorization code (and `state`, when present) from the
/// captured redirect URL.
///
/// Accepts a full URL, a bare query string, and - for compatibility
/// with captures split on `=` only - the legacy composite key
/// `"<redirect_uri>?code"`.
fn parse_redirect_capture(input: &str, redirect_uri: &str) -> Result<RedirectCapture> {
    // Full URL with a query component.
    if let Ok(url) = url::Url::parse(input) {
        let mut code = None;
        let mut state = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "code" => code = Some(value.into_owned()),
                "state" => state = Some(value.into_owned()),
                _ => {}
            }
        }
        if let Some(code) = code {
            return Ok(RedirectCapture { code, state });
        }
    }

    // Bare query string, or the legacy composite key.
    let legacy_key = format!("{}?code", redirect_uri);
    let mut code = None;
    let mut state = None;
    for (key, value) in url::form_urlencoded::parse(input.trim_start_matches('?').as_bytes()) {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            k if k == legacy_key => code = Some(value.into_owned()),
            _ => {}
        }
    }

    match code {
        Some(code) if !code.is_empty() => Ok(RedirectCapture { code, state }),
        _ => Err(Error::Config(
            "no authorization code found in the pasted redirect URL".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccountType;

    fn identity() -> ClientIdentity {
        ClientIdentity {
            client_id: "client-id".into(),
            client_secret: "client-secret".into(),
            redirect_uri: "https://localhost/redirect".into(),
            scopes: vec!["User.Read".into(), "offline_access".into()],
        }
    }

    fn session_at(dir: &tempfile::TempDir) -> AuthSession {
        AuthSession::new(
            identity(),
            Authority::AzureAd(AccountType::Consumers),
            TokenStore::new(dir.path().join("credentials.json")),
        )
    }

    #[tokio::test]
    async fn test_initial_state() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_at(&dir);
        assert_eq!(session.state().await, SessionState::Unauthenticated);
        assert!(matches!(
            session.access_token().await,
            Err(Error::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_authorization_url_contents() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_at(&dir);
        let url = session.authorization_url().await;

        assert!(url.starts_with(
            "https://login.microsoftonline.com/consumers/oauth2/v2.0/authorize?"
        ));
        assert!(url.contains("client_id=client-id"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Flocalhost%2Fredirect"));
        assert!(url.contains("scope=User.Read%20offline_access"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("response_mode=query"));
        assert!(url.contains("state="));
    }

    #[tokio::test]
    async fn test_authorization_url_rotates_state_token() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_at(&dir);
        let first = session.authorization_url().await;
        let second = session.authorization_url().await;
        let state_of = |u: &str| {
            u.split("state=")
                .nth(1)
                .unwrap()
                .split('&')
                .next()
                .unwrap()
                .to_string()
        };
        assert_ne!(state_of(&first), state_of(&second));
    }

    #[tokio::test]
    async fn test_validate_skips_refresh_when_live() {
        // Authority base points at a closed port; any network call
        // would error, so success proves no call was made.
        let dir = tempfile::tempdir().unwrap();
        let session = session_at(&dir).with_authority_base("http://127.0.0.1:1");
        {
            let mut inner = session.inner.write().await;
            inner.bundle = Some(TokenBundle::from_wire(
                "access".into(),
                "refresh".into(),
                None,
                3600,
                7200,
            ));
        }
        session.validate(60).await.unwrap();
    }

    #[tokio::test]
    async fn test_validate_without_bundle_is_not_authenticated() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_at(&dir);
        assert!(matches!(
            session.validate(60).await,
            Err(Error::NotAuthenticated)
        ));
    }

    #[test]
    fn test_parse_redirect_full_url() {
        let capture = parse_redirect_capture(
            "https://localhost/redirect?code=M.ABC-123&state=qwertyuiop",
            "https://localhost/redirect",
        )
        .unwrap();
        assert_eq!(capture.code, "M.ABC-123");
        assert_eq!(capture.state.as_deref(), Some("qwertyuiop"));
    }

    #[test]
    fn test_parse_redirect_bare_query() {
        let capture =
            parse_redirect_capture("code=M.ABC-123&state=xyz", "https://localhost/redirect")
                .unwrap();
        assert_eq!(capture.code, "M.ABC-123");
    }

    #[test]
    fn test_parse_redirect_legacy_composite_key() {
        // Captures split on '=' only produce this composite key shape.
        let capture = parse_redirect_capture(
            "https://localhost/redirect?code=M.ABC-123",
            "https://localhost/redirect",
        )
        .unwrap();
        assert_eq!(capture.code, "M.ABC-123");

        let legacy = parse_redirect_capture(
            "https%3A%2F%2Flocalhost%2Fredirect%3Fcode=M.XYZ-9",
            "https://localhost/redirect",
        )
        .unwrap();
        assert_eq!(legacy.code, "M.XYZ-9");
    }

    #[test]
    fn test_parse_redirect_without_code_fails() {
        assert!(parse_redirect_capture(
            "https://localhost/redirect?error=access_denied",
            "https://localhost/redirect",
        )
        .is_err());
    }
}
