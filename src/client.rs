//! The top-level client facade.
//!
//! [`GraphClient`] bundles an [`AuthSession`] with the request executor
//! and hands out resource services that share them.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AuthSession, ClientIdentity, LoginOutcome, SessionState};
use crate::config::Authority;
use crate::error::{Error, Result};
use crate::resources::workbooks::{Application, Comments, Range, Table, Workbook, Worksheets};
use crate::resources::{
    DriveItems, Drives, Groups, Mail, Notes, PersonalContacts, Search, Users,
};
use crate::storage::TokenStore;
use crate::transport::GraphHttpClient;

/// Microsoft Graph client: owns the session lifecycle and hands out
/// resource services.
#[derive(Debug)]
pub struct GraphClient {
    session: Arc<AuthSession>,
    executor: Arc<GraphHttpClient>,
}

impl GraphClient {
    /// Start building a client.
    pub fn builder() -> GraphClientBuilder {
        GraphClientBuilder::new()
    }

    /// The underlying authentication session.
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Current session lifecycle state.
    pub async fn state(&self) -> SessionState {
        self.session.state().await
    }

    /// Load persisted credentials and attempt silent authentication.
    /// On [`LoginOutcome::InteractiveRequired`], direct the user to the
    /// URL and pass the captured redirect to
    /// [`complete_login`](Self::complete_login).
    pub async fn login(&self) -> Result<LoginOutcome> {
        self.session.login().await
    }

    /// Finish the interactive flow with the captured redirect URL.
    pub async fn complete_login(&self, redirect_url: &str) -> Result<()> {
        self.session.complete_login(redirect_url).await
    }

    pub fn users(&self) -> Users {
        Users::new(self.executor.clone())
    }

    pub fn groups(&self) -> Groups {
        Groups::new(self.executor.clone())
    }

    pub fn search(&self) -> Search {
        Search::new(self.executor.clone())
    }

    pub fn drives(&self) -> Drives {
        Drives::new(self.executor.clone())
    }

    pub fn drive_items(&self) -> DriveItems {
        DriveItems::new(self.executor.clone())
    }

    pub fn mail(&self) -> Mail {
        Mail::new(self.executor.clone())
    }

    pub fn notes(&self) -> Notes {
        Notes::new(self.executor.clone())
    }

    pub fn personal_contacts(&self) -> PersonalContacts {
        PersonalContacts::new(self.executor.clone())
    }

    pub fn workbook(&self) -> Workbook {
        Workbook::new(self.executor.clone())
    }

    pub fn worksheets(&self) -> Worksheets {
        Worksheets::new(self.executor.clone())
    }

    pub fn ranges(&self) -> Range {
        Range::new(self.executor.clone())
    }

    pub fn tables(&self) -> Table {
        Table::new(self.executor.clone())
    }

    pub fn workbook_comments(&self) -> Comments {
        Comments::new(self.executor.clone())
    }

    pub fn workbook_application(&self) -> Application {
        Application::new(self.executor.clone())
    }
}

/// Builder for [`GraphClient`].
#[derive(Debug, Default)]
pub struct GraphClientBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    scopes: Vec<String>,
    authority: Authority,
    api_version: Option<String>,
    credentials_path: Option<PathBuf>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    authority_base: Option<String>,
    resource_root: Option<String>,
}

impl GraphClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Application (client) id from the app registration.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Client secret from the app registration.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Redirect URI registered for the application.
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Add one permission scope. Include `offline_access` to receive
    /// refresh tokens.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Replace the scope list wholesale.
    pub fn scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Identity authority to authenticate against. Defaults to Azure AD
    /// with the `consumers` tenant.
    pub fn authority(mut self, authority: Authority) -> Self {
        self.authority = authority;
        self
    }

    /// Use a non-default Graph API version (e.g. `beta`).
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Where the credential bundle is persisted. Defaults to
    /// `~/.config/msgraph-client/credentials.json`.
    pub fn credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    /// Per-request timeout for resource calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a pre-configured `reqwest` client for the token endpoint
    /// calls (custom TLS, proxies).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Override the authority base URL. Intended for tests.
    pub fn authority_base(mut self, base: impl Into<String>) -> Self {
        self.authority_base = Some(base.into());
        self
    }

    /// Override the Graph resource root. Intended for tests.
    pub fn resource_root(mut self, root: impl Into<String>) -> Self {
        self.resource_root = Some(root.into());
        self
    }

    /// Construct the client.
    pub fn build(self) -> Result<GraphClient> {
        let client_id = self
            .client_id
            .ok_or_else(|| Error::Config("client_id is required".into()))?;
        let client_secret = self
            .client_secret
            .ok_or_else(|| Error::Config("client_secret is required".into()))?;
        let redirect_uri = self
            .redirect_uri
            .ok_or_else(|| Error::Config("redirect_uri is required".into()))?;
        if self.scopes.is_empty() {
            return Err(Error::Config("at least one scope is required".into()));
        }

        let identity = ClientIdentity {
            client_id,
            client_secret,
            redirect_uri,
            scopes: self.scopes,
        };
        let store = match self.credentials_path {
            Some(path) => TokenStore::new(path),
            None => TokenStore::default_path()?,
        };

        let mut session = AuthSession::new(identity, self.authority, store);
        if let Some(base) = self.authority_base {
            session = session.with_authority_base(base);
        }
        if let Some(client) = self.http_client {
            session = session.with_client(client);
        }
        let session = Arc::new(session);

        let mut executor = match self.timeout {
            Some(timeout) => GraphHttpClient::with_timeout(session.clone(), timeout)?,
            None => GraphHttpClient::new(session.clone())?,
        };
        if let Some(root) = self.resource_root {
            executor = executor.with_resource_root(root);
        }
        if let Some(version) = self.api_version {
            executor = executor.with_api_version(version);
        }

        Ok(GraphClient {
            session,
            executor: Arc::new(executor),
        })
    }
}
