//! Endpoint constants and URL builders for the Microsoft identity
//! platform and the Graph resource root.

use std::time::Duration;

/// Graph resource root.
pub const RESOURCE: &str = "https://graph.microsoft.com";

/// Default Graph API version.
pub const DEFAULT_API_VERSION: &str = "v1.0";

/// Azure AD authority root.
pub const AUTHORITY_URL: &str = "https://login.microsoftonline.com";

/// Azure AD v2.0 authorization endpoint, relative to the tenant.
pub const AUTH_ENDPOINT: &str = "/oauth2/v2.0/authorize";

/// Azure AD v2.0 token endpoint, relative to the tenant.
pub const TOKEN_ENDPOINT: &str = "/oauth2/v2.0/token";

/// Legacy Windows Live (Office 365 consumer) authority.
pub const OFFICE365_AUTHORITY_URL: &str = "https://login.live.com";

/// Legacy Windows Live authorization endpoint.
pub const OFFICE365_AUTH_ENDPOINT: &str = "/oauth20_authorize.srf";

/// Legacy Windows Live token endpoint.
pub const OFFICE365_TOKEN_ENDPOINT: &str = "/oauth20_token.srf";

/// Safety margin subtracted from token lifetimes before any expiry
/// comparison, so a token is refreshed slightly before the provider
/// invalidates it.
pub const EXPIRY_SAFETY_MARGIN_SECS: i64 = 60;

/// Minimum remaining access-token lifetime accepted by `validate()`
/// before a refresh is triggered.
pub const DEFAULT_VALIDATION_THRESHOLD_SECS: i64 = 60;

/// Length of the anti-CSRF `state` token on the authorization URL.
pub const STATE_TOKEN_LEN: usize = 10;

/// Connect timeout for HTTP requests.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for resource requests.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Tenant segment of the Azure AD authority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccountType {
    /// Personal Microsoft accounts only.
    #[default]
    Consumers,
    /// Both personal and work/school accounts.
    Common,
    /// Work/school accounts only.
    Organizations,
    /// A specific directory tenant id or domain.
    Tenant(String),
}

impl AccountType {
    /// The path segment used in the authority URL.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Consumers => "consumers",
            Self::Common => "common",
            Self::Organizations => "organizations",
            Self::Tenant(id) => id,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity authority the client authenticates against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authority {
    /// Azure AD v2.0 endpoints under `login.microsoftonline.com/{tenant}`.
    AzureAd(AccountType),
    /// Legacy Windows Live endpoints under `login.live.com`.
    WindowsLive,
}

impl Default for Authority {
    fn default() -> Self {
        Self::AzureAd(AccountType::default())
    }
}

impl Authority {
    /// Absolute authorization endpoint for this authority.
    pub fn authorize_url(&self, base_override: Option<&str>) -> String {
        match self {
            Self::AzureAd(account) => format!(
                "{}/{}{}",
                base_override.unwrap_or(AUTHORITY_URL),
                account.as_str(),
                AUTH_ENDPOINT
            ),
            Self::WindowsLive => format!(
                "{}{}",
                base_override.unwrap_or(OFFICE365_AUTHORITY_URL),
                OFFICE365_AUTH_ENDPOINT
            ),
        }
    }

    /// Absolute token endpoint for this authority.
    pub fn token_url(&self, base_override: Option<&str>) -> String {
        match self {
            Self::AzureAd(account) => format!(
                "{}/{}{}",
                base_override.unwrap_or(AUTHORITY_URL),
                account.as_str(),
                TOKEN_ENDPOINT
            ),
            Self::WindowsLive => format!(
                "{}{}",
                base_override.unwrap_or(OFFICE365_AUTHORITY_URL),
                OFFICE365_TOKEN_ENDPOINT
            ),
        }
    }
}

/// Builds the absolute URL for a Graph resource endpoint.
///
/// Leading slashes on `endpoint` are tolerated so catalogue methods can
/// use either form.
pub fn resource_url(resource_root: &str, api_version: &str, endpoint: &str) -> String {
    format!(
        "{}/{}/{}",
        resource_root.trim_end_matches('/'),
        api_version,
        endpoint.trim_start_matches('/')
    )
}
