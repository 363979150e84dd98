//! Token-endpoint wire calls.
//!
//! Both grants are form-encoded POSTs against the authority's token
//! endpoint. A provider-reported `error` field is classified as
//! [`Error::ProviderRejection`]; transport failures propagate untouched.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::TokenResponse;

/// Error response from the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Immutable client registration used in every grant.
#[derive(Debug, Clone)]
pub struct ClientIdentity {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
}

impl ClientIdentity {
    /// The scope set, space-joined as the authorize endpoint expects.
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}

/// Exchange an authorization code for a token response.
///
/// `grant_type=authorization_code`.
pub async fn exchange_code(
    client: &reqwest::Client,
    token_url: &str,
    identity: &ClientIdentity,
    code: &str,
) -> Result<TokenResponse> {
    debug!("Exchanging authorization code at token endpoint");

    let form = [
        ("client_id", identity.client_id.as_str()),
        ("client_secret", identity.client_secret.as_str()),
        ("redirect_uri", identity.redirect_uri.as_str()),
        ("code", code),
        ("grant_type", "authorization_code"),
    ];

    post_grant(client, token_url, &form).await
}

/// Obtain a new access token from a refresh token.
///
/// `grant_type=refresh_token`.
pub async fn refresh_token(
    client: &reqwest::Client,
    token_url: &str,
    identity: &ClientIdentity,
    refresh_token: &str,
) -> Result<TokenResponse> {
    debug!("Refreshing access token at token endpoint");

    let form = [
        ("client_id", identity.client_id.as_str()),
        ("client_secret", identity.client_secret.as_str()),
        ("redirect_uri", identity.redirect_uri.as_str()),
        ("refresh_token", refresh_token),
        ("grant_type", "refresh_token"),
    ];

    post_grant(client, token_url, &form).await
}

async fn post_grant(
    client: &reqwest::Client,
    token_url: &str,
    form: &[(&str, &str)],
) -> Result<TokenResponse> {
    let response = client.post(token_url).form(form).send().await?;

    let status = response.status();
    let body = response.text().await?;

    // The provider reports grant failures through an `error` field,
    // sometimes on a 200 response. Check the body shape before the
    // status so both surface as the same rejection.
    if let Ok(rejection) = serde_json::from_str::<TokenErrorResponse>(&body) {
        warn!(
            error = %rejection.error,
            description = ?rejection.error_description,
            "Token endpoint rejected the grant"
        );
        return Err(Error::ProviderRejection {
            error: rejection.error,
            description: rejection.error_description.unwrap_or_else(|| {
                "delete the persisted credential file and re-run the interactive login".into()
            }),
        });
    }

    if !status.is_success() {
        return Err(Error::ProviderRejection {
            error: format!("http_{}", status.as_u16()),
            description: body,
        });
    }

    serde_json::from_str::<TokenResponse>(&body)
        .map_err(|e| Error::MalformedState(format!("unparseable token response: {}", e)))
}
