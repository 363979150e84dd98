//! The persisted credential unit and the token-endpoint wire shape.

use serde::{Deserialize, Serialize};

use crate::config::EXPIRY_SAFETY_MARGIN_SECS;

/// The persisted credential bundle.
///
/// Expiry fields are absolute Unix timestamps. The conversion from the
/// provider's relative `expires_in`/`ext_expires_in` seconds happens
/// exactly once, in [`TokenBundle::from_wire`], so expiry checks never
/// recompute it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBundle {
    /// OAuth access token.
    pub access_token: String,
    /// OAuth refresh token.
    pub refresh_token: String,
    /// OpenID Connect id token, when the scope set requests one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    /// Unix timestamp when the access token expires.
    pub access_expires_at: i64,
    /// Unix timestamp when the refresh token expires.
    pub refresh_expires_at: i64,
}

impl TokenBundle {
    /// Build a bundle from a token-endpoint response, converting the
    /// relative TTLs to absolute instants.
    ///
    /// A TTL of zero or below yields an already-expired instant, not an
    /// error; downstream checks treat `now >= expires_at` as expired.
    pub fn from_wire(
        access_token: String,
        refresh_token: String,
        id_token: Option<String>,
        expires_in: i64,
        ext_expires_in: i64,
    ) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            access_token,
            refresh_token,
            id_token,
            access_expires_at: now + expires_in,
            refresh_expires_at: now + ext_expires_in,
        }
    }

    /// Seconds of usable access-token lifetime left, after the safety
    /// margin. Clamped to zero, never negative.
    #[must_use]
    pub fn remaining_access_seconds(&self) -> i64 {
        remaining(self.access_expires_at)
    }

    /// Seconds of usable refresh-token lifetime left, after the safety
    /// margin. Clamped to zero, never negative.
    #[must_use]
    pub fn remaining_refresh_seconds(&self) -> i64 {
        remaining(self.refresh_expires_at)
    }

    /// Whether the access token is still usable.
    #[must_use]
    pub fn access_is_live(&self) -> bool {
        self.remaining_access_seconds() > 0
    }

    /// Whether a refresh token is present at all.
    #[must_use]
    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.is_empty()
    }
}

fn remaining(expires_at: i64) -> i64 {
    let now = chrono::Utc::now().timestamp();
    (expires_at - now - EXPIRY_SAFETY_MARGIN_SECS).max(0)
}

/// Successful token-endpoint response for both grant types.
///
/// `ext_expires_in` falls back to `expires_in` when the provider omits
/// it (the Windows Live endpoints do not send it).
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    pub expires_in: i64,
    #[serde(default)]
    pub ext_expires_in: Option<i64>,
}

impl TokenResponse {
    /// Convert into a [`TokenBundle`], carrying the previous refresh
    /// token forward when the provider does not rotate it.
    pub fn into_bundle(self, previous_refresh_token: Option<&str>) -> TokenBundle {
        let refresh_token = match self.refresh_token {
            Some(rt) if !rt.is_empty() => rt,
            _ => previous_refresh_token.unwrap_or_default().to_string(),
        };
        let ext_expires_in = self.ext_expires_in.unwrap_or(self.expires_in);
        TokenBundle::from_wire(
            self.access_token,
            refresh_token,
            self.id_token,
            self.expires_in,
            ext_expires_in,
        )
    }
}
