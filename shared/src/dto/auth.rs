use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

/// Authentication response (login success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: User,
}

/// Token refresh request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token refresh response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Token pair held by the session store and mirrored into the persisted
/// session document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthTokens {
    /// Merge a refresh response into the current pair. The refresh token is
    /// kept when the backend rotates only the access token.
    pub fn merged_with(&self, refreshed: &RefreshResponse) -> Self {
        AuthTokens {
            access_token: refreshed.access_token.clone(),
            refresh_token: refreshed
                .refresh_token
                .clone()
                .or_else(|| self.refresh_token.clone()),
            expires_at: refreshed.expires_at,
        }
    }
}

impl From<&AuthResponse> for AuthTokens {
    fn from(response: &AuthResponse) -> Self {
        AuthTokens {
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            expires_at: response.expires_at,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_with_keeps_refresh_token_when_not_rotated() {
        let tokens = AuthTokens {
            access_token: "tok1".to_string(),
            refresh_token: Some("refresh1".to_string()),
            expires_at: None,
        };
        let response = RefreshResponse {
            access_token: "tok2".to_string(),
            refresh_token: None,
            expires_at: None,
        };

        let merged = tokens.merged_with(&response);
        assert_eq!(merged.access_token, "tok2");
        assert_eq!(merged.refresh_token, Some("refresh1".to_string()));
    }

    #[test]
    fn merged_with_takes_rotated_refresh_token() {
        let tokens = AuthTokens {
            access_token: "tok1".to_string(),
            refresh_token: Some("refresh1".to_string()),
            expires_at: None,
        };
        let response = RefreshResponse {
            access_token: "tok2".to_string(),
            refresh_token: Some("refresh2".to_string()),
            expires_at: None,
        };

        let merged = tokens.merged_with(&response);
        assert_eq!(merged.refresh_token, Some("refresh2".to_string()));
    }
}
