//! Session management for Webex API authentication.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::api_message;
use crate::{Environment, Error, Result};

/// Authentication session for the Webex API.
///
/// A session either wraps a static access token (personal, bot or service
/// app token) or the credentials of an OAuth integration, in which case
/// the access token is exchanged from the refresh token and refreshed when
/// it is about to expire.
///
/// # Thread Safety
///
/// `Session` is designed to be shared across multiple tasks. It uses
/// internal locking to safely manage token refresh.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
}

struct SessionInner {
    env: Environment,
    token_base_url: String,
    access_token: SecretString,
    expires_at: Option<DateTime<Utc>>,
    integration: Option<Integration>,
}

struct Integration {
    client_id: String,
    client_secret: SecretString,
    refresh_token: SecretString,
}

impl Session {
    /// Create a session from an existing access token.
    ///
    /// Static tokens carry no expiry information and are never refreshed.
    ///
    /// # Example
    ///
    /// ```
    /// use webex_rs::{Session, Environment};
    ///
    /// let session = Session::from_token("my-bot-token", Environment::Commercial);
    /// ```
    pub fn from_token(access_token: impl Into<String>, env: Environment) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                env,
                token_base_url: env.api_base_url().to_string(),
                access_token: SecretString::from(access_token.into()),
                expires_at: None,
                integration: None,
            })),
        }
    }

    /// Create a session for an OAuth integration.
    ///
    /// The refresh token is exchanged for an access token immediately.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use webex_rs::{Session, Environment};
    ///
    /// # async fn example() -> webex_rs::Result<()> {
    /// let session = Session::from_integration(
    ///     std::env::var("WEBEX_CLIENT_ID").unwrap(),
    ///     std::env::var("WEBEX_CLIENT_SECRET").unwrap(),
    ///     std::env::var("WEBEX_REFRESH_TOKEN").unwrap(),
    ///     Environment::Commercial,
    /// ).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn from_integration(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
        env: Environment,
    ) -> Result<Self> {
        Self::from_integration_at(
            env.api_base_url(),
            client_id,
            client_secret,
            refresh_token,
            env,
        )
        .await
    }

    /// Like [`from_integration`](Self::from_integration), but exchanging
    /// tokens against `token_base_url` instead of the environment default.
    pub async fn from_integration_at(
        token_base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
        env: Environment,
    ) -> Result<Self> {
        let token_base_url = token_base_url.into().trim_end_matches('/').to_string();
        let mut integration = Integration {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            refresh_token: SecretString::from(refresh_token.into()),
        };

        let token_response = Self::exchange_token(&token_base_url, &integration).await?;
        let expires_at = Utc::now() + Duration::seconds(token_response.expires_in);
        if let Some(rotated) = token_response.refresh_token {
            integration.refresh_token = SecretString::from(rotated);
        }

        Ok(Self {
            inner: Arc::new(RwLock::new(SessionInner {
                env,
                token_base_url,
                access_token: SecretString::from(token_response.access_token),
                expires_at: Some(expires_at),
                integration: Some(integration),
            })),
        })
    }

    /// Check if the access token has expired.
    ///
    /// Static tokens are never considered expired.
    pub async fn is_expired(&self) -> bool {
        let inner = self.inner.read().await;
        inner.expires_at.is_some_and(|at| Utc::now() >= at)
    }

    /// Check if the access token will expire within the given buffer period.
    pub async fn expires_within(&self, buffer: Duration) -> bool {
        let inner = self.inner.read().await;
        inner.expires_at.is_some_and(|at| Utc::now() + buffer >= at)
    }

    /// Get the access token expiration time, if known.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.expires_at
    }

    /// Returns `true` if this session can refresh its access token.
    pub async fn can_refresh(&self) -> bool {
        self.inner.read().await.integration.is_some()
    }

    /// Refresh the access token.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The session was created from a static token
    /// - The token endpoint rejects the refresh token
    pub async fn refresh(&self) -> Result<()> {
        let mut inner = self.inner.write().await;
        Self::refresh_locked(&mut inner).await
    }

    /// Refresh the access token unless it changed since `rejected` was read.
    ///
    /// Requests that fail with the same stale token at once trigger a
    /// single exchange; the others reuse its result. Returns `true` when
    /// this call performed the exchange.
    pub(crate) async fn refresh_if_current(&self, rejected: &SecretString) -> Result<bool> {
        let mut inner = self.inner.write().await;
        if inner.access_token.expose_secret() != rejected.expose_secret() {
            tracing::debug!("Access token already refreshed");
            return Ok(false);
        }
        Self::refresh_locked(&mut inner).await?;
        Ok(true)
    }

    /// Refresh the access token if it expires within `buffer`.
    ///
    /// Expiry is checked again once the write lock is held, so concurrent
    /// callers refresh only once.
    pub(crate) async fn refresh_if_expiring(&self, buffer: Duration) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let expiring = inner.integration.is_some()
            && inner.expires_at.is_some_and(|at| Utc::now() + buffer >= at);
        if !expiring {
            return Ok(false);
        }
        Self::refresh_locked(&mut inner).await?;
        Ok(true)
    }

    async fn refresh_locked(inner: &mut SessionInner) -> Result<()> {
        let Some(integration) = inner.integration.as_ref() else {
            return Err(Error::Authentication(
                "Session was created from a static token and cannot be refreshed".to_string(),
            ));
        };

        let token_response = Self::exchange_token(&inner.token_base_url, integration).await?;
        tracing::debug!(expires_in = token_response.expires_in, "Refreshed access token");

        inner.access_token = SecretString::from(token_response.access_token);
        inner.expires_at = Some(Utc::now() + Duration::seconds(token_response.expires_in));
        if let (Some(rotated), Some(integration)) =
            (token_response.refresh_token, inner.integration.as_mut())
        {
            integration.refresh_token = SecretString::from(rotated);
        }
        Ok(())
    }

    /// Get the current access token.
    ///
    /// This method does not check if the token is expired. Use
    /// `ensure_valid()` to refresh if needed first.
    pub(crate) async fn access_token(&self) -> SecretString {
        self.inner.read().await.access_token.clone()
    }

    /// Ensure the session is valid, refreshing if necessary.
    ///
    /// Refreshes when the token expires within five minutes and the session
    /// is able to refresh.
    pub async fn ensure_valid(&self) -> Result<()> {
        if self.can_refresh().await && self.expires_within(Duration::minutes(5)).await {
            self.refresh_if_expiring(Duration::minutes(5)).await?;
        }
        Ok(())
    }

    /// Get the environment this session is connected to.
    pub async fn environment(&self) -> Environment {
        self.inner.read().await.env
    }

    async fn exchange_token(base_url: &str, integration: &Integration) -> Result<TokenResponse> {
        let client = reqwest::Client::new();
        let url = format!("{}/access_token", base_url);

        let response = client
            .post(&url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("client_id", integration.client_id.as_str()),
                ("client_secret", integration.client_secret.expose_secret()),
                ("refresh_token", integration.refresh_token.expose_secret()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "Token exchange failed ({}): {}",
                status,
                api_message(&body).unwrap_or_else(|| body.to_string())
            )));
        }

        Ok(response.json().await?)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("env", &"...")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &"...")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session::from_token("super-secret-token", Environment::Commercial);
        let debug_str = format!("{:?}", session);

        assert!(!debug_str.contains("super-secret-token"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[tokio::test]
    async fn test_static_token_never_expires() {
        let session = Session::from_token("token", Environment::Commercial);
        assert!(!session.is_expired().await);
        assert!(!session.expires_within(Duration::days(365)).await);
        assert!(session.expires_at().await.is_none());
        assert!(session.ensure_valid().await.is_ok());
    }

    #[tokio::test]
    async fn test_static_token_refresh_fails() {
        let session = Session::from_token("token", Environment::Commercial);
        let err = session.refresh().await.unwrap_err();
        assert!(err.is_auth_error());
    }

    #[tokio::test]
    async fn test_refresh_skipped_when_token_changed() {
        let session = Session::from_token("current", Environment::Commercial);
        let stale = SecretString::from("stale".to_string());

        // A newer token is already in place, so no exchange is attempted
        assert!(!session.refresh_if_current(&stale).await.unwrap());
        assert_eq!(session.access_token().await.expose_secret(), "current");
    }

    #[tokio::test]
    async fn test_refresh_if_expiring_ignores_static_token() {
        let session = Session::from_token("token", Environment::Commercial);
        assert!(!session.refresh_if_expiring(Duration::days(365)).await.unwrap());
    }

    #[test]
    fn test_token_response_without_rotation() {
        let parsed: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc","expires_in":1209599}"#).unwrap();
        assert_eq!(parsed.access_token, "abc");
        assert!(parsed.refresh_token.is_none());
    }
}
