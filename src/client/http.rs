//! HTTP client implementation for the Webex API.

use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use chrono::Duration;
use futures_util::{Stream, StreamExt};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::api::{
    LocationsService, MeetingsService, PeopleService, RecordingsService, TelephonyService,
    WebhooksService, WorkspacesService,
};
use crate::auth::Session;
use crate::error::api_message;
use crate::{Environment, Error, Result};

use super::config::ClientConfig;
use super::paginated::PaginatedStreamBuilder;

/// Environment variable holding the access token used by [`WebexClient::from_env`].
pub const ACCESS_TOKEN_ENV: &str = "WEBEX_ACCESS_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "WEBEX_BASE_URL";

/// Chunked body of a binary download.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// The main client for interacting with the Webex API.
///
/// This client provides access to all API services through method calls
/// that return service structs. The client manages authentication,
/// request building, retries and response parsing.
///
/// # Example
///
/// ```no_run
/// use webex_rs::WebexClient;
/// use webex_rs::api::PeopleQuery;
///
/// # async fn example() -> webex_rs::Result<()> {
/// let client = WebexClient::new("your-access-token")?;
///
/// let me = client.people().me().await?;
/// println!("Hello, {:?}", me.display_name);
///
/// let admins = client
///     .people()
///     .list(PeopleQuery::default())
///     .collect_vec()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct WebexClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

impl WebexClient {
    /// Create a client for the commercial environment from an access token.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_session(
            Session::from_token(access_token, Environment::Commercial),
            ClientConfig::default(),
        )
    }

    /// Create a client from the `WEBEX_ACCESS_TOKEN` environment variable.
    ///
    /// `WEBEX_BASE_URL`, when set, overrides the API base URL.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(ACCESS_TOKEN_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", ACCESS_TOKEN_ENV)))?;

        let mut config = ClientConfig::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }

        Self::with_session(Session::from_token(token, Environment::Commercial), config)
    }

    /// Create a client for an OAuth integration.
    pub async fn from_integration(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
        env: Environment,
    ) -> Result<Self> {
        let session =
            Session::from_integration(client_id, client_secret, refresh_token, env).await?;
        Self::with_session(session, ClientConfig::default())
    }

    /// Create a new client with an existing session and custom configuration.
    pub fn with_session(session: Session, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
            }),
        })
    }

    /// Get the people service.
    pub fn people(&self) -> PeopleService {
        PeopleService::new(self.inner.clone())
    }

    /// Get the meetings service.
    pub fn meetings(&self) -> MeetingsService {
        MeetingsService::new(self.inner.clone())
    }

    /// Get the meeting recordings service.
    pub fn recordings(&self) -> RecordingsService {
        RecordingsService::new(self.inner.clone())
    }

    /// Get the workspaces service.
    pub fn workspaces(&self) -> WorkspacesService {
        WorkspacesService::new(self.inner.clone())
    }

    /// Get the webhooks service.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.inner.clone())
    }

    /// Get the locations service.
    pub fn locations(&self) -> LocationsService {
        LocationsService::new(self.inner.clone())
    }

    /// Get the calling configuration service.
    pub fn telephony(&self) -> TelephonyService {
        TelephonyService::new(self.inner.clone())
    }

    /// Paginate any list endpoint.
    ///
    /// Useful for endpoints this crate has no wrapper for.
    ///
    /// ```no_run
    /// # async fn example(client: webex_rs::WebexClient) -> webex_rs::Result<()> {
    /// let rooms: Vec<serde_json::Value> = client
    ///     .paginate("/rooms")
    ///     .param("type", "group")
    ///     .build()
    ///     .collect_vec()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn paginate<T>(&self, path: impl Into<String>) -> PaginatedStreamBuilder<T>
    where
        T: DeserializeOwned + 'static,
    {
        PaginatedStreamBuilder::new(self.inner.clone(), path)
    }

    /// Manually refresh the access token.
    pub async fn refresh_session(&self) -> Result<()> {
        self.inner.session.refresh().await
    }

    /// Get the current environment.
    pub async fn environment(&self) -> Environment {
        self.inner.session.environment().await
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Get the base URL for API requests.
    pub(crate) async fn base_url(&self) -> String {
        match &self.config.base_url {
            Some(url) => url.clone(),
            None => self.session.environment().await.api_base_url().to_string(),
        }
    }

    /// Resolve a path against the base URL; absolute URLs pass through.
    pub(crate) async fn url_for(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            return path.to_string();
        }
        let base = self.base_url().await;
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Ensure the session is valid before making a request.
    pub(crate) async fn ensure_session_valid(&self) -> Result<()> {
        if self.config.auto_refresh_session && self.session.can_refresh().await {
            let buffer = Duration::seconds(self.config.refresh_buffer_secs);
            if self.session.expires_within(buffer).await {
                self.session.refresh_if_expiring(buffer).await?;
            }
        }
        Ok(())
    }

    /// Build request headers authenticating with `token`.
    fn headers_for(token: &SecretString) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?,
        );

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Send a request, retrying transient failures.
    ///
    /// Retries statuses listed in the retry config and connect/timeout
    /// failures. `POST` is only retried on 429. A 401 triggers one token
    /// refresh when the session can refresh.
    async fn execute<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<reqwest::Response>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.ensure_session_valid().await?;

        let url = self.url_for(path).await;
        let retry = &self.config.retry;
        let idempotent = method != Method::POST;
        let mut attempt: u32 = 0;
        let mut refreshed = false;

        loop {
            let token = self.session.access_token().await;
            let headers = Self::headers_for(&token)?;
            let mut request = self.http.request(method.clone(), &url).headers(headers);
            if let Some(query) = query {
                request = request.query(query);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            tracing::debug!(%method, %url, attempt, "Sending request");

            match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();

                    if status == 401 && !refreshed && self.session.can_refresh().await {
                        tracing::debug!(%url, "Access token rejected; refreshing");
                        self.session.refresh_if_current(&token).await?;
                        refreshed = true;
                        continue;
                    }

                    let retryable = retry.should_retry_status(status) && (idempotent || status == 429);
                    if retryable && attempt < retry.max_retries {
                        let delay = retry.delay_for(attempt, retry_after_secs(response.headers()));
                        tracing::warn!(status, attempt, ?delay, %url, "Retrying request");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return Ok(response);
                }
                Err(err) => {
                    let transient = err.is_connect() || err.is_timeout();
                    if transient && idempotent && attempt < retry.max_retries {
                        let delay = retry.backoff_for_attempt(attempt);
                        tracing::warn!(error = %err, attempt, ?delay, %url, "Retrying request");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    if err.is_timeout() {
                        return Err(Error::Timeout);
                    }
                    return Err(err.into());
                }
            }
        }
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .execute::<(), ()>(Method::GET, path, None, None)
            .await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let response = self
            .execute::<Q, ()>(Method::GET, path, Some(query), None)
            .await?;
        self.handle_response(response).await
    }

    /// Fetch one raw page of a listing: JSON body plus response headers.
    pub(crate) async fn get_page(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<(Value, HeaderMap)> {
        let response = self
            .execute::<[(String, String)], ()>(Method::GET, url, Some(query), None)
            .await?;
        let response = check_status(response).await?;
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((body, headers))
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute::<(), B>(Method::POST, path, None, Some(body))
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request with query parameters.
    pub(crate) async fn post_with_query<T, B, Q>(&self, path: &str, query: &Q, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let response = self
            .execute(Method::POST, path, Some(query), Some(body))
            .await?;
        self.handle_response(response).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute::<(), B>(Method::PUT, path, None, Some(body))
            .await?;
        self.handle_response(response).await
    }

    /// Make a PUT request with query parameters.
    pub(crate) async fn put_with_query<T, B, Q>(&self, path: &str, query: &Q, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let response = self
            .execute(Method::PUT, path, Some(query), Some(body))
            .await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request. Any response body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.delete_with_query::<()>(path, None).await
    }

    /// Make a DELETE request with optional query parameters.
    pub(crate) async fn delete_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<()> {
        let response = self
            .execute::<Q, ()>(Method::DELETE, path, query, None)
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Download a binary resource as a stream of chunks.
    ///
    /// The URL is requested without credentials; Webex hands out pre-signed
    /// temporary links for recordings and transcripts.
    pub(crate) async fn download(&self, url: &str) -> Result<ByteStream> {
        tracing::debug!(%url, "Starting download");
        let response = self.http.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(Box::pin(
            response.bytes_stream().map(|chunk| chunk.map_err(Error::from)),
        ))
    }

    /// Handle an API response.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Turn a non-success response into the matching error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after = retry_after_secs(response.headers());
    let text = response.text().await.unwrap_or_default();
    let body: Value = serde_json::from_str(&text).unwrap_or(Value::String(text));

    tracing::debug!(status = status.as_u16(), body = %body, "API error response");

    Err(match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized(
            api_message(&body).unwrap_or_else(|| "Access token rejected".to_string()),
        ),
        StatusCode::FORBIDDEN => Error::Forbidden(
            api_message(&body).unwrap_or_else(|| "Insufficient permissions".to_string()),
        ),
        StatusCode::NOT_FOUND => Error::NotFound(
            api_message(&body).unwrap_or_else(|| "Resource not found".to_string()),
        ),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited {
            retry_after_secs: retry_after.unwrap_or(60),
        },
        _ => Error::from_api_response(status.as_u16(), body),
    })
}

/// Seconds from a `Retry-After` header, when given as a number.
fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

impl Clone for WebexClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for WebexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebexClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_base(base: &str) -> WebexClient {
        WebexClient::with_session(
            Session::from_token("token", Environment::Commercial),
            ClientConfig::default().with_base_url(base),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_url_for_relative_and_absolute() {
        let client = client_with_base("http://localhost:9000/v1");
        let inner = &client.inner;
        assert_eq!(inner.url_for("/people").await, "http://localhost:9000/v1/people");
        assert_eq!(inner.url_for("people").await, "http://localhost:9000/v1/people");
        assert_eq!(
            inner.url_for("https://webexapis.com/v1/people?cursor=x").await,
            "https://webexapis.com/v1/people?cursor=x"
        );
    }

    #[tokio::test]
    async fn test_default_base_url_from_environment() {
        let client = WebexClient::new("token").unwrap();
        assert_eq!(client.inner.base_url().await, "https://webexapis.com/v1");
    }

    #[tokio::test]
    async fn test_bearer_header() {
        let client = client_with_base("http://localhost");
        let token = client.inner.session.access_token().await;
        let headers = ClientInner::headers_for(&token).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer token");
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after_secs(&headers), None);
        headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));
        assert_eq!(retry_after_secs(&headers), Some(7));
        headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));
        assert_eq!(retry_after_secs(&headers), None);
    }

    #[test]
    fn test_debug_hides_session() {
        let client = WebexClient::new("very-secret").unwrap();
        assert!(!format!("{:?}", client).contains("very-secret"));
    }
}
