//! Token client
//!
//! Exchanges the application's key/secret for a short-lived token with a
//! single `POST /token` call. No retries, no caching.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::config::credentials::Credentials;
use crate::config::settings::ClientSettings;
use crate::error::{Result, SethealthError};
use crate::utils::constants::{CONTENT_TYPE_JSON_UTF8, TOKEN_PATH};

pub mod request;
pub mod response;

use request::{TokenRequest, TokenRequestOptions};
use response::TokenResponse;

/// Cheap to clone; clones share the same connection pool and may be used
/// from many tasks at once.
#[derive(Debug, Clone)]
pub struct TokenClient {
    credentials: Credentials,
    settings: ClientSettings,
    token_url: String,
    client: Client,
}

impl TokenClient {
    /// Client with credentials taken from `SETHEALTH_KEY` / `SETHEALTH_SECRET`.
    pub fn new() -> Self {
        Self::from_credentials(Credentials::from_env())
    }

    pub fn with_credentials(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::new(key, secret))
    }

    /// Default settings and a transport with library defaults.
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self::assemble(credentials, ClientSettings::default(), Client::new())
    }

    pub fn with_settings(credentials: Credentials, settings: ClientSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::assemble(credentials, settings, client))
    }

    fn assemble(credentials: Credentials, settings: ClientSettings, client: Client) -> Self {
        let token_url = format!("{}{}", settings.base_url.trim_end_matches('/'), TOKEN_PATH);
        Self {
            credentials,
            settings,
            token_url,
            client,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Requests a token with default options.
    pub async fn request_token(&self) -> Result<TokenResponse> {
        self.request_token_with_options(&TokenRequestOptions::default()).await
    }

    #[instrument(skip_all, fields(url = %self.token_url, test_mode = options.test_mode))]
    pub async fn request_token_with_options(&self, options: &TokenRequestOptions) -> Result<TokenResponse> {
        let payload = TokenRequest::new(&self.credentials, options, self.settings.expires_in_format);

        debug!("requesting token");
        // explicit content type is kept by `json()`
        let response = self
            .client
            .post(&self.token_url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON_UTF8)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "token request rejected");
            return Err(SethealthError::InvalidCredentials { status });
        }

        let body = response.bytes().await?;
        let token = TokenResponse::from_slice(&body)?;
        debug!("token issued");
        Ok(token)
    }
}
