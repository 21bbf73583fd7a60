//! HTTP client for the TMDB `/search/movie` endpoint.
//!
//! The credential is attached in exactly one mode: a bearer token goes into the
//! `Authorization` header (reqwest marks it sensitive so it is never logged),
//! an API key goes into the `api_key` query parameter.

use std::time::Duration;

use reqwest::Client;
use reqwest::header;
use secrecy::ExposeSecret;

use crate::cancel::CancelSignal;
use crate::config::{Config, Credentials, ENV_ACCESS_TOKEN, ENV_API_KEY};
use crate::error::{MovieSeekError, Result};

use super::{MovieSource, SearchPage, SearchRequest};

const USER_AGENT: &str = concat!("movieseek/", env!("CARGO_PKG_VERSION"));

/// TMDB search client
pub struct TmdbClient {
    http: Client,
    base_url: String,
    credentials: Option<Credentials>,
    language: String,
    include_adult: bool,
}

impl TmdbClient {
    /// Create a client from configuration.
    ///
    /// Missing credentials are not an error here: they surface as a
    /// configuration error on the first search.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut client = Self::new(config.base_url(), config.credentials())?;
        client.language = config.language();
        client.include_adult = config.include_adult();
        Ok(client)
    }

    /// Create a client for an explicit base URL.
    ///
    /// Configures HTTP client with 10s connect timeout and 30s total timeout.
    pub fn new(base_url: impl Into<String>, credentials: Option<Credentials>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            language: crate::config::DEFAULT_LANGUAGE.to_string(),
            include_adult: false,
        })
    }

    /// Fail with the setup hint when no credentials are configured.
    pub fn ensure_credentials(&self) -> Result<()> {
        self.credentials().map(|_| ())
    }

    /// A request for `title` carrying this client's configured defaults.
    pub fn request_for(&self, title: impl Into<String>) -> SearchRequest {
        SearchRequest::new(title)
            .with_language(self.language.clone())
            .with_include_adult(self.include_adult)
    }

    fn credentials(&self) -> Result<&Credentials> {
        self.credentials.as_ref().ok_or_else(|| {
            MovieSeekError::Config(format!(
                "TMDB credentials are missing. Set {ENV_ACCESS_TOKEN} or {ENV_API_KEY}, or run: movieseek config set tmdb.access_token <token>"
            ))
        })
    }

    /// Build the outbound HTTP request without sending it.
    pub fn build_request(&self, request: &SearchRequest) -> Result<reqwest::Request> {
        let credentials = self.credentials()?;

        let include_adult = if request.include_adult { "true" } else { "false" };
        let builder = self
            .http
            .get(format!("{}/search/movie", self.base_url))
            .header(header::ACCEPT, "application/json")
            .query(&[
                ("query", request.title.trim()),
                ("language", request.language.as_str()),
                ("include_adult", include_adult),
                ("page", &request.page.to_string()),
            ]);

        let builder = match credentials {
            Credentials::Bearer(token) => builder.bearer_auth(token.expose_secret()),
            Credentials::ApiKey(key) => builder.query(&[("api_key", key.expose_secret())]),
        };

        Ok(builder.build()?)
    }

    async fn execute(&self, http_request: reqwest::Request) -> Result<SearchPage> {
        let response = self.http.execute(http_request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MovieSeekError::Status(status.as_u16()));
        }

        response
            .json::<SearchPage>()
            .await
            .map_err(|e| MovieSeekError::Transport(format!("invalid TMDB response: {e}")))
    }
}

impl MovieSource for TmdbClient {
    async fn search_movies(
        &self,
        request: &SearchRequest,
        cancel: &CancelSignal,
    ) -> Result<SearchPage> {
        // Credentials are checked before anything else, including blank titles.
        self.credentials()?;

        if request.title.trim().is_empty() {
            return Ok(SearchPage::empty());
        }

        if cancel.is_cancelled() {
            return Err(MovieSeekError::Cancelled);
        }

        let http_request = self.build_request(request)?;
        tracing::debug!(
            page = request.page,
            mode = self.credentials()?.mode(),
            "issuing TMDB search"
        );

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(page = request.page, "TMDB search cancelled");
                Err(MovieSeekError::Cancelled)
            }
            result = self.execute(http_request) => result,
        }
    }
}
