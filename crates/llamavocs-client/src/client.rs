//! The LlamaVocs HTTP client and builder.

use std::time::Duration;

use llamavocs_rpc::Envelope;
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};

use crate::cards::CardActions;
use crate::error::{Error, Result};

/// Default URL of a LlamaVocs server.
const DEFAULT_URL: &str = "http://127.0.0.1:3000";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client for calling LlamaVocs procedures over HTTP.
///
/// Queries are sent as `GET /rpc/{path}?input=...`, mutations as
/// `POST /rpc/{path}`.
///
/// # Example
///
/// ```no_run
/// use llamavocs_client::LlamaClient;
///
/// # async fn example() -> llamavocs_client::Result<()> {
/// let client = LlamaClient::new();
///
/// match client.cards().newest().await? {
///     Some(card) => println!("{} -> {}", card.front, card.back),
///     None => println!("no cards yet"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LlamaClient {
    http_client: Client,
    base_url: String,
}

impl LlamaClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://127.0.0.1:3000` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access card procedures.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Call a query whose result is always present.
    pub(crate) async fn query<I, R>(&self, path: &str, input: &I) -> Result<R>
    where
        I: Serialize,
        R: DeserializeOwned,
    {
        self.query_nullable(path, input)
            .await?
            .ok_or(Error::EmptyResponse)
    }

    /// Call a query where `null` is a valid result.
    pub(crate) async fn query_nullable<I, R>(&self, path: &str, input: &I) -> Result<Option<R>>
    where
        I: Serialize,
        R: DeserializeOwned,
    {
        let input = serde_json::to_string(input)?;
        let response = self
            .http_client
            .get(self.procedure_url(path))
            .query(&[("input", input)])
            .send()
            .await
            .map_err(send_error)?;

        read_envelope(response).await
    }

    /// Call a mutation.
    pub(crate) async fn mutate<I, R>(&self, path: &str, input: &I) -> Result<R>
    where
        I: Serialize,
        R: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(self.procedure_url(path))
            .json(input)
            .send()
            .await
            .map_err(send_error)?;

        read_envelope(response).await?.ok_or(Error::EmptyResponse)
    }

    fn procedure_url(&self, path: &str) -> String {
        format!("{}/rpc/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for LlamaClient {
    fn default() -> Self {
        Self::new()
    }
}

fn send_error(e: reqwest::Error) -> Error {
    if e.is_connect() {
        Error::ConnectionRefused
    } else {
        Error::Http(e)
    }
}

/// Decode the response envelope, regardless of HTTP status.
async fn read_envelope<R: DeserializeOwned>(response: Response) -> Result<Option<R>> {
    let envelope: Envelope<R> = serde_json::from_slice(&response.bytes().await?)?;

    match (envelope.result, envelope.error) {
        (_, Some(err)) => Err(Error::Remote(err)),
        (result, None) => Ok(result),
    }
}

/// Builder for creating a customized [`LlamaClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use llamavocs_client::LlamaClient;
///
/// let client = LlamaClient::builder()
///     .url("http://localhost:3000")
///     .timeout(Duration::from_secs(5))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the server URL.
    ///
    /// Defaults to `http://127.0.0.1:3000`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> LlamaClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        LlamaClient {
            http_client,
            base_url: self.base_url,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
