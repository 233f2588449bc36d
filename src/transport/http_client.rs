use crate::error::VeoliaError;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// HTTP client for the Veolia portal.
///
/// Wraps a single `reqwest::Client` with its cookie store enabled; the
/// cookies set by a successful login form submission are the only
/// authentication state the portal knows about.
#[derive(Debug)]
pub struct VeoliaHttpClient {
    client: Client,
    base_url: String,
}

impl VeoliaHttpClient {
    /// Builds a client owning its own connection pool and cookie store.
    pub fn new(base_url: &str, timeout: u64) -> Result<Self, VeoliaError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Wraps a caller-built `reqwest::Client`. The caller keeps ownership
    /// of the connection pool; it must have a cookie store enabled for the
    /// login to stick.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_text(&self, endpoint: &str) -> Result<String, VeoliaError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Sending GET request to {}", url);

        let response = self.client.get(&url).send().await?;

        Self::text_body(response).await
    }

    #[instrument(skip(self, form))]
    pub async fn post_form<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        form: &B,
    ) -> Result<String, VeoliaError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Sending POST request to {}", url);

        let response = self.client.post(&url).form(form).send().await?;

        Self::text_body(response).await
    }

    #[instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned + Debug>(
        &self,
        endpoint: &str,
    ) -> Result<T, VeoliaError> {
        let body_text = self.get_text(endpoint).await?;
        let body: T = serde_json::from_str(&body_text)?;

        debug!("Response body: {:?}", body);
        Ok(body)
    }

    async fn text_body(response: Response) -> Result<String, VeoliaError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            error!("Request failed. Status: {}", status);
            return Err(VeoliaError::Unexpected(status));
        }

        Ok(response.text().await?)
    }
}
