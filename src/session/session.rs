use crate::config::Config;
use crate::constants::LOGIN_PATH;
use crate::error::VeoliaError;
use crate::session::auth::{extract_form_build_id, is_logged_in_page, LoginForm};
use crate::transport::http_client::VeoliaHttpClient;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, info, instrument};

/// Authenticated session against the Veolia portal.
///
/// Holds the reusable connection context and a single `logged_in` flag.
/// The flag is set once by a successful login and never reset internally:
/// server-side expiry is not detected and surfaces as a failure on the
/// next fetch.
#[derive(Debug)]
pub struct VeoliaSession {
    client: Option<VeoliaHttpClient>,
    config: Config,
    logged_in: bool,
}

impl VeoliaSession {
    /// Session owning its own connection context, built from the config.
    pub fn new(config: Config) -> Result<Self, VeoliaError> {
        let client = VeoliaHttpClient::new(&config.rest_api.base_url, config.rest_api.timeout)?;
        Ok(Self {
            client: Some(client),
            config,
            logged_in: false,
        })
    }

    /// Session over a caller-supplied `reqwest::Client`. The client must
    /// have a cookie store enabled; its lifetime stays with the caller.
    pub fn with_client(client: reqwest::Client, config: Config) -> Self {
        let client = VeoliaHttpClient::with_client(client, &config.rest_api.base_url);
        Self {
            client: Some(client),
            config,
            logged_in: false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn client(&self) -> Result<&VeoliaHttpClient, VeoliaError> {
        self.client.as_ref().ok_or(VeoliaError::SessionClosed)
    }

    /// Performs the login handshake: fetch the login page, scrape the
    /// `form_build_id` token, POST the form, and check the response body
    /// for the logout marker. A single failed attempt propagates and
    /// leaves the session unauthenticated.
    #[instrument(skip(self))]
    pub async fn login(&mut self) -> Result<(), VeoliaError> {
        debug!("Fetching login page to retrieve form_build_id");
        let html = self.client()?.get_text(LOGIN_PATH).await?;

        let form_build_id = extract_form_build_id(&html).ok_or_else(|| {
            VeoliaError::Protocol("form_build_id not found in login page".to_string())
        })?;

        let form = LoginForm::new(&self.config.credentials, form_build_id);

        debug!(
            "Posting login form for user: {}",
            self.config.credentials.username
        );
        let post_html = self.client()?.post_form(LOGIN_PATH, &form).await?;

        if !is_logged_in_page(&post_html) {
            return Err(VeoliaError::BadCredentials);
        }

        info!("Login successful");
        self.logged_in = true;
        Ok(())
    }

    /// Logs in once per session instance. The check-and-set is not
    /// synchronized: concurrent callers on a shared session may each
    /// attempt a login.
    pub async fn ensure_login(&mut self) -> Result<(), VeoliaError> {
        if self.logged_in {
            return Ok(());
        }
        self.login().await
    }

    pub async fn get_json<T: DeserializeOwned + Debug>(
        &self,
        endpoint: &str,
    ) -> Result<T, VeoliaError> {
        self.client()?.get_json(endpoint).await
    }

    /// Releases the connection context. Idempotent; a no-op when already
    /// closed. For a caller-supplied client only this session's handle is
    /// dropped, the caller's pool stays open.
    pub fn close(&mut self) {
        if self.client.take().is_some() {
            debug!("Session closed");
        }
    }
}
