use async_trait::async_trait;
use tracing::debug;

use crate::{
    application::models::consumption::{ConsumptionPeriod, ConsumptionResponse},
    config::Config,
    error::VeoliaError,
    session::session::VeoliaSession,
};

/// Consumption reads against the portal.
#[async_trait]
pub trait ConsumptionService: Send {
    /// Fetches consumption readings for the given month and year. With a
    /// `day` the hourly endpoint is queried, otherwise the monthly one.
    /// Logs in first when the session is not yet authenticated; login
    /// failures propagate unchanged.
    async fn get_consumption(
        &mut self,
        month: u32,
        year: i32,
        day: Option<u32>,
    ) -> Result<Vec<f64>, VeoliaError>;
}

/// Portal adapter: one session, credentials fixed for its lifetime.
///
/// Every fetch hits the portal; nothing is cached. Login runs at most
/// once per instance.
#[derive(Debug)]
pub struct VeoliaClient {
    session: VeoliaSession,
}

impl VeoliaClient {
    /// Client owning its connection context.
    pub fn new(config: Config) -> Result<Self, VeoliaError> {
        Ok(Self {
            session: VeoliaSession::new(config)?,
        })
    }

    /// Client over a caller-supplied `reqwest::Client` (cookie store
    /// required). The caller keeps ownership of the connection context.
    pub fn with_client(client: reqwest::Client, config: Config) -> Self {
        Self {
            session: VeoliaSession::with_client(client, config),
        }
    }

    pub fn session(&self) -> &VeoliaSession {
        &self.session
    }

    pub async fn login(&mut self) -> Result<(), VeoliaError> {
        self.session.login().await
    }

    pub async fn get_monthly_consumption(
        &mut self,
        month: u32,
        year: i32,
    ) -> Result<Vec<f64>, VeoliaError> {
        self.get_consumption(month, year, None).await
    }

    pub async fn get_hourly_consumption(
        &mut self,
        day: u32,
        month: u32,
        year: i32,
    ) -> Result<Vec<f64>, VeoliaError> {
        self.get_consumption(month, year, Some(day)).await
    }

    /// Releases the connection context; idempotent.
    pub fn close(&mut self) {
        self.session.close();
    }
}

#[async_trait]
impl ConsumptionService for VeoliaClient {
    async fn get_consumption(
        &mut self,
        month: u32,
        year: i32,
        day: Option<u32>,
    ) -> Result<Vec<f64>, VeoliaError> {
        self.session.ensure_login().await?;

        let period = match day {
            Some(day) => ConsumptionPeriod::Hourly { day, month, year },
            None => ConsumptionPeriod::Monthly { month, year },
        };
        let endpoint = period.endpoint();
        debug!("Fetching consumption data from {}", endpoint);

        let response: ConsumptionResponse = self.session.get_json(&endpoint).await?;

        debug!("Consumption data received: {} readings", response.consumption.len());
        Ok(response.consumption)
    }
}
