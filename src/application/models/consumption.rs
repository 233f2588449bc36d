use crate::constants::{HOURLY_CONSUMPTION_PATH, MONTHLY_CONSUMPTION_PATH};
use serde::Deserialize;

/// Time granularity of a consumption query.
///
/// Values are passed to the portal verbatim; out-of-range months or days
/// are the server's to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumptionPeriod {
    Monthly { month: u32, year: i32 },
    Hourly { day: u32, month: u32, year: i32 },
}

impl ConsumptionPeriod {
    /// Renders the endpoint with its query string.
    pub fn endpoint(&self) -> String {
        match self {
            ConsumptionPeriod::Monthly { month, year } => {
                format!("{}?month={}&year={}", MONTHLY_CONSUMPTION_PATH, month, year)
            }
            ConsumptionPeriod::Hourly { day, month, year } => {
                format!(
                    "{}?day={}&month={}&year={}",
                    HOURLY_CONSUMPTION_PATH, day, month, year
                )
            }
        }
    }
}

/// Body of the consumption endpoints. Readings come back as bare numbers;
/// the portal models no timestamps or units and neither do we. A missing
/// field decodes as an empty sequence.
#[derive(Debug, Deserialize)]
pub struct ConsumptionResponse {
    #[serde(default)]
    pub consumption: Vec<f64>,
}

#[cfg(test)]
mod tests_consumption {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_monthly_endpoint() {
        let period = ConsumptionPeriod::Monthly {
            month: 3,
            year: 2024,
        };
        assert_eq!(period.endpoint(), "/api/consumption/monthly?month=3&year=2024");
    }

    #[test]
    fn test_hourly_endpoint() {
        let period = ConsumptionPeriod::Hourly {
            day: 15,
            month: 3,
            year: 2024,
        };
        assert_eq!(
            period.endpoint(),
            "/api/consumption/hourly?day=15&month=3&year=2024"
        );
    }

    #[test]
    fn test_response_deserialization() {
        let response: ConsumptionResponse =
            serde_json::from_str(r#"{"consumption": [1.5, 2.5]}"#).unwrap();
        assert_eq!(response.consumption, vec![1.5, 2.5]);
    }

    #[test]
    fn test_response_missing_field() {
        let response: ConsumptionResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.consumption.is_empty());
    }
}
