//! HTTP client for the LINQ Connect FamilyMenu endpoint.
//!
//! This crate issues the single request the tool needs:
//! - Building the query for a date range (`M-D-YYYY` dates)
//! - Asking for JSON while accepting XML
//! - Turning transport failures and non-2xx statuses into `FetchError`
//!
//! The body comes back as raw text; deciding whether it is JSON or XML is
//! left to `menu_data::MenuDocument`.

use menu_data::{DateRange, api_date};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Default FamilyMenu endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.linqconnect.com/api/FamilyMenu";

/// Building the menus are published for
pub const DEFAULT_BUILDING_ID: &str = "d76afdbb-caa8-ed11-8e6a-c150c5c7a01a";

/// District the building belongs to
pub const DEFAULT_DISTRICT_ID: &str = "9fd1237e-53a6-ed11-8e69-985645bc2745";

/// Network timeout for the whole request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON preferred, XML accepted.
const ACCEPT: &str = "application/json, text/xml, application/xml;q=0.9, */*;q=0.8";

/// Errors that can occur when fetching a menu
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("FamilyMenu request failed with status {status}: {body}")]
    Status { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Where and for whom to fetch menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictConfig {
    pub base_url: String,
    pub building_id: String,
    pub district_id: String,
    pub timeout: Duration,
}

impl Default for DistrictConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            building_id: DEFAULT_BUILDING_ID.to_string(),
            district_id: DEFAULT_DISTRICT_ID.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the FamilyMenu endpoint.
#[derive(Debug, Clone)]
pub struct MenuClient {
    client: reqwest::Client,
    config: DistrictConfig,
}

impl MenuClient {
    /// Build a client; the configured timeout applies to every request.
    pub fn new(config: DistrictConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DistrictConfig {
        &self.config
    }

    /// Query parameters for a range, in the order the API documents them.
    pub fn query_params(&self, range: &DateRange) -> Vec<(&'static str, String)> {
        vec![
            ("buildingId", self.config.building_id.clone()),
            ("districtId", self.config.district_id.clone()),
            ("startDate", api_date(range.first())),
            ("endDate", api_date(range.last())),
        ]
    }

    /// Fetch the menus covering `range` and return the raw body.
    ///
    /// Any non-2xx status is an error; the body of such a response is kept
    /// in the error for the message.
    pub async fn fetch_range(&self, range: &DateRange) -> Result<String> {
        let params = self.query_params(range);
        info!(
            "Fetching menus {} to {} from {}",
            range.first(),
            range.last(),
            self.config.base_url
        );

        let transport = |source: reqwest::Error| FetchError::Transport {
            url: self.config.base_url.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        debug!("FamilyMenu responded with {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(transport)?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_config() {
        let config = DistrictConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_query_params_use_range_bounds() {
        let client = MenuClient::new(DistrictConfig::default()).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        let range = DateRange::build(start, 3, true).unwrap();

        let params = client.query_params(&range);
        assert_eq!(params[0], ("buildingId", DEFAULT_BUILDING_ID.to_string()));
        assert_eq!(params[1], ("districtId", DEFAULT_DISTRICT_ID.to_string()));
        assert_eq!(params[2], ("startDate", "3-8-2024".to_string()));
        assert_eq!(params[3], ("endDate", "3-12-2024".to_string()));
    }
}
