use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::Result;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Answer of the portal to a license check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LicenseCheck {
    pub exist: bool,
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
}

/// Form-encoded calls to the portal's ingestion endpoints.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn send_heartbeat(&self, key: &str, log: &str) -> Result<()> {
        self.http
            .post(format!("{}/heartbeat/", self.base_url))
            .form(&[("key", key), ("log", log)])
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    pub async fn check_license(&self, key: &str) -> Result<LicenseCheck> {
        let check = self
            .http
            .post(format!("{}/licenses/license-heartbeat", self.base_url))
            .form(&[("key", key)])
            .send()
            .await?
            .error_for_status()?
            .json::<LicenseCheck>()
            .await?;

        Ok(check)
    }

    /// Reports the switch to the new key. Returns the portal's status message.
    pub async fn confirm_license(&self, old: &str, new: &str, new_exists: bool) -> Result<String> {
        let new_exists = if new_exists { "true" } else { "false" };

        let response = self
            .http
            .post(format!("{}/licenses/license-heartbeat/save", self.base_url))
            .form(&[("old", old), ("new", new), ("new_exists", new_exists)])
            .send()
            .await?
            .error_for_status()?
            .json::<StatusResponse>()
            .await?;

        Ok(response.status)
    }
}
