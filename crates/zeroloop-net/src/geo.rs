//! IP geolocation lookup client.

use serde::Deserialize;

use zeroloop_types::error::{Result, ShellError};

/// Subset of the geolocation API response rendered by `scanip`.
///
/// Fields the API omits for reserved or unroutable addresses come back
/// as `None`; the renderer substitutes a placeholder.
#[derive(Debug, Clone, Deserialize)]
pub struct IpInfo {
    pub ip: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub org: Option<String>,
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub currency_name: Option<String>,
    /// Set when the API rejected the query.
    #[serde(default)]
    pub error: bool,
    /// Rejection reason accompanying `error`.
    pub reason: Option<String>,
}

/// HTTP client for the geolocation API.
pub struct GeoClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GeoClient {
    /// Build a client for an endpoint template containing `{ip}`.
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Fetch information for one IP address.
    ///
    /// Transport and decode failures map to [`ShellError::Net`]. An
    /// API-level rejection still decodes and is reported through
    /// [`IpInfo::error`] / [`IpInfo::reason`].
    pub async fn lookup(&self, ip: &str) -> Result<IpInfo> {
        let url = self.endpoint.replace("{ip}", ip);
        log::debug!("geo lookup: {url}");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ShellError::Net(e.to_string()))?;
        let info = response
            .json::<IpInfo>()
            .await
            .map_err(|e| ShellError::Net(e.to_string()))?;
        Ok(info)
    }
}
