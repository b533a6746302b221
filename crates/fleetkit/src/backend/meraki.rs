//! Meraki Dashboard backend.
//!
//! This module provides the [`MerakiBackend`] implementation for listing
//! Systems Manager devices and their installed software over the Dashboard
//! API v1.
//!
//! # Rate Limiting
//!
//! The Dashboard API enforces per-organization rate limits. This backend
//! makes one request per operation and does not retry; pace the calling side
//! accordingly.

use crate::backend::Backend;
use crate::error::Result;
use crate::types::Device;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Production Dashboard API base URL.
const DEFAULT_API_BASE: &str = "https://api.meraki.com/api/v1";

/// Page size requested from the device listing route.
const DEVICE_PAGE_SIZE: u32 = 1000;

/// Meraki Dashboard backend.
///
/// Issues blocking HTTPS requests with bearer-token authentication.
///
/// # Example
///
/// ```no_run
/// use fleetkit::backend::Backend;
/// use fleetkit::backend::meraki::MerakiBackend;
///
/// let backend = MerakiBackend::new("secret-key");
/// let devices = backend.list_devices("N_1234").unwrap();
/// println!("Found {} devices", devices.len());
/// ```
pub struct MerakiBackend {
    /// HTTP agent for requests.
    agent: ureq::Agent,
    /// Dashboard API base URL.
    api_base: String,
    /// Bearer token for every request.
    api_key: String,
}

impl MerakiBackend {
    /// Create a backend against the production Dashboard API.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_base(api_key, DEFAULT_API_BASE)
    }

    /// Create a backend with a custom API base (for testing).
    #[must_use]
    pub fn with_api_base(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            api_base: api_base.into(),
            api_key: api_key.into(),
        }
    }

    /// Get the current API base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build the URL for the device listing.
    fn devices_url(&self, network: &str) -> String {
        format!(
            "{}/networks/{}/sm/devices?perPage={}",
            self.api_base, network, DEVICE_PAGE_SIZE
        )
    }

    /// Build the URL for one device's software listing.
    fn softwares_url(&self, network: &str, device_id: &str) -> String {
        format!(
            "{}/networks/{}/sm/devices/{}/softwares",
            self.api_base, network, device_id
        )
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self
            .agent
            .get(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .header("User-Agent", "fleetkit")
            .call()?
            .body_mut()
            .read_json()?;

        Ok(body)
    }
}

impl Backend for MerakiBackend {
    fn list_devices(&self, network: &str) -> Result<Vec<Device>> {
        let response: Vec<SmDevice> = self.get_json(&self.devices_url(network))?;
        Ok(response.into_iter().map(Into::into).collect())
    }

    fn list_device_software(&self, network: &str, device_id: &str) -> Result<Vec<String>> {
        let response: Vec<SmSoftware> = self.get_json(&self.softwares_url(network, device_id))?;
        Ok(response.into_iter().map(|s| s.name).collect())
    }
}

// =============================================================================
// Dashboard API response types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SmDevice {
    id: String,
    // Unenrolled or freshly-provisioned devices can report no name.
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct SmSoftware {
    name: String,
}

impl From<SmDevice> for Device {
    fn from(d: SmDevice) -> Self {
        Self {
            name: d.name,
            id: d.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devices_url() {
        let backend = MerakiBackend::new("key");
        let url = backend.devices_url("N_1234");
        assert_eq!(
            url,
            "https://api.meraki.com/api/v1/networks/N_1234/sm/devices?perPage=1000"
        );
    }

    #[test]
    fn test_softwares_url() {
        let backend = MerakiBackend::new("key");
        let url = backend.softwares_url("N_1234", "d-100");
        assert_eq!(
            url,
            "https://api.meraki.com/api/v1/networks/N_1234/sm/devices/d-100/softwares"
        );
    }

    #[test]
    fn test_custom_api_base() {
        let backend = MerakiBackend::with_api_base("key", "https://custom.api.com");
        assert_eq!(backend.api_base(), "https://custom.api.com");

        let url = backend.devices_url("N_1");
        assert_eq!(
            url,
            "https://custom.api.com/networks/N_1/sm/devices?perPage=1000"
        );
    }

    #[test]
    fn test_sm_device_conversion() {
        let wire = SmDevice {
            id: "d-100".to_string(),
            name: "web01".to_string(),
        };
        let device: Device = wire.into();
        assert_eq!(device.id, "d-100");
        assert_eq!(device.name, "web01");
    }

    #[test]
    fn test_sm_device_missing_name_defaults_empty() {
        let wire: SmDevice = serde_json::from_str(r#"{"id": "d-100"}"#).unwrap();
        let device: Device = wire.into();
        assert_eq!(device.name, "");
    }
}
