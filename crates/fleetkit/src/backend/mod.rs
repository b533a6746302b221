//! Backend trait and implementations for the device-management service.
//!
//! This module provides the [`Backend`] trait abstracting the remote
//! management service and the [`meraki::MerakiBackend`] implementation that
//! talks to the Meraki Dashboard API.
//!
//! # Testing
//!
//! Use [`MockBackend`] for testing without network access:
//!
//! ```
//! use fleetkit::backend::{Backend, MockBackend};
//!
//! let mut mock = MockBackend::new();
//! mock.add_device("web01", "d-100");
//! mock.set_software("d-100", ["chrome", "slack"]);
//!
//! let devices = mock.list_devices("n-1").unwrap();
//! assert_eq!(devices.len(), 1);
//! let software = mock.list_device_software("n-1", "d-100").unwrap();
//! assert_eq!(software.len(), 2);
//! ```

pub mod meraki;

use crate::error::{Error, Result};
use crate::types::Device;
use std::collections::HashMap;

/// Access to the device-management service for one network.
///
/// The crate performs exactly one call per endpoint per run and imposes no
/// retry or timeout policy of its own; a failed call fails the whole run.
pub trait Backend: Send + Sync {
    /// List every managed device in the network.
    fn list_devices(&self, network: &str) -> Result<Vec<Device>>;

    /// List the raw installed-software names for one device.
    ///
    /// Names are returned as reported, before any exclusion filtering.
    fn list_device_software(&self, network: &str, device_id: &str) -> Result<Vec<String>>;
}

/// Mock backend for testing without network access.
///
/// Stores devices and per-device software in memory, and can be configured
/// to fail the software listing for a chosen device to exercise the
/// fatal-propagation contract.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    devices: Vec<Device>,
    software: HashMap<String, Vec<String>>,
    fail_device: Option<String>,
}

impl MockBackend {
    /// Create a new empty mock backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a device to the fleet listing.
    pub fn add_device(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.devices.push(Device::new(name, id));
    }

    /// Set the raw software names reported for a device.
    pub fn set_software<I, S>(&mut self, device_id: impl Into<String>, software: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.software.insert(
            device_id.into(),
            software.into_iter().map(Into::into).collect(),
        );
    }

    /// Make the software listing fail for the given device id.
    pub fn fail_software_for(&mut self, device_id: impl Into<String>) {
        self.fail_device = Some(device_id.into());
    }
}

impl Backend for MockBackend {
    fn list_devices(&self, _network: &str) -> Result<Vec<Device>> {
        Ok(self.devices.clone())
    }

    fn list_device_software(&self, _network: &str, device_id: &str) -> Result<Vec<String>> {
        if self.fail_device.as_deref() == Some(device_id) {
            return Err(Error::collaborator(
                format!("mock failure for {device_id}"),
                Some(500),
            ));
        }

        self.software.get(device_id).cloned().ok_or_else(|| {
            Error::collaborator(format!("mock software not configured: {device_id}"), Some(404))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_backend_empty() {
        let mock = MockBackend::new();
        let devices = mock.list_devices("n-1").unwrap();
        assert!(devices.is_empty());
    }

    #[test]
    fn test_mock_backend_devices() {
        let mut mock = MockBackend::new();
        mock.add_device("web01", "d-1");
        mock.add_device("web02", "d-2");

        let devices = mock.list_devices("n-1").unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0], Device::new("web01", "d-1"));
    }

    #[test]
    fn test_mock_backend_software() {
        let mut mock = MockBackend::new();
        mock.set_software("d-1", ["chrome", "slack"]);

        let software = mock.list_device_software("n-1", "d-1").unwrap();
        assert_eq!(software, ["chrome", "slack"]);
    }

    #[test]
    fn test_mock_backend_software_not_configured() {
        let mock = MockBackend::new();
        let result = mock.list_device_software("n-1", "d-404");
        assert!(matches!(result, Err(Error::Collaborator { .. })));
    }

    #[test]
    fn test_mock_backend_injected_failure() {
        let mut mock = MockBackend::new();
        mock.set_software("d-1", ["chrome"]);
        mock.fail_software_for("d-1");

        let result = mock.list_device_software("n-1", "d-1");
        assert!(matches!(
            result,
            Err(Error::Collaborator {
                status: Some(500),
                ..
            })
        ));
    }
}
