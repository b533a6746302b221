//! Inventory retrieval with exclusion filtering.

use crate::backend::Backend;
use crate::error::Result;
use crate::types::Inventory;
use std::collections::BTreeSet;

/// Fetches per-endpoint software inventories from the management service.
///
/// Holds the run's network id and exclusion set so every returned inventory
/// is already filtered. One call per endpoint per run, no caching, no retry:
/// a transport failure aborts the run.
pub struct InventoryFetcher<'a, B: Backend> {
    backend: &'a B,
    network: &'a str,
    exclusions: &'a BTreeSet<String>,
}

impl<'a, B: Backend> InventoryFetcher<'a, B> {
    /// Create a fetcher for one run.
    pub fn new(backend: &'a B, network: &'a str, exclusions: &'a BTreeSet<String>) -> Self {
        Self {
            backend,
            network,
            exclusions,
        }
    }

    /// Retrieve the filtered inventory for one endpoint.
    pub fn fetch(&self, device_id: &str) -> Result<Inventory> {
        let raw = self.backend.list_device_software(self.network, device_id)?;
        let total = raw.len();

        let inventory: Inventory = raw
            .into_iter()
            .filter(|app| !self.exclusions.contains(app))
            .collect();

        log::debug!(
            "device {device_id}: {} of {total} software names kept",
            inventory.len()
        );
        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::error::Error;

    #[test]
    fn test_fetch_applies_exclusions() {
        let mut mock = MockBackend::new();
        mock.set_software("d-1", ["chrome", "slack", "steam"]);

        let exclusions: BTreeSet<String> = ["steam".to_string()].into_iter().collect();
        let fetcher = InventoryFetcher::new(&mock, "n-1", &exclusions);

        let inventory = fetcher.fetch("d-1").unwrap();
        let names: Vec<&str> = inventory.iter().map(String::as_str).collect();
        assert_eq!(names, ["chrome", "slack"]);
    }

    #[test]
    fn test_fetch_excludes_regardless_of_duplication() {
        let mut mock = MockBackend::new();
        mock.set_software("d-1", ["steam", "chrome", "steam", "steam"]);

        let exclusions: BTreeSet<String> = ["steam".to_string()].into_iter().collect();
        let fetcher = InventoryFetcher::new(&mock, "n-1", &exclusions);

        let inventory = fetcher.fetch("d-1").unwrap();
        assert!(!inventory.contains("steam"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_fetch_exclusions_are_case_sensitive() {
        let mut mock = MockBackend::new();
        mock.set_software("d-1", ["Steam", "chrome"]);

        let exclusions: BTreeSet<String> = ["steam".to_string()].into_iter().collect();
        let fetcher = InventoryFetcher::new(&mock, "n-1", &exclusions);

        let inventory = fetcher.fetch("d-1").unwrap();
        assert!(inventory.contains("Steam"));
    }

    #[test]
    fn test_fetch_propagates_collaborator_failure() {
        let mut mock = MockBackend::new();
        mock.set_software("d-1", ["chrome"]);
        mock.fail_software_for("d-1");

        let exclusions = BTreeSet::new();
        let fetcher = InventoryFetcher::new(&mock, "n-1", &exclusions);

        let result = fetcher.fetch("d-1");
        assert!(matches!(result, Err(Error::Collaborator { .. })));
    }
}
