//! # fleetkit
//!
//! Pure Rust library for auditing installed-software drift across endpoints
//! managed by a Meraki Systems Manager network.
//!
//! This crate provides functionality for:
//! - Listing managed devices and their installed software via the Dashboard API
//! - Case- and whitespace-insensitive endpoint name resolution
//! - Exclusion filtering of software inventories
//! - Baseline reconciliation (per-target install/remove sets)
//!
//! ## Example
//!
//! ```
//! use fleetkit::{Backend, EndpointDirectory, InventoryFetcher, MockBackend, reconcile};
//! use std::collections::BTreeMap;
//!
//! let mut mock = MockBackend::new();
//! mock.add_device("web01", "d-1");
//! mock.add_device("web02", "d-2");
//! mock.set_software("d-1", ["chrome", "slack"]);
//! mock.set_software("d-2", ["chrome", "steam"]);
//!
//! let directory = EndpointDirectory::from_devices(mock.list_devices("n-1").unwrap());
//! let (source, source_id) = directory.resolve_source("web01").unwrap();
//!
//! let exclusions = Default::default();
//! let fetcher = InventoryFetcher::new(&mock, "n-1", &exclusions);
//! let baseline = fetcher.fetch(&source_id).unwrap();
//!
//! let mut targets = BTreeMap::new();
//! for (name, id) in directory.select_targets(&source, &[]).unwrap() {
//!     targets.insert(name, fetcher.fetch(&id).unwrap());
//! }
//!
//! for diff in reconcile(&baseline, &targets) {
//!     assert!(diff.to_install.contains("slack"));
//!     assert!(diff.to_remove.contains("steam"));
//! }
//! ```
//!
//! Against the real service, swap [`MockBackend`] for
//! [`MerakiBackend`](backend::meraki::MerakiBackend).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod directory;
pub mod error;
pub mod exclusions;
pub mod inventory;
pub mod reconcile;
pub mod types;

pub use backend::meraki::MerakiBackend;
pub use backend::{Backend, MockBackend};
pub use directory::EndpointDirectory;
pub use error::{Error, Result};
pub use inventory::InventoryFetcher;
pub use reconcile::reconcile;
pub use types::{BaselineDiff, Device, EndpointName, Inventory};
