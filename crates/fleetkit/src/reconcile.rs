//! Baseline reconciliation: per-target install/remove set differences.
//!
//! A pure function of its inputs: reconciling the same pair of inventories
//! always yields the same diff, and `to_install(a, b) == to_remove(b, a)`.

use crate::types::{BaselineDiff, EndpointName, Inventory};
use std::collections::BTreeMap;

/// Compute the diff of one target against the baseline.
#[must_use]
pub fn diff(target: &EndpointName, source: &Inventory, inventory: &Inventory) -> BaselineDiff {
    BaselineDiff {
        target: target.clone(),
        to_install: source.difference(inventory).cloned().collect(),
        to_remove: inventory.difference(source).cloned().collect(),
    }
}

/// Reconcile every target against the baseline, in ascending target order.
///
/// The iterator is lazy: each diff is computed as the report consumes it, so
/// output can start before the full result set exists. Target order is the
/// map order, independent of fetch or discovery order.
pub fn reconcile<'a>(
    source: &'a Inventory,
    targets: &'a BTreeMap<EndpointName, Inventory>,
) -> impl Iterator<Item = BaselineDiff> + 'a {
    targets
        .iter()
        .map(|(name, inventory)| diff(name, source, inventory))
}
