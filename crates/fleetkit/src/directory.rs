//! Endpoint directory: normalized name to identifier lookup.
//!
//! The directory is built once from the full fleet listing and frozen for
//! the remainder of the run. All name handling goes through
//! [`EndpointName`], so insertion and lookup normalize identically.

use crate::error::{Error, Result};
use crate::types::{Device, EndpointName};
use std::collections::BTreeMap;

/// Lookup of every known endpoint by normalized name.
#[derive(Debug, Clone, Default)]
pub struct EndpointDirectory {
    entries: BTreeMap<EndpointName, String>,
}

impl EndpointDirectory {
    /// Build the directory from a fleet listing.
    ///
    /// Duplicate normalized names keep the last identifier seen.
    pub fn from_devices(devices: impl IntoIterator<Item = Device>) -> Self {
        let mut entries = BTreeMap::new();
        for device in devices {
            let name = EndpointName::new(&device.name);
            log::debug!("{} {name}", device.id);
            if let Some(previous) = entries.insert(name.clone(), device.id) {
                log::debug!("duplicate endpoint name {name}, replacing identifier {previous}");
            }
        }
        Self { entries }
    }

    /// Number of endpoints in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no endpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&EndpointName, &str)> {
        self.entries.iter().map(|(name, id)| (name, id.as_str()))
    }

    /// Resolve a raw name to its identifier.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries.get(&EndpointName::new(name)).map(String::as_str)
    }

    /// Resolve the source endpoint, failing the run if it is unknown.
    pub fn resolve_source(&self, name: &str) -> Result<(EndpointName, String)> {
        let normalized = EndpointName::new(name);
        match self.entries.get(&normalized) {
            Some(id) => Ok((normalized, id.clone())),
            None => Err(Error::SourceNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Select the targets for a run.
    ///
    /// With no requested names, every endpoint except the source is a
    /// target. Requested names resolve independently: unresolvable ones are
    /// dropped with a warning, the source is never a target, and duplicates
    /// collapse. An explicit request that resolves to nothing fails the run.
    pub fn select_targets(
        &self,
        source: &EndpointName,
        requested: &[String],
    ) -> Result<Vec<(EndpointName, String)>> {
        if requested.is_empty() {
            log::info!("no targets specified, baselining every other endpoint");
            let mut targets = Vec::new();
            for (name, id) in &self.entries {
                if name != source {
                    targets.push((name.clone(), id.clone()));
                }
            }
            return Ok(targets);
        }

        let mut targets: Vec<(EndpointName, String)> = Vec::new();
        for raw in requested {
            let name = EndpointName::new(raw);
            if name == *source {
                log::warn!("skipping target {name}: it is the source endpoint");
                continue;
            }
            if targets.iter().any(|(seen, _)| *seen == name) {
                continue;
            }
            match self.entries.get(&name) {
                Some(id) => targets.push((name, id.clone())),
                None => log::warn!("skipping target {raw:?}: not found in the fleet"),
            }
        }

        if targets.is_empty() {
            return Err(Error::NoTargetsFound);
        }
        Ok(targets)
    }
}
