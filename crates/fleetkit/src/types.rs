//! Core types for fleet software auditing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Normalized endpoint name, the sole identity key of the fleet directory.
///
/// Endpoint names compare case-insensitively and ignore surrounding
/// whitespace. The normalization happens once, in [`EndpointName::new`], and
/// every insertion and lookup goes through it, so insertion-time and
/// query-time forms cannot drift apart. `Ord` on the normalized form is what
/// puts report blocks in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndpointName(String);

impl EndpointName {
    /// Normalize a raw name (trim, uppercase) into its identity form.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// The normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One managed device as reported by the management service.
///
/// The name is the raw display form; normalization happens when the device
/// enters the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Display name, as reported.
    pub name: String,
    /// Opaque identifier assigned by the service.
    pub id: String,
}

impl Device {
    /// Create a device record.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Set of application names installed on one endpoint, after exclusion
/// filtering. Lives for a single run only.
pub type Inventory = BTreeSet<String>;

/// Per-target reconciliation outcome.
///
/// `to_install` and `to_remove` are disjoint by construction: one is
/// `source − target`, the other `target − source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineDiff {
    /// Target endpoint the diff applies to.
    pub target: EndpointName,
    /// Applications present on the source but missing from the target.
    pub to_install: BTreeSet<String>,
    /// Applications present on the target but absent from the source.
    pub to_remove: BTreeSet<String>,
}

impl BaselineDiff {
    /// Whether the target already matches the baseline.
    pub fn is_aligned(&self) -> bool {
        self.to_install.is_empty() && self.to_remove.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_name_normalizes_case_and_whitespace() {
        assert_eq!(EndpointName::new(" web01 "), EndpointName::new("WEB01"));
        assert_eq!(EndpointName::new("Web01"), EndpointName::new("web01"));
        assert_eq!(EndpointName::new("\tweb01\n").as_str(), "WEB01");
    }

    #[test]
    fn test_endpoint_name_distinct_names_differ() {
        assert_ne!(EndpointName::new("web01"), EndpointName::new("web02"));
    }

    #[test]
    fn test_endpoint_name_orders_lexicographically() {
        let mut names = vec![
            EndpointName::new("zeta"),
            EndpointName::new("alpha"),
            EndpointName::new("mid"),
        ];
        names.sort();
        let sorted: Vec<&str> = names.iter().map(EndpointName::as_str).collect();
        assert_eq!(sorted, ["ALPHA", "MID", "ZETA"]);
    }

    #[test]
    fn test_endpoint_name_display_is_normalized() {
        assert_eq!(format!("{}", EndpointName::new(" web01 ")), "WEB01");
    }

    #[test]
    fn test_diff_is_aligned() {
        let aligned = BaselineDiff {
            target: EndpointName::new("web02"),
            to_install: BTreeSet::new(),
            to_remove: BTreeSet::new(),
        };
        assert!(aligned.is_aligned());

        let drifted = BaselineDiff {
            to_install: ["slack".to_string()].into_iter().collect(),
            ..aligned.clone()
        };
        assert!(!drifted.is_aligned());
    }
}
