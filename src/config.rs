//! Credential resolution.
//!
//! The API key and network id each resolve through an ordered chain of named
//! providers: CLI argument, in-process override, environment variable. The
//! first provider with a non-empty value wins, and the winner is logged at
//! debug level. Missing credentials fail the run before any network
//! activity.

use fleetkit::{Error, Result};

/// Environment variable consulted for the Dashboard API key.
pub const API_KEY_VAR: &str = "MERAKI_API_KEY";

/// Environment variable consulted for the Systems Manager network id.
pub const NET_ID_VAR: &str = "MERAKI_NET_ID";

// In-process overrides. Set these to pin credentials into a dedicated build;
// they outrank the environment but not the CLI.
const API_KEY_OVERRIDE: Option<&str> = None;
const NET_ID_OVERRIDE: Option<&str> = None;

/// Resolved credentials for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Dashboard API key.
    pub api_key: String,
    /// Systems Manager network id.
    pub network: String,
}

/// Resolve both credentials or fail with a configuration error.
pub fn resolve(api_key_arg: Option<String>, network_arg: Option<String>) -> Result<Credentials> {
    let api_key = first_non_empty(
        "API key",
        [
            ("argument", api_key_arg),
            ("override", API_KEY_OVERRIDE.map(str::to_string)),
            ("environment", std::env::var(API_KEY_VAR).ok()),
        ],
    )
    .ok_or_else(|| Error::config(format!("API key not set (use --api-key or {API_KEY_VAR})")))?;

    let network = first_non_empty(
        "network id",
        [
            ("argument", network_arg),
            ("override", NET_ID_OVERRIDE.map(str::to_string)),
            ("environment", std::env::var(NET_ID_VAR).ok()),
        ],
    )
    .ok_or_else(|| Error::config(format!("network id not set (use --network or {NET_ID_VAR})")))?;

    Ok(Credentials { api_key, network })
}

/// Query providers in order; the first non-empty value wins.
fn first_non_empty<const N: usize>(
    what: &str,
    providers: [(&'static str, Option<String>); N],
) -> Option<String> {
    for (provider, value) in providers {
        if let Some(value) = value {
            if !value.trim().is_empty() {
                log::debug!("{what} resolved from {provider}");
                return Some(value);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_provider_wins() {
        let value = first_non_empty(
            "test",
            [
                ("argument", Some("from-arg".to_string())),
                ("environment", Some("from-env".to_string())),
            ],
        );
        assert_eq!(value.as_deref(), Some("from-arg"));
    }

    #[test]
    fn test_later_provider_fills_gap() {
        let value = first_non_empty(
            "test",
            [
                ("argument", None),
                ("override", None),
                ("environment", Some("from-env".to_string())),
            ],
        );
        assert_eq!(value.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let value = first_non_empty(
            "test",
            [
                ("argument", Some("   ".to_string())),
                ("environment", Some("from-env".to_string())),
            ],
        );
        assert_eq!(value.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_all_providers_empty() {
        let value = first_non_empty("test", [("argument", None), ("environment", None)]);
        assert_eq!(value, None);
    }
}
