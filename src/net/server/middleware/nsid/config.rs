//! Configuration of the NSID middleware.
use std::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::info::{InfoPair, StaticInfo};

//------------ NsidConfig ----------------------------------------------------

/// Configuration for [`NsidMiddleware`][super::NsidMiddleware].
///
/// With the `serde` feature, the configuration can be deserialized. Both
/// fields are optional:
///
/// ```json
/// {
///     "enabled": true,
///     "identity": [
///         { "key": "host", "value": "ns1" },
///         { "key": "shard", "value": "7" }
///     ]
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NsidConfig {
    /// Whether NSID requests are answered at all.
    pub enabled: bool,

    /// The identity reported to clients, in the order given.
    pub identity: Vec<InfoPair>,
}

impl NsidConfig {
    /// Returns an information source reporting the configured identity.
    #[must_use]
    pub fn info_source(&self) -> StaticInfo {
        StaticInfo::new(self.identity.clone())
    }
}

impl Default for NsidConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            identity: Vec::new(),
        }
    }
}

//============ Testing =======================================================

#[cfg(all(test, feature = "serde"))]
mod test {
    use super::*;

    #[test]
    fn deserialize_defaults() {
        let config: NsidConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NsidConfig::default());
        assert!(config.enabled);
    }

    #[test]
    fn deserialize_identity() {
        let config: NsidConfig = serde_json::from_str(
            r#"{
                "enabled": false,
                "identity": [
                    { "key": "host", "value": "ns1" },
                    { "key": "shard", "value": "7" }
                ]
            }"#,
        )
        .unwrap();
        assert!(!config.enabled);
        assert_eq!(
            config.info_source().pairs(),
            [InfoPair::new("host", "ns1"), InfoPair::new("shard", "7")]
        );
    }
}
