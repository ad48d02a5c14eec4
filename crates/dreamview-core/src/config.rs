//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::model::ModelVariant;

/// Settings for one page session.
///
/// Every field has a default, so a partial JSON object (or none at all)
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Path or URL the image is POSTed to.
    pub endpoint: String,

    /// How long a banner stays up before its exit animation starts.
    pub notification_timeout_ms: u32,

    /// Length of the banner exit animation.
    pub notification_exit_ms: u32,

    /// Model variant preselected when the page loads.
    pub default_model: ModelVariant,
}

impl ClientConfig {
    /// Default generation endpoint.
    pub const DEFAULT_ENDPOINT: &'static str = "/generate/";
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            notification_timeout_ms: 5000,
            notification_exit_ms: 300,
            default_model: ModelVariant::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "/generate/");
        assert_eq!(config.notification_timeout_ms, 5000);
        assert_eq!(config.notification_exit_ms, 300);
        assert_eq!(config.default_model, ModelVariant::Inception);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"endpoint":"/api/dream","default_model":"vgg16"}"#).unwrap();
        assert_eq!(config.endpoint, "/api/dream");
        assert_eq!(config.default_model, ModelVariant::Vgg16);
        assert_eq!(config.notification_timeout_ms, 5000);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<ClientConfig>(r#"{"endpoint":"/x","retries":3}"#);
        assert!(err.is_err());
    }
}
