//! Page-supplied client configuration.
//!
//! A page may embed overrides as JSON:
//!
//! ```html
//! <script type="application/json" id="dreamview-config">
//!   { "endpoint": "/api/generate/", "default_model": "vgg16" }
//! </script>
//! ```
//!
//! Missing element means defaults; malformed JSON is logged and also
//! falls back to defaults.

use dreamview_core::ClientConfig;
use tracing::{info, warn};

/// DOM id of the optional configuration element.
pub const CONFIG_ELEMENT_ID: &str = "dreamview-config";

/// Parse a configuration document. Absent fields keep their defaults.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed JSON or unknown fields.
pub fn parse_config(json: &str) -> Result<ClientConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load the configuration from the page, falling back to defaults.
#[must_use]
pub fn load_config() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    let Some(text) = text else {
        return ClientConfig::default();
    };

    match parse_config(&text) {
        Ok(config) => {
            info!(endpoint = config.endpoint.as_str(), "loaded page configuration");
            config
        }
        Err(err) => {
            warn!(%err, "ignoring malformed page configuration");
            ClientConfig::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dreamview_core::ModelVariant;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(parse_config("{}").unwrap(), ClientConfig::default());
    }

    #[test]
    fn whitespace_around_document_is_fine() {
        let config = parse_config("\n  {\"notification_timeout_ms\": 8000}\n").unwrap();
        assert_eq!(config.notification_timeout_ms, 8000);
        assert_eq!(config.default_model, ModelVariant::Inception);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_config("{endpoint:").is_err());
        assert!(parse_config(r#"{"default_model":"custom"}"#).is_err());
    }
}
