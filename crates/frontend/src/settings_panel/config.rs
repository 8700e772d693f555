use contracts::settings::CREST_SETTINGS_PATH;
use serde::{Deserialize, Serialize};

use crate::shared::api_utils::api_url;

/// Attribute on the host element that may carry a JSON [`PanelConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-panel-config";

/// How failed requests show up in the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisplay {
    /// Leave the container untouched; the failure is only logged.
    #[default]
    Silent,
    /// Replace the container with a short error notice.
    Inline,
}

/// Settings panel configuration.
///
/// Every field has a default, so a host page only has to spell out what it
/// changes, e.g. `{"timeout_ms": 10000, "error_display": "inline"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Path of the settings endpoint used for the initial load and form posts.
    pub endpoint: String,
    /// Optional origin prefixed to `endpoint`, e.g. `https://map.example.org`.
    pub api_base: Option<String>,
    /// Id of the form whose fields are serialized on submit.
    pub form_id: String,
    /// Anchors carrying this attribute are followed inside the panel.
    pub link_attribute: String,
    /// Also follow unmarked anchors whose href points into `endpoint`, as
    /// served by fragments that still use inline click handlers.
    pub intercept_endpoint_links: bool,
    /// Drop responses of requests that were superseded by a newer one.
    pub discard_stale: bool,
    pub error_display: ErrorDisplay,
    /// No timeout when unset.
    pub timeout_ms: Option<u32>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            endpoint: CREST_SETTINGS_PATH.to_string(),
            api_base: None,
            form_id: "accountProfSettingsForm".to_string(),
            link_attribute: "data-panel-link".to_string(),
            intercept_endpoint_links: true,
            discard_stale: true,
            error_display: ErrorDisplay::Silent,
            timeout_ms: None,
        }
    }
}

impl PanelConfig {
    pub fn endpoint_url(&self) -> String {
        api_url(self.api_base.as_deref(), &self.endpoint)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse panel config: {}", e))
    }

    /// Reads [`CONFIG_ATTRIBUTE`] from the host element, falling back to
    /// defaults when it is missing or malformed.
    pub fn from_element(element: &web_sys::Element) -> Self {
        let Some(json) = element.get_attribute(CONFIG_ATTRIBUTE) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
