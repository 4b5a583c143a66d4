//! Engine configuration.

use crate::display::DisplaySize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default spacing between raw events, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 12;

/// Options applied when an engine handle is created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Initial inter-event delay in milliseconds.
    pub delay_ms: u64,
    /// Use this display size instead of asking the platform.
    ///
    /// Required for backends without a geometry API, such as evdev.
    pub display_override: Option<DisplaySize>,
    /// Name of the virtual device created by the evdev backend.
    pub device_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            display_override: None,
            device_name: "puppetry virtual input".to_string(),
        }
    }
}

#[cfg(feature = "serde")]
impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::Error::InvalidArgument(format!("invalid settings: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(settings.display_override, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{"delay_ms": 5, "display_override": {"width": 800, "height": 600}}"#)
                .unwrap();
        assert_eq!(settings.delay_ms, 5);
        assert_eq!(settings.display_override, Some(DisplaySize::new(800, 600)));
        assert_eq!(settings.device_name, Settings::default().device_name);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Settings::from_json("{ delay_ms: ").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidArgument(_)));
    }
}
