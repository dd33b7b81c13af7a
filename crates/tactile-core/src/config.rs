use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_THUMB_SIZE_PX, DEFAULT_TOLERANCE_MARGIN_PX, DEFAULT_TRACK_CORNER_RADIUS_PX,
    DEFAULT_TRACK_HEIGHT_PX,
};

/// Read-only geometry shared by the interactive controls.
///
/// Hosts usually embed this in their own configuration file; any field left
/// out falls back to the defaults in [`crate::constants`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct InteractionConfig {
    /// Distance beyond a control's bounds that still counts as "on" it
    pub tolerance_margin: u32,

    /// Height of a slider's rail in pixels
    pub track_height: u32,

    /// Corner radius of a slider's rail in pixels
    pub track_corner_radius: u32,

    /// Thumb diameter in pixels; the thumb's travel is the track width minus this
    pub thumb_size: u32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            tolerance_margin: DEFAULT_TOLERANCE_MARGIN_PX,
            track_height: DEFAULT_TRACK_HEIGHT_PX,
            track_corner_radius: DEFAULT_TRACK_CORNER_RADIUS_PX,
            thumb_size: DEFAULT_THUMB_SIZE_PX,
        }
    }
}

impl InteractionConfig {
    pub fn with_tolerance_margin(mut self, margin: u32) -> Self {
        self.tolerance_margin = margin;
        self
    }

    pub fn with_thumb_size(mut self, size: u32) -> Self {
        self.thumb_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = InteractionConfig::default();
        assert_eq!(config.tolerance_margin, 20);
        assert_eq!(config.track_height, DEFAULT_TRACK_HEIGHT_PX);
        assert_eq!(config.thumb_size, DEFAULT_THUMB_SIZE_PX);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: InteractionConfig =
            serde_json::from_str(r#"{ "tolerance_margin": 12 }"#).unwrap();

        assert_eq!(config.tolerance_margin, 12);
        assert_eq!(config.track_corner_radius, DEFAULT_TRACK_CORNER_RADIUS_PX);
        assert_eq!(config.thumb_size, DEFAULT_THUMB_SIZE_PX);
    }

    #[test]
    fn test_builder_overrides() {
        let config = InteractionConfig::default()
            .with_tolerance_margin(0)
            .with_thumb_size(30);
        assert_eq!(config.tolerance_margin, 0);
        assert_eq!(config.thumb_size, 30);
    }
}
