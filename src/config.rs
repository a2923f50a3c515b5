use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TourError, TourResult};

pub const DEFAULT_AUTO_ADVANCE_DELAY: f64 = 4.0;
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.25;
pub const DEFAULT_PANEL_HEIGHT: f32 = 140.0;
pub const DEFAULT_PANEL_MARGIN: f32 = 16.0;
pub const DEFAULT_SPOTLIGHT_PADDING: f32 = 8.0;

/// Timing and layout settings for a tour run.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// config file only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Seconds between automatic advances
    pub auto_advance_delay: f64,
    /// Seconds the highlight takes to move between targets
    pub transition_animation_duration: f64,
    /// Height of the explanatory panel in points
    pub panel_height: f32,
    /// Gap between the panel and the screen edge it is anchored to
    pub panel_margin: f32,
    /// How far the highlight extends past its target rect
    pub spotlight_padding: f32,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            auto_advance_delay: DEFAULT_AUTO_ADVANCE_DELAY,
            transition_animation_duration: DEFAULT_ANIMATION_DURATION,
            panel_height: DEFAULT_PANEL_HEIGHT,
            panel_margin: DEFAULT_PANEL_MARGIN,
            spotlight_padding: DEFAULT_SPOTLIGHT_PADDING,
        }
    }
}

impl TourConfig {
    /// Checks that every value is usable by the sequencer and the demo surface.
    pub fn validate(&self) -> TourResult<()> {
        if !self.auto_advance_delay.is_finite() || self.auto_advance_delay <= 0.0 {
            return Err(invalid("auto_advance_delay", "must be a positive number of seconds"));
        }
        if !self.transition_animation_duration.is_finite() || self.transition_animation_duration < 0.0 {
            return Err(invalid(
                "transition_animation_duration",
                "must be zero or a positive number of seconds",
            ));
        }
        if !self.panel_height.is_finite() || self.panel_height <= 0.0 {
            return Err(invalid("panel_height", "must be positive"));
        }
        if !self.panel_margin.is_finite() || self.panel_margin < 0.0 {
            return Err(invalid("panel_margin", "must not be negative"));
        }
        if !self.spotlight_padding.is_finite() || self.spotlight_padding < 0.0 {
            return Err(invalid("spotlight_padding", "must not be negative"));
        }
        Ok(())
    }

    /// Parse a config from JSON and validate it
    pub fn from_json_str(json: &str) -> TourResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file from disk
    pub fn load(path: impl AsRef<Path>) -> TourResult<Self> {
        let path = path.as_ref();
        log::info!("Loading tour config from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

fn invalid(field: &'static str, reason: &str) -> TourError {
    TourError::InvalidConfig {
        field,
        reason: reason.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TourConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TourConfig::from_json_str(r#"{ "auto_advance_delay": 2.5 }"#).unwrap();
        assert_eq!(config.auto_advance_delay, 2.5);
        assert_eq!(config.transition_animation_duration, DEFAULT_ANIMATION_DURATION);
        assert_eq!(config.panel_height, DEFAULT_PANEL_HEIGHT);
    }

    #[test]
    fn test_rejects_non_positive_delay() {
        let result = TourConfig::from_json_str(r#"{ "auto_advance_delay": 0.0 }"#);
        match result {
            Err(TourError::InvalidConfig { field, .. }) => assert_eq!(field, "auto_advance_delay"),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_animation_duration_is_allowed() {
        let config = TourConfig {
            transition_animation_duration: 0.0,
            ..TourConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    fn rejected_field(config: TourConfig) -> &'static str {
        match config.validate() {
            Err(TourError::InvalidConfig { field, .. }) => field,
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_finite_timings() {
        let config = TourConfig {
            auto_advance_delay: f64::INFINITY,
            ..TourConfig::default()
        };
        assert_eq!(rejected_field(config), "auto_advance_delay");

        let config = TourConfig {
            transition_animation_duration: f64::NAN,
            ..TourConfig::default()
        };
        assert_eq!(rejected_field(config), "transition_animation_duration");
    }

    #[test]
    fn test_rejects_bad_panel_height() {
        let config = TourConfig {
            panel_height: 0.0,
            ..TourConfig::default()
        };
        assert_eq!(rejected_field(config), "panel_height");

        let config = TourConfig {
            panel_height: f32::NAN,
            ..TourConfig::default()
        };
        assert_eq!(rejected_field(config), "panel_height");
    }

    #[test]
    fn test_rejects_negative_panel_margin() {
        let config = TourConfig {
            panel_margin: -1.0,
            ..TourConfig::default()
        };
        assert_eq!(rejected_field(config), "panel_margin");
    }

    #[test]
    fn test_rejects_negative_spotlight_padding() {
        let config = TourConfig {
            spotlight_padding: -0.5,
            ..TourConfig::default()
        };
        assert_eq!(rejected_field(config), "spotlight_padding");

        let config = TourConfig {
            spotlight_padding: f32::INFINITY,
            ..TourConfig::default()
        };
        assert_eq!(rejected_field(config), "spotlight_padding");
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = TourConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(TourError::Parse(_))));
    }
}
