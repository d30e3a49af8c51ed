//! Court settings
//!
//! Supplied by the host page as JSON (`data-settings` on the canvas element).
//! Nothing is ever written back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading settings
#[derive(Debug)]
pub enum SettingsError {
    /// The JSON could not be parsed
    Parse(serde_json::Error),
    /// The values parsed but are unusable
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            SettingsError::Invalid(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Simulation and visual settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Smallest ball radius (pixels)
    pub min_size: u32,
    /// Largest ball radius (pixels). Also the inset of the click spawn bounds.
    pub max_size: u32,
    /// Collisions a ball survives before it is culled
    pub max_collisions: u32,
    /// Largest per-axis speed of a spawned ball (pixels per frame)
    pub max_speed: u32,
    /// Alpha of the black wash painted each frame (lower = longer trails)
    pub fade_alpha: f32,
    /// Fixed RNG seed; the host picks one when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_size: MIN_BALL_SIZE,
            max_size: MAX_BALL_SIZE,
            max_collisions: MAX_COLLISIONS,
            max_speed: MAX_BALL_SPEED,
            fade_alpha: FADE_ALPHA,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain data with no maps or non-string keys; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_size == 0 {
            return Err(SettingsError::Invalid("min_size must be positive".into()));
        }
        if self.min_size > self.max_size {
            return Err(SettingsError::Invalid(format!(
                "min_size ({}) exceeds max_size ({})",
                self.min_size, self.max_size
            )));
        }
        if self.max_size > BALL_SIZE_LIMIT {
            return Err(SettingsError::Invalid(format!(
                "max_size ({}) exceeds {}",
                self.max_size, BALL_SIZE_LIMIT
            )));
        }
        if self.max_speed > BALL_SPEED_LIMIT {
            return Err(SettingsError::Invalid(format!(
                "max_speed ({}) exceeds {}",
                self.max_speed, BALL_SPEED_LIMIT
            )));
        }
        if self.max_collisions == 0 {
            return Err(SettingsError::Invalid(
                "max_collisions must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fade_alpha) {
            return Err(SettingsError::Invalid(format!(
                "fade_alpha ({}) must be within [0, 1]",
                self.fade_alpha
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.min_size, 10);
        assert_eq!(s.max_size, 20);
        assert_eq!(s.max_collisions, 1);
        assert_eq!(s.max_speed, 7);
        assert!((s.fade_alpha - 0.1).abs() < f32::EPSILON);
        assert!(s.seed.is_none());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"max_collisions": 3, "seed": 42}"#).unwrap();
        assert_eq!(s.max_collisions, 3);
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.min_size, 10);
        assert_eq!(s.max_size, 20);
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            seed: Some(9),
            ..Default::default()
        };
        assert_eq!(Settings::from_json(&s.to_json()).unwrap(), s);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{"min_size": 30, "max_size": 20}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        assert!(err.to_string().contains("min_size"));

        assert!(Settings::from_json(r#"{"max_collisions": 0}"#).is_err());
        assert!(Settings::from_json(r#"{"min_size": 0}"#).is_err());
        assert!(Settings::from_json(r#"{"fade_alpha": 1.5}"#).is_err());

        let err = Settings::from_json(r#"{"max_speed": 2147483648}"#).unwrap_err();
        assert!(err.to_string().contains("max_speed"));
        let err = Settings::from_json(r#"{"min_size": 3000000000, "max_size": 3000000000}"#)
            .unwrap_err();
        assert!(err.to_string().contains("max_size"));
    }

    #[test]
    fn test_limits_are_inclusive() {
        let s = Settings {
            min_size: BALL_SIZE_LIMIT,
            max_size: BALL_SIZE_LIMIT,
            max_speed: BALL_SPEED_LIMIT,
            ..Default::default()
        };
        assert!(s.validate().is_ok());
        assert!(
            Settings {
                max_speed: BALL_SPEED_LIMIT + 1,
                ..s.clone()
            }
            .validate()
            .is_err()
        );
    }
}
