//! Thresholds for the power pose template.
//!
//! [`PowerPoseThresholds`] carries the visibility floor and the inclusive
//! elbow-angle range the classifier checks against. The defaults are the
//! reference template: every required landmark at confidence 0.9 or better,
//! and both arms bent between 70 and 90 degrees.
//!
//! With the `serde` feature the thresholds can be stored to and restored from
//! JSON files.
//!
//! # Example
//!
//! ```rust
//! use power_pose_core::config::PowerPoseThresholds;
//!
//! let thresholds = PowerPoseThresholds::default();
//! thresholds.validate().expect("default thresholds are valid");
//!
//! assert!(thresholds.arm_angle_in_range(70.0));
//! assert!(thresholds.arm_angle_in_range(90.0));
//! assert!(!thresholds.arm_angle_in_range(90.1));
//! ```

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default minimum landmark confidence for the power pose.
pub const DEFAULT_MIN_VISIBILITY: f32 = 0.9;

/// Default lower bound of the elbow angle, in degrees (inclusive).
pub const DEFAULT_MIN_ARM_ANGLE: f64 = 70.0;

/// Default upper bound of the elbow angle, in degrees (inclusive).
pub const DEFAULT_MAX_ARM_ANGLE: f64 = 90.0;

/// Visibility and joint-angle thresholds for the power pose.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerPoseThresholds {
    /// Minimum confidence every required landmark must reach. Default: **0.9**.
    pub min_visibility: f32,

    /// Smallest accepted shoulder-elbow-wrist angle in degrees. Default: **70**.
    pub min_arm_angle: f64,

    /// Largest accepted shoulder-elbow-wrist angle in degrees. Default: **90**.
    pub max_arm_angle: f64,
}

impl Default for PowerPoseThresholds {
    fn default() -> Self {
        Self {
            min_visibility: DEFAULT_MIN_VISIBILITY,
            min_arm_angle: DEFAULT_MIN_ARM_ANGLE,
            max_arm_angle: DEFAULT_MAX_ARM_ANGLE,
        }
    }
}

impl PowerPoseThresholds {
    /// Returns `true` if `angle` lies in `[min_arm_angle, max_arm_angle]`.
    #[must_use]
    pub fn arm_angle_in_range(&self, angle: f64) -> bool {
        (self.min_arm_angle..=self.max_arm_angle).contains(&angle)
    }

    /// Validate all fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first field that is out
    /// of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(ConfigError::invalid_value(
                "min_visibility",
                format!("must be in [0.0, 1.0], got {}", self.min_visibility),
            ));
        }

        for (field, angle) in [
            ("min_arm_angle", self.min_arm_angle),
            ("max_arm_angle", self.max_arm_angle),
        ] {
            if !(0.0..=180.0).contains(&angle) {
                return Err(ConfigError::invalid_value(
                    field,
                    format!("must be in [0.0, 180.0] degrees, got {angle}"),
                ));
            }
        }

        if self.min_arm_angle > self.max_arm_angle {
            return Err(ConfigError::invalid_value(
                "min_arm_angle",
                format!(
                    "must not exceed max_arm_angle ({} > {})",
                    self.min_arm_angle, self.max_arm_angle
                ),
            ));
        }

        Ok(())
    }

    /// Load and validate thresholds from a JSON file.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails [`validate`](Self::validate).
    #[cfg(feature = "serde")]
    pub fn from_json(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let thresholds: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Write the thresholds to a pretty-printed JSON file, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    #[cfg(feature = "serde")]
    pub fn to_json(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, json).map_err(|source| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}
