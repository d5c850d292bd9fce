//! # Power Pose Core
//!
//! Landmark types, joint-angle geometry and the power pose classifier.
//!
//! An external landmark detector produces one [`Pose`] per processed frame.
//! [`PoseClassifier::classify`] turns it into a [`Verdict`]:
//!
//! - [`Verdict::NoPose`] when nothing was detected,
//! - [`Verdict::Detected`] when a body is visible,
//! - [`Verdict::Confirmed`] when it holds the power pose: both elbows below
//!   the shoulders, both arms bent between 70 and 90 degrees, and shoulders,
//!   elbows, wrists and hips all detected with confidence of at least 0.9.
//!
//! Classification is a pure read of the pose. It never fails and never
//! panics; missing or faint landmarks simply keep the verdict at `Detected`.
//!
//! ## Modules
//!
//! - [`types`]: [`Pose`], [`Landmark`], [`LandmarkType`], [`Confidence`], [`Point2`]
//! - [`geometry`]: [`angle_between`](geometry::angle_between) and friends
//! - [`classifier`]: [`PoseClassifier`], [`Verdict`], [`Assessment`]
//! - [`config`]: [`PowerPoseThresholds`]
//! - [`error`]: [`CoreError`], [`ConfigError`]
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization of the data types, JSON threshold files
//!
//! ## Example
//!
//! ```rust
//! use power_pose_core::{Confidence, Landmark, LandmarkType, Pose, PoseClassifier, Verdict};
//!
//! let classifier = PoseClassifier::default();
//! assert_eq!(classifier.classify(&Pose::new()), Verdict::NoPose);
//!
//! let pose: Pose = [
//!     Landmark::new(LandmarkType::LeftShoulder, 0.0, 0.0, Confidence::MAX),
//!     Landmark::new(LandmarkType::LeftElbow, 0.0, 1.0, Confidence::MAX),
//!     Landmark::new(LandmarkType::LeftWrist, 1.0, 1.0, Confidence::MAX),
//!     Landmark::new(LandmarkType::RightShoulder, 4.0, 0.0, Confidence::MAX),
//!     Landmark::new(LandmarkType::RightElbow, 4.0, 1.0, Confidence::MAX),
//!     Landmark::new(LandmarkType::RightWrist, 3.0, 1.0, Confidence::MAX),
//!     Landmark::new(LandmarkType::LeftHip, 1.0, 4.0, Confidence::MAX),
//!     Landmark::new(LandmarkType::RightHip, 3.0, 4.0, Confidence::MAX),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(classifier.classify(&pose), Verdict::Confirmed);
//! ```

#![forbid(unsafe_code)]

pub mod classifier;
pub mod config;
pub mod error;
pub mod geometry;
pub mod types;

// Re-export commonly used types at the crate root
pub use classifier::{
    ArmAngles, Assessment, GateFailure, PoseClassifier, PowerPoseGate, Verdict,
    REQUIRED_LANDMARKS,
};
pub use config::PowerPoseThresholds;
pub use error::{ConfigError, CoreError, CoreResult};
pub use types::{Confidence, Landmark, LandmarkType, Point2, Pose, Side};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of landmark identities in the body model
pub const LANDMARK_COUNT: usize = 33;

/// Prelude module for convenient imports.
///
/// ```rust
/// use power_pose_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::classifier::{Assessment, GateFailure, PoseClassifier, Verdict};
    pub use crate::config::PowerPoseThresholds;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::geometry::{angle_between, has_any_landmark};
    pub use crate::types::{Confidence, Landmark, LandmarkType, Point2, Pose, Side};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_valid() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_landmark_count_matches_enum() {
        assert_eq!(LandmarkType::all().len(), LANDMARK_COUNT);
        assert_eq!(REQUIRED_LANDMARKS.len(), 8);
    }
}
