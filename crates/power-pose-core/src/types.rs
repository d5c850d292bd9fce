//! Core data types for power pose classification.
//!
//! A detector hands over one [`Pose`] per processed frame. A pose is a table
//! of optional [`Landmark`]s indexed by [`LandmarkType`], so every identity
//! appears at most once and lookups are total.
//!
//! # Type Categories
//!
//! - **Common Types**: [`Confidence`], [`Point2`]
//! - **Landmark Types**: [`LandmarkType`], [`Landmark`], [`Side`]
//! - **Pose Types**: [`Pose`]

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::LANDMARK_COUNT;

// =============================================================================
// Common Types
// =============================================================================

/// Confidence score in the range [0.0, 1.0].
///
/// For landmarks this is the detector's in-frame likelihood.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f32", into = "f32"))]
pub struct Confidence(f32);

impl Confidence {
    /// Creates a new confidence value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range [0.0, 1.0].
    pub fn new(value: f32) -> CoreResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(CoreError::validation(format!(
                "Confidence must be in [0.0, 1.0], got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw confidence value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.0
    }

    /// Returns `true` if the confidence reaches the given threshold.
    #[must_use]
    pub fn exceeds(&self, threshold: f32) -> bool {
        self.0 >= threshold
    }

    /// Maximum confidence (1.0).
    pub const MAX: Self = Self(1.0);

    /// Minimum confidence (0.0).
    pub const MIN: Self = Self(0.0);
}

impl Default for Confidence {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<f32> for Confidence {
    type Error = CoreError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f32 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A 2D position in image space.
///
/// Units are whatever the detector reports (pixels or normalized). The y axis
/// grows downward, so a larger `y` is lower in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate, increasing downward
    pub y: f32,
}

impl Point2 {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if this point sits strictly lower in the frame than `other`.
    #[must_use]
    pub fn is_below(&self, other: &Self) -> bool {
        self.y > other.y
    }
}

// =============================================================================
// Landmark Types
// =============================================================================

/// Body landmark identities in detector index order (33-point body model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum LandmarkType {
    /// Nose
    Nose = 0,
    /// Left eye, inner corner
    LeftEyeInner = 1,
    /// Left eye
    LeftEye = 2,
    /// Left eye, outer corner
    LeftEyeOuter = 3,
    /// Right eye, inner corner
    RightEyeInner = 4,
    /// Right eye
    RightEye = 5,
    /// Right eye, outer corner
    RightEyeOuter = 6,
    /// Left ear
    LeftEar = 7,
    /// Right ear
    RightEar = 8,
    /// Left corner of the mouth
    LeftMouth = 9,
    /// Right corner of the mouth
    RightMouth = 10,
    /// Left shoulder
    LeftShoulder = 11,
    /// Right shoulder
    RightShoulder = 12,
    /// Left elbow
    LeftElbow = 13,
    /// Right elbow
    RightElbow = 14,
    /// Left wrist
    LeftWrist = 15,
    /// Right wrist
    RightWrist = 16,
    /// Left pinky knuckle
    LeftPinky = 17,
    /// Right pinky knuckle
    RightPinky = 18,
    /// Left index knuckle
    LeftIndex = 19,
    /// Right index knuckle
    RightIndex = 20,
    /// Left thumb knuckle
    LeftThumb = 21,
    /// Right thumb knuckle
    RightThumb = 22,
    /// Left hip
    LeftHip = 23,
    /// Right hip
    RightHip = 24,
    /// Left knee
    LeftKnee = 25,
    /// Right knee
    RightKnee = 26,
    /// Left ankle
    LeftAnkle = 27,
    /// Right ankle
    RightAnkle = 28,
    /// Left heel
    LeftHeel = 29,
    /// Right heel
    RightHeel = 30,
    /// Left foot index
    LeftFootIndex = 31,
    /// Right foot index
    RightFootIndex = 32,
}

impl LandmarkType {
    /// Returns all landmark types in index order.
    #[must_use]
    pub fn all() -> &'static [Self; LANDMARK_COUNT] {
        &[
            Self::Nose,
            Self::LeftEyeInner,
            Self::LeftEye,
            Self::LeftEyeOuter,
            Self::RightEyeInner,
            Self::RightEye,
            Self::RightEyeOuter,
            Self::LeftEar,
            Self::RightEar,
            Self::LeftMouth,
            Self::RightMouth,
            Self::LeftShoulder,
            Self::RightShoulder,
            Self::LeftElbow,
            Self::RightElbow,
            Self::LeftWrist,
            Self::RightWrist,
            Self::LeftPinky,
            Self::RightPinky,
            Self::LeftIndex,
            Self::RightIndex,
            Self::LeftThumb,
            Self::RightThumb,
            Self::LeftHip,
            Self::RightHip,
            Self::LeftKnee,
            Self::RightKnee,
            Self::LeftAnkle,
            Self::RightAnkle,
            Self::LeftHeel,
            Self::RightHeel,
            Self::LeftFootIndex,
            Self::RightFootIndex,
        ]
    }

    /// Returns the landmark name as a string.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftMouth => "left_mouth",
            Self::RightMouth => "right_mouth",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }

    /// Returns the table index of this landmark.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LandmarkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for LandmarkType {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| CoreError::validation(format!("Invalid landmark type: {value}")))
    }
}

/// Body side of a paired landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Subject's left
    Left,
    /// Subject's right
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Shoulder landmark on this side.
    #[must_use]
    pub const fn shoulder(self) -> LandmarkType {
        match self {
            Self::Left => LandmarkType::LeftShoulder,
            Self::Right => LandmarkType::RightShoulder,
        }
    }

    /// Elbow landmark on this side.
    #[must_use]
    pub const fn elbow(self) -> LandmarkType {
        match self {
            Self::Left => LandmarkType::LeftElbow,
            Self::Right => LandmarkType::RightElbow,
        }
    }

    /// Wrist landmark on this side.
    #[must_use]
    pub const fn wrist(self) -> LandmarkType {
        match self {
            Self::Left => LandmarkType::LeftWrist,
            Self::Right => LandmarkType::RightWrist,
        }
    }

    /// Hip landmark on this side.
    #[must_use]
    pub const fn hip(self) -> LandmarkType {
        match self {
            Self::Left => LandmarkType::LeftHip,
            Self::Right => LandmarkType::RightHip,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A single detected body landmark.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Landmark {
    /// Identity of the landmark
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub landmark_type: LandmarkType,
    /// Position in image space
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub position: Point2,
    /// In-frame likelihood
    pub confidence: Confidence,
}

impl Landmark {
    /// Creates a new landmark.
    #[must_use]
    pub fn new(landmark_type: LandmarkType, x: f32, y: f32, confidence: Confidence) -> Self {
        Self {
            landmark_type,
            position: Point2::new(x, y),
            confidence,
        }
    }
}

// =============================================================================
// Pose Types
// =============================================================================

/// All landmarks detected in one frame.
///
/// Stored as a fixed table indexed by [`LandmarkType`]; absent entries are
/// `None`. Inserting a landmark whose identity is already present replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    landmarks: [Option<Landmark>; LANDMARK_COUNT],
}

impl Pose {
    /// Creates a new empty pose.
    #[must_use]
    pub fn new() -> Self {
        Self {
            landmarks: [None; LANDMARK_COUNT],
        }
    }

    /// Inserts a landmark, returning the one it replaced, if any.
    pub fn insert(&mut self, landmark: Landmark) -> Option<Landmark> {
        self.landmarks[landmark.landmark_type.index()].replace(landmark)
    }

    /// Builder-style [`Pose::insert`].
    #[must_use]
    pub fn with(mut self, landmark: Landmark) -> Self {
        self.insert(landmark);
        self
    }

    /// Gets a landmark by type.
    #[must_use]
    pub fn get(&self, landmark_type: LandmarkType) -> Option<&Landmark> {
        self.landmarks[landmark_type.index()].as_ref()
    }

    /// Returns `true` if the landmark is present.
    #[must_use]
    pub fn contains(&self, landmark_type: LandmarkType) -> bool {
        self.get(landmark_type).is_some()
    }

    /// Returns `true` if at least one landmark was detected.
    #[must_use]
    pub fn has_any_landmark(&self) -> bool {
        self.landmarks.iter().any(Option::is_some)
    }

    /// Returns the number of present landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.iter().filter(|lm| lm.is_some()).count()
    }

    /// Returns `true` if no landmark was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_any_landmark()
    }

    /// Iterates over present landmarks in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter().filter_map(Option::as_ref)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Landmark> for Pose {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        let mut pose = Self::new();
        for landmark in iter {
            pose.insert(landmark);
        }
        pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_validation() {
        assert!(Confidence::new(0.5).is_ok());
        assert!(Confidence::new(0.0).is_ok());
        assert!(Confidence::new(1.0).is_ok());
        assert!(Confidence::new(-0.1).is_err());
        assert!(Confidence::new(1.1).is_err());
        assert!(Confidence::new(f32::NAN).is_err());
    }

    #[test]
    fn test_confidence_threshold() {
        let high = Confidence::new(0.9).unwrap();
        let low = Confidence::new(0.89).unwrap();

        assert!(high.exceeds(0.9));
        assert!(!low.exceeds(0.9));
    }

    #[test]
    fn test_landmark_type_conversion() {
        assert_eq!(LandmarkType::try_from(0).unwrap(), LandmarkType::Nose);
        assert_eq!(LandmarkType::try_from(11).unwrap(), LandmarkType::LeftShoulder);
        assert_eq!(LandmarkType::try_from(32).unwrap(), LandmarkType::RightFootIndex);
        assert!(LandmarkType::try_from(33).is_err());
    }

    #[test]
    fn test_landmark_type_indices_match_table_order() {
        for (i, kind) in LandmarkType::all().iter().enumerate() {
            assert_eq!(kind.index(), i, "{kind} out of order");
        }
    }

    #[test]
    fn test_side_landmarks() {
        assert_eq!(Side::Left.shoulder(), LandmarkType::LeftShoulder);
        assert_eq!(Side::Right.elbow(), LandmarkType::RightElbow);
        assert_eq!(Side::Left.wrist(), LandmarkType::LeftWrist);
        assert_eq!(Side::Right.hip(), LandmarkType::RightHip);
    }

    #[test]
    fn test_pose_lookup() {
        let mut pose = Pose::new();
        assert!(!pose.has_any_landmark());
        assert!(pose.is_empty());

        pose.insert(Landmark::new(LandmarkType::Nose, 0.5, 0.3, Confidence::MAX));
        pose.insert(Landmark::new(
            LandmarkType::LeftShoulder,
            0.4,
            0.5,
            Confidence::new(0.8).unwrap(),
        ));

        assert!(pose.has_any_landmark());
        assert_eq!(pose.len(), 2);
        assert!(pose.get(LandmarkType::Nose).is_some());
        assert!(pose.get(LandmarkType::RightAnkle).is_none());
        assert!(!pose.contains(LandmarkType::RightShoulder));
    }

    #[test]
    fn test_pose_insert_replaces_identity() {
        let mut pose = Pose::new();
        assert!(pose
            .insert(Landmark::new(LandmarkType::LeftWrist, 1.0, 1.0, Confidence::MAX))
            .is_none());
        let previous = pose.insert(Landmark::new(LandmarkType::LeftWrist, 2.0, 3.0, Confidence::MIN));

        assert_eq!(previous.map(|lm| lm.position), Some(Point2::new(1.0, 1.0)));
        assert_eq!(pose.len(), 1);
        assert_eq!(
            pose.get(LandmarkType::LeftWrist).map(|lm| lm.position),
            Some(Point2::new(2.0, 3.0))
        );
    }

    #[test]
    fn test_pose_from_iterator_orders_by_index() {
        let pose: Pose = [
            Landmark::new(LandmarkType::RightHip, 0.0, 0.0, Confidence::MAX),
            Landmark::new(LandmarkType::Nose, 0.0, 0.0, Confidence::MAX),
        ]
        .into_iter()
        .collect();

        let kinds: Vec<_> = pose.iter().map(|lm| lm.landmark_type).collect();
        assert_eq!(kinds, vec![LandmarkType::Nose, LandmarkType::RightHip]);
    }

    #[test]
    fn test_point_below() {
        let shoulder = Point2::new(0.0, 0.0);
        assert!(Point2::new(0.0, 1.0).is_below(&shoulder));
        assert!(!Point2::new(0.0, 0.0).is_below(&shoulder));
        assert!(!Point2::new(0.0, -1.0).is_below(&shoulder));
    }
}
