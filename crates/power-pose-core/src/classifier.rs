//! Power pose classification.
//!
//! [`PoseClassifier`] turns one [`Pose`] into a three-level [`Verdict`]:
//!
//! 1. No landmark at all: [`Verdict::NoPose`].
//! 2. Otherwise [`Verdict::Detected`], upgraded to [`Verdict::Confirmed`] when
//!    the power pose predicate holds.
//!
//! The predicate runs four gates in order and stops at the first failure:
//!
//! 1. Presence - shoulders, elbows, wrists and hips on both sides are detected
//! 2. Visibility - each of those eight reaches the minimum confidence
//! 3. Elbow height - each elbow sits strictly below its shoulder
//! 4. Arm angle - each shoulder-elbow-wrist angle is inside the inclusive range
//!
//! A failed gate is a normal negative outcome, never an error or a panic.
//! [`PoseClassifier::assess`] reports which gate stopped the evaluation.
//!
//! Hip landmarks only take part in the presence and visibility gates. A check
//! that the hands stay within some distance of the hips would slot in after
//! the arm-angle gate; it has no defined geometry yet.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::PowerPoseThresholds;
use crate::error::CoreResult;
use crate::geometry::angle_between;
use crate::types::{Confidence, Landmark, LandmarkType, Pose, Side};

/// The eight landmarks the power pose predicate needs, in check order.
pub const REQUIRED_LANDMARKS: [LandmarkType; 8] = [
    Side::Left.shoulder(),
    Side::Right.shoulder(),
    Side::Left.elbow(),
    Side::Right.elbow(),
    Side::Left.wrist(),
    Side::Right.wrist(),
    Side::Left.hip(),
    Side::Right.hip(),
];

/// Classification outcome for one pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    /// No landmark was detected
    NoPose,
    /// A pose is present but does not match the power pose
    Detected,
    /// The pose matches the power pose
    Confirmed,
}

impl Verdict {
    /// All verdicts, lowest first.
    pub const ALL: [Self; 3] = [Self::NoPose, Self::Detected, Self::Confirmed];

    /// Human-readable label shown to the user.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoPose => "no pose",
            Self::Detected => "pose detected",
            Self::Confirmed => "power pose",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gates of the power pose predicate, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PowerPoseGate {
    /// All required landmarks detected
    Presence,
    /// Required landmarks confident enough
    Visibility,
    /// Elbows below shoulders
    ElbowHeight,
    /// Elbow angles in range
    ArmAngle,
}

impl fmt::Display for PowerPoseGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Presence => write!(f, "presence"),
            Self::Visibility => write!(f, "visibility"),
            Self::ElbowHeight => write!(f, "elbow height"),
            Self::ArmAngle => write!(f, "arm angle"),
        }
    }
}

/// Why the power pose predicate did not hold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "reason", rename_all = "snake_case"))]
pub enum GateFailure {
    /// A required landmark is absent from the pose.
    MissingLandmark {
        /// The absent landmark
        landmark: LandmarkType,
    },
    /// A required landmark is below the visibility floor.
    LowVisibility {
        /// The landmark that is not confident enough
        landmark: LandmarkType,
        /// Its confidence
        confidence: Confidence,
    },
    /// An elbow is level with or above its shoulder.
    ElbowTooHigh {
        /// Offending side
        side: Side,
    },
    /// A shoulder-elbow-wrist angle is outside the accepted range.
    ArmAngleOutOfRange {
        /// Offending side
        side: Side,
        /// Measured angle in degrees
        angle: f64,
    },
}

impl GateFailure {
    /// The gate that produced this failure.
    #[must_use]
    pub fn gate(&self) -> PowerPoseGate {
        match self {
            Self::MissingLandmark { .. } => PowerPoseGate::Presence,
            Self::LowVisibility { .. } => PowerPoseGate::Visibility,
            Self::ElbowTooHigh { .. } => PowerPoseGate::ElbowHeight,
            Self::ArmAngleOutOfRange { .. } => PowerPoseGate::ArmAngle,
        }
    }
}

impl fmt::Display for GateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLandmark { landmark } => write!(f, "{landmark} not detected"),
            Self::LowVisibility {
                landmark,
                confidence,
            } => write!(f, "{landmark} visibility {confidence} too low"),
            Self::ElbowTooHigh { side } => write!(f, "{side} elbow too high"),
            Self::ArmAngleOutOfRange { side, angle } => {
                write!(f, "{side} arm angle {angle:.1} out of range")
            }
        }
    }
}

/// Measured shoulder-elbow-wrist angles, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmAngles {
    /// Left arm angle
    pub left: f64,
    /// Right arm angle
    pub right: f64,
}

impl ArmAngles {
    /// Angle for one side.
    #[must_use]
    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Verdict together with the evidence behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assessment {
    /// Final verdict
    pub verdict: Verdict,
    /// First failing gate, when a pose was present but not confirmed
    pub failure: Option<GateFailure>,
    /// Arm angles, once the evaluation got far enough to measure them
    pub arm_angles: Option<ArmAngles>,
}

/// Stateless power pose classifier.
///
/// Holds only its thresholds, so a single instance can be shared freely
/// across threads and called once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoseClassifier {
    thresholds: PowerPoseThresholds,
}

impl PoseClassifier {
    /// Creates a classifier with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if the thresholds fail validation.
    pub fn new(thresholds: PowerPoseThresholds) -> CoreResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// The thresholds in use.
    #[must_use]
    pub fn thresholds(&self) -> &PowerPoseThresholds {
        &self.thresholds
    }

    /// Classifies a pose.
    #[must_use]
    pub fn classify(&self, pose: &Pose) -> Verdict {
        self.assess(pose).verdict
    }

    /// Classifies a pose and reports the first failing gate.
    #[must_use]
    pub fn assess(&self, pose: &Pose) -> Assessment {
        if !pose.has_any_landmark() {
            trace!("no landmarks in pose");
            return Assessment {
                verdict: Verdict::NoPose,
                failure: None,
                arm_angles: None,
            };
        }

        let mut arm_angles = None;
        match self.check_gates(pose, &mut arm_angles) {
            Ok(()) => {
                debug!(?arm_angles, "power pose confirmed");
                Assessment {
                    verdict: Verdict::Confirmed,
                    failure: None,
                    arm_angles,
                }
            }
            Err(failure) => {
                debug!(gate = %failure.gate(), "{failure}");
                Assessment {
                    verdict: Verdict::Detected,
                    failure: Some(failure),
                    arm_angles,
                }
            }
        }
    }

    fn check_gates(
        &self,
        pose: &Pose,
        arm_angles: &mut Option<ArmAngles>,
    ) -> Result<(), GateFailure> {
        for &kind in &REQUIRED_LANDMARKS {
            require(pose, kind)?;
        }

        for &kind in &REQUIRED_LANDMARKS {
            let landmark = require(pose, kind)?;
            if !landmark.confidence.exceeds(self.thresholds.min_visibility) {
                return Err(GateFailure::LowVisibility {
                    landmark: kind,
                    confidence: landmark.confidence,
                });
            }
        }

        let mut angles = [0.0_f64; 2];
        for (slot, side) in angles.iter_mut().zip(Side::BOTH) {
            let shoulder = require(pose, side.shoulder())?;
            let elbow = require(pose, side.elbow())?;
            let wrist = require(pose, side.wrist())?;

            if !elbow.position.is_below(&shoulder.position) {
                return Err(GateFailure::ElbowTooHigh { side });
            }
            *slot = angle_between(shoulder.position, elbow.position, wrist.position);
        }

        let measured = ArmAngles {
            left: angles[0],
            right: angles[1],
        };
        *arm_angles = Some(measured);

        for side in Side::BOTH {
            let angle = measured.side(side);
            if !self.thresholds.arm_angle_in_range(angle) {
                return Err(GateFailure::ArmAngleOutOfRange { side, angle });
            }
        }

        Ok(())
    }
}

/// Looks up a landmark the predicate cannot do without.
fn require(pose: &Pose, landmark: LandmarkType) -> Result<&Landmark, GateFailure> {
    pose.get(landmark).ok_or(GateFailure::MissingLandmark { landmark })
}

/// Classifies a pose with the default power pose thresholds.
#[must_use]
pub fn classify(pose: &Pose) -> Verdict {
    PoseClassifier::default().classify(pose)
}
