//! Joint-angle geometry over 2D landmark positions.

use crate::types::{Point2, Pose};

/// Returns `true` if the pose contains at least one landmark.
#[must_use]
pub fn has_any_landmark(pose: &Pose) -> bool {
    pose.has_any_landmark()
}

/// Interior angle at `mid`, in degrees, between the rays `mid -> start` and
/// `mid -> end`.
///
/// The two ray headings come from `atan2`; their difference is taken first,
/// then its absolute value, and a result above 180 degrees is folded to
/// `360 - angle`. The result lies in `[0, 180]` and does not depend on the
/// order of `start` and `end`.
///
/// Coordinates are widened to `f64` before any trigonometry.
///
/// ```rust
/// use power_pose_core::geometry::angle_between;
/// use power_pose_core::Point2;
///
/// let angle = angle_between(
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 1.0),
/// );
/// assert_eq!(angle, 90.0);
/// ```
#[must_use]
pub fn angle_between(start: Point2, mid: Point2, end: Point2) -> f64 {
    let end_heading = heading(mid, end);
    let start_heading = heading(mid, start);

    let angle = (end_heading - start_heading).to_degrees().abs();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

#[inline]
fn heading(from: Point2, to: Point2) -> f64 {
    let dy = f64::from(to.y) - f64::from(from.y);
    let dx = f64::from(to.x) - f64::from(from.x);
    dy.atan2(dx)
}
