//! Look-at rotation math.
//!
//! Coordinates use a forward/right/up frame mapped onto `glam::Vec3` as
//! x/y/z. A look-at rotation is a pitch/yaw pair in degrees with roll fixed
//! at zero, matching what the in-game view-rotation hook expects.

use std::fmt;

use glam::Vec3;

/// Pitch/yaw orientation in degrees, roll implicitly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookRotation {
    /// Elevation above the horizontal plane, degrees.
    pub pitch: f32,
    /// Heading from the forward axis towards the right axis, degrees.
    pub yaw: f32,
}

impl fmt::Display for LookRotation {
    /// Renders the exact argument format of the in-game hook:
    /// `"<pitch>,<yaw>"` with plain decimal formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.pitch, self.yaw)
    }
}

/// Computes the rotation that orients a viewer at `source` towards `target`.
///
/// Yaw is `atan2` of the right delta over the forward delta; pitch is `atan2`
/// of the up delta over the horizontal distance. Scaling the delta uniformly
/// does not change the result. When `source == target` both components are
/// zero by the `atan2(0, 0) == 0` convention, not an error.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use lyra_smoke::rotation::look_at;
///
/// let rot = look_at(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0));
/// assert!((rot.yaw - 90.0).abs() < 1e-4);
/// assert!(rot.pitch.abs() < 1e-4);
/// ```
#[must_use]
pub fn look_at(source: Vec3, target: Vec3) -> LookRotation {
    let delta = target - source;
    let horizontal = delta.x.hypot(delta.y);
    LookRotation {
        pitch: delta.z.atan2(horizontal).to_degrees(),
        yaw: delta.y.atan2(delta.x).to_degrees(),
    }
}
