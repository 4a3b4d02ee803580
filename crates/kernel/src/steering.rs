use std::f32::consts::{PI, TAU};

use glam::Vec2;
use seekship_common::Pose2D;

use crate::integrator::{self, Body};

/// Beyond this magnitude the stepwise reduction is replaced by a remainder.
const LOOP_REDUCTION_LIMIT: f32 = 1024.0 * TAU;

/// Whether the seek translated the body this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOutcome {
    /// Target closer than the arrival radius: rotated only.
    Arrived,
    /// Rotated, then integrated velocity and position.
    Moved,
}

/// Bring an angle difference into `[-PI, PI]` by whole turns.
///
/// Exactly `PI` is left alone. Non-finite input is returned unchanged.
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return angle;
    }
    let mut angle = if angle.abs() > LOOP_REDUCTION_LIMIT {
        angle % TAU
    } else {
        angle
    };
    while angle > PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

/// Turn the pose toward `target`, then move along the current velocity.
///
/// The heading closes `rotation_speed * delta` of the remaining error per
/// frame. There is no turn-rate clamp: when that product exceeds 1 the
/// heading overshoots the target angle and oscillates.
///
/// When the target is within `arrival_radius` the rotation still happens but
/// translation is skipped and acceleration is left in place.
pub fn seek(
    pose: &mut Pose2D,
    body: &mut Body,
    target: Vec2,
    rotation_speed: f32,
    delta: f32,
    arrival_radius: f32,
) -> SeekOutcome {
    let direction = target - pose.position;
    let target_angle = direction.y.atan2(direction.x);
    let difference = normalize_angle(target_angle - pose.orientation);

    pose.set_orientation(pose.orientation + difference * rotation_speed * delta);

    if direction.length() < arrival_radius {
        return SeekOutcome::Arrived;
    }

    integrator::integrate(&mut pose.position, body, delta);
    SeekOutcome::Moved
}
