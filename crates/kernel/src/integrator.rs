use glam::Vec2;
use seekship_common::{FrictionMode, MoveIntents};

/// Linear motion state of a body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Body {
    pub velocity: Vec2,
    /// Accumulated for the current frame; zeroed after each integration.
    pub acceleration: Vec2,
}

/// Semi-implicit Euler: velocity first, then position, then clear acceleration.
pub fn integrate(position: &mut Vec2, body: &mut Body, delta: f32) {
    body.velocity += body.acceleration * delta;
    *position += body.velocity * delta;
    body.acceleration = Vec2::ZERO;
}

/// Damp velocity by the friction coefficient.
///
/// In [`FrictionMode::PerFrame`] the coefficient is applied once regardless of
/// `delta`, so damping strength follows the framerate.
pub fn apply_friction(velocity: Vec2, coefficient: f32, mode: FrictionMode, delta: f32) -> Vec2 {
    match mode {
        FrictionMode::PerFrame => velocity * coefficient,
        FrictionMode::PerSecond { reference_fps } => {
            velocity * coefficient.powf(delta * reference_fps)
        }
    }
}

/// Thrust produced by the held movement intents.
///
/// Each intent contributes `max_speed` along the forward vector rotated by
/// 0, 180 or +/-90 degrees. Contributions are summed without normalizing, so
/// diagonal input is faster than a single key.
pub fn thrust(forward: Vec2, intents: MoveIntents, max_speed: f32) -> Vec2 {
    let mut total = Vec2::ZERO;
    if intents.forward {
        total += forward * max_speed;
    }
    if intents.backward {
        total -= forward * max_speed;
    }
    if intents.strafe_left {
        total += (-forward.perp()).normalize_or_zero() * max_speed;
    }
    if intents.strafe_right {
        total += forward.perp().normalize_or_zero() * max_speed;
    }
    total
}
