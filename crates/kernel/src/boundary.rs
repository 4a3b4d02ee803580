use glam::Vec2;

/// Teleport a position across the screen edges, one axis at a time.
///
/// Only strictly negative or strictly greater-than-extent values jump: a
/// coordinate sitting exactly on 0 or on the extent stays where it is.
pub fn wrap(position: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_axis(position.x, width), wrap_axis(position.y, height))
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    let mut value = value;
    if value < 0.0 {
        value = extent;
    }
    if value > extent {
        value = 0.0;
    }
    value
}

/// True when the position lies outside `[0, width] x [0, height]`.
pub fn is_outside(position: Vec2, width: f32, height: f32) -> bool {
    position.x < 0.0 || position.x > width || position.y < 0.0 || position.y > height
}
