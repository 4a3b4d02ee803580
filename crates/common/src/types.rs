use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Width of the wrap/cull rectangle in screen units.
pub const SCREEN_WIDTH: f32 = 1920.0;
/// Height of the wrap/cull rectangle in screen units.
pub const SCREEN_HEIGHT: f32 = 1080.0;

/// Pointer value reported before the input layer has sampled the cursor.
pub const POINTER_UNSAMPLED: Vec2 = Vec2::new(-1.0, -1.0);

/// Position and facing of a steerable body.
///
/// `forward` is derived from `orientation` and must be refreshed through
/// [`Pose2D::set_orientation`] whenever the angle changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    pub position: Vec2,
    /// Radians. Not normalized.
    pub orientation: f32,
    pub forward: Vec2,
}

impl Pose2D {
    pub fn new(position: Vec2, orientation: f32) -> Self {
        let mut pose = Self {
            position,
            orientation,
            forward: Vec2::ZERO,
        };
        pose.set_orientation(orientation);
        pose
    }

    /// Set the orientation and recompute the forward vector.
    pub fn set_orientation(&mut self, orientation: f32) {
        self.orientation = orientation;
        self.forward = Vec2::new(orientation.cos(), orientation.sin());
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }
}

/// Movement keys held during a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntents {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
}

impl MoveIntents {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.strafe_left || self.strafe_right
    }
}

/// Everything the simulation needs from the outside world for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Elapsed seconds since the previous frame. Never clamped.
    pub delta: f32,
    /// Pointer position in screen space, or [`POINTER_UNSAMPLED`].
    pub pointer: Vec2,
    #[serde(default)]
    pub intents: MoveIntents,
    #[serde(default)]
    pub fire: bool,
    #[serde(default)]
    pub close: bool,
}

impl FrameInput {
    /// A frame with no intents and an unsampled pointer.
    pub fn idle(delta: f32) -> Self {
        Self {
            delta,
            pointer: POINTER_UNSAMPLED,
            intents: MoveIntents::default(),
            fire: false,
            close: false,
        }
    }

    pub fn pointer_sampled(&self) -> bool {
        self.pointer != POINTER_UNSAMPLED
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self::idle(0.0)
    }
}

/// Opaque handle to a sprite owned by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteHandle(pub u64);
