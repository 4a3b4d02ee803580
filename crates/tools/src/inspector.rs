use glam::Vec2;
use seekship_common::FrameInput;
use seekship_kernel::World;

/// World inspector for the debug overlay.
///
/// Read-only queries against the world state.
pub struct WorldInspector;

impl WorldInspector {
    /// Overlay numbers for the frame that just ran.
    pub fn telemetry(world: &World, input: &FrameInput) -> FrameTelemetry {
        FrameTelemetry {
            tick: world.tick(),
            fps: if input.delta > 0.0 {
                1.0 / input.delta
            } else {
                0.0
            },
            delta_ms: input.delta * 1000.0,
            pointer: input.pointer,
            cooldown: world.agent().cooldown,
            projectile_count: world.projectile_count(),
        }
    }
}

/// Scalar telemetry shown by the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTelemetry {
    pub tick: u64,
    pub fps: f32,
    pub delta_ms: f32,
    pub pointer: Vec2,
    pub cooldown: f32,
    pub projectile_count: usize,
}

impl std::fmt::Display for FrameTelemetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tick={} FPS: {:.1} Delta: {:.1}ms Mouse: ({}, {}) Cooldown: {:.3} Bullets: {}",
            self.tick,
            self.fps,
            self.delta_ms,
            self.pointer.x as i32,
            self.pointer.y as i32,
            self.cooldown,
            self.projectile_count
        )
    }
}
