use glam::Vec2;
use seekship_common::{SCREEN_HEIGHT, SCREEN_WIDTH};
use seekship_kernel::World;

use crate::draw::{BACKGROUND, DrawList, SpriteKind};

/// Window configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    pub size: Vec2,
    pub background: [u8; 3],
    pub title: &'static str,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            size: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            background: BACKGROUND,
            title: "seekship",
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads world state and a view configuration, then produces
/// output. It never mutates the world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given world state and view.
    fn render(&self, world: &World, view: &RenderView) -> Self::Output;
}

/// Text renderer for headless runs.
///
/// Produces a human-readable listing of the draw list.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// List at most this many projectiles; the count is always shown.
    pub max_projectiles: Option<usize>,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projectile_limit(limit: usize) -> Self {
        Self {
            max_projectiles: Some(limit),
        }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &World, view: &RenderView) -> String {
        let list = DrawList::from_world(world);
        let mut out = String::new();
        out.push_str(&format!(
            "=== {} (tick={}) {}x{} bg=({}, {}, {}) ===\n",
            view.title,
            world.tick(),
            view.size.x,
            view.size.y,
            view.background[0],
            view.background[1],
            view.background[2]
        ));

        if let Some(player) = list.player() {
            out.push_str(&format!(
                "Player: pos=({:.2}, {:.2}) rot={:.1}deg\n",
                player.position.x, player.position.y, player.rotation_degrees
            ));
        }

        out.push_str(&format!("Projectiles: {}\n", world.projectile_count()));
        let limit = self.max_projectiles.unwrap_or(usize::MAX);
        for sprite in list.projectiles().take(limit) {
            out.push_str(&format!(
                "  pos=({:.2}, {:.2}) rot={:.1}deg\n",
                sprite.position.x, sprite.position.y, sprite.rotation_degrees
            ));
        }

        let enemies = list
            .sprites
            .iter()
            .filter(|s| matches!(s.kind, SpriteKind::Enemy(_)))
            .count();
        if enemies > 0 {
            out.push_str(&format!("Enemies: {enemies}\n"));
        }

        out
    }
}
