use glam::Vec2;
use seekship_common::SpriteHandle;
use seekship_kernel::World;

/// Clear colour, RGB.
pub const BACKGROUND: [u8; 3] = [40, 42, 54];

/// Ship and projectile art points up; a zero heading points along +x.
const ART_OFFSET_DEGREES: f32 = 90.0;

const SPRITE_SCALE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Projectile,
    /// Placeholder enemy; carries its backend handle and is not positioned.
    Enemy(SpriteHandle),
}

/// One sprite to draw, in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Centre of the sprite.
    pub position: Vec2,
    /// Clockwise degrees, as screen space has +y down.
    pub rotation_degrees: f32,
    pub scale: f32,
}

/// Everything a backend needs to draw one frame, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub sprites: Vec<Sprite>,
}

impl DrawList {
    /// Projectiles first, then enemies, then the player on top.
    pub fn from_world(world: &World) -> Self {
        let mut sprites = Vec::with_capacity(world.projectile_count() + world.enemies().len() + 1);

        for shot in world.projectiles() {
            sprites.push(Sprite {
                kind: SpriteKind::Projectile,
                position: shot.position,
                rotation_degrees: shot.direction.y.atan2(shot.direction.x).to_degrees() + ART_OFFSET_DEGREES,
                scale: SPRITE_SCALE,
            });
        }

        for handle in world.enemies() {
            sprites.push(Sprite {
                kind: SpriteKind::Enemy(*handle),
                position: Vec2::ZERO,
                rotation_degrees: 0.0,
                scale: SPRITE_SCALE,
            });
        }

        let pose = world.agent().pose;
        sprites.push(Sprite {
            kind: SpriteKind::Player,
            position: pose.position,
            rotation_degrees: pose.orientation.to_degrees() + ART_OFFSET_DEGREES,
            scale: SPRITE_SCALE,
        });

        Self { sprites }
    }

    pub fn player(&self) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.kind == SpriteKind::Player)
    }

    pub fn projectiles(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites
            .iter()
            .filter(|s| s.kind == SpriteKind::Projectile)
    }
}
