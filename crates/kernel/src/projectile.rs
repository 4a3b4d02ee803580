use glam::Vec2;
use seekship_common::{Pose2D, ProjectileTuning};

use crate::boundary;
use crate::world::Agent;

/// A transient shot. Moves in a straight line until it leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading captured at spawn. Projectiles never turn.
    pub direction: Vec2,
    pub max_speed: f32,
    pub damage: f32,
    /// Set by [`Projectile::cull`]; purged by [`prune`].
    pub to_remove: bool,
}

impl Projectile {
    /// Launch from the pose along its forward vector.
    pub fn spawn(pose: &Pose2D, max_speed: f32, damage: f32) -> Self {
        Self {
            position: pose.position,
            velocity: pose.forward * max_speed,
            direction: pose.forward,
            max_speed,
            damage,
            to_remove: false,
        }
    }

    pub fn advance(&mut self, delta: f32) {
        self.position += self.velocity * delta;
    }

    /// Flag the projectile if it is outside the screen rectangle.
    /// Returns the flag.
    pub fn cull(&mut self, width: f32, height: f32) -> bool {
        if boundary::is_outside(self.position, width, height) {
            self.to_remove = true;
        }
        self.to_remove
    }
}

/// The fire gate: strictly negative cooldown means ready.
pub fn cooldown_ready(cooldown: f32) -> bool {
    cooldown < 0.0
}

/// Spawn a projectile if the agent's cooldown allows it, resetting the cooldown.
///
/// A zero fire rate yields an infinite cooldown after the shot.
pub fn try_fire(agent: &mut Agent, tuning: &ProjectileTuning) -> Option<Projectile> {
    if !cooldown_ready(agent.cooldown) {
        return None;
    }
    let projectile = Projectile::spawn(&agent.pose, tuning.max_speed, tuning.damage);
    agent.cooldown = 1.0 / agent.fire_rate;
    Some(projectile)
}

/// Drop every flagged projectile. Returns how many were removed.
pub fn prune(projectiles: &mut Vec<Projectile>) -> usize {
    let before = projectiles.len();
    projectiles.retain(|p| !p.to_remove);
    before - projectiles.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 1920.0;
    const H: f32 = 1080.0;

    fn tuning() -> ProjectileTuning {
        ProjectileTuning::default()
    }

    #[test]
    fn spawn_uses_forward_vector() {
        let pose = Pose2D::new(Vec2::new(100.0, 200.0), std::f32::consts::FRAC_PI_2);
        let p = Projectile::spawn(&pose, 2000.0, 100.0);

        assert_eq!(p.position, Vec2::new(100.0, 200.0));
        assert_eq!(p.velocity, pose.forward * 2000.0);
        assert_eq!(p.direction, pose.forward);
        assert_eq!(p.damage, 100.0);
        assert!(!p.to_remove);
    }

    #[test]
    fn advance_is_linear() {
        let pose = Pose2D::new(Vec2::new(500.0, 500.0), 0.0);
        let mut p = Projectile::spawn(&pose, 400.0, 1.0);
        p.advance(0.25);
        assert_eq!(p.position, Vec2::new(600.0, 500.0));
        p.advance(0.25);
        assert_eq!(p.position, Vec2::new(700.0, 500.0));
        assert_eq!(p.direction, Vec2::X);
    }

    #[test]
    fn cull_flags_only_outside_positions() {
        let mut inside = Projectile::spawn(&Pose2D::new(Vec2::new(W, H), 0.0), 0.0, 0.0);
        assert!(!inside.cull(W, H));

        let mut outside = Projectile::spawn(&Pose2D::new(Vec2::new(W + 0.5, 10.0), 0.0), 0.0, 0.0);
        assert!(outside.cull(W, H));
        assert!(outside.to_remove);
    }

    #[test]
    fn prune_removes_flagged_entries() {
        let pose = Pose2D::default();
        let mut bag = vec![Projectile::spawn(&pose, 1.0, 1.0); 4];
        bag[1].to_remove = true;
        bag[3].to_remove = true;

        assert_eq!(prune(&mut bag), 2);
        assert_eq!(bag.len(), 2);
        assert!(bag.iter().all(|p| !p.to_remove));
    }

    #[test]
    fn gate_requires_strictly_negative_cooldown() {
        assert!(!cooldown_ready(0.0));
        assert!(!cooldown_ready(0.01));
        assert!(cooldown_ready(-f32::EPSILON));
        assert!(cooldown_ready(-10.0));
    }

    #[test]
    fn fire_resets_cooldown() {
        let mut agent = Agent::default();
        agent.cooldown = -0.2;
        let shot = try_fire(&mut agent, &tuning());
        assert!(shot.is_some());
        assert!((agent.cooldown - 0.01).abs() < 1e-7);
    }

    #[test]
    fn second_shot_without_elapsed_time_is_rejected() {
        let mut agent = Agent::default();
        agent.cooldown = -1.0;
        assert!(try_fire(&mut agent, &tuning()).is_some());
        assert!(try_fire(&mut agent, &tuning()).is_none());
        assert!(agent.cooldown >= 0.0);
    }

    #[test]
    fn fresh_agent_cannot_fire_at_zero_cooldown() {
        let mut agent = Agent::default();
        assert_eq!(agent.cooldown, 0.0);
        assert!(try_fire(&mut agent, &tuning()).is_none());
    }

    #[test]
    fn zero_fire_rate_locks_after_one_shot() {
        let mut agent = Agent::default();
        agent.fire_rate = 0.0;
        agent.cooldown = -1.0;
        assert!(try_fire(&mut agent, &tuning()).is_some());
        assert_eq!(agent.cooldown, f32::INFINITY);
    }
}
