use glam::Vec2;
use serde::{Deserialize, Serialize};
use seekship_common::{AgentTuning, Pose2D, SimConfig, SpriteHandle};

use crate::integrator::Body;
use crate::projectile::Projectile;

/// An event record produced by the simulation step.
///
/// The log is append-only within a frame. [`crate::run_until_close`] clears
/// it after each observer call; direct steppers drain it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// A projectile left the agent during the given tick.
    ProjectileFired {
        tick: u64,
        position: Vec2,
        direction: Vec2,
    },
    /// Projectiles flagged as off-screen were purged.
    ProjectilesPruned { tick: u64, count: usize },
    /// Simulation advanced one frame by `delta` seconds.
    Stepped { tick: u64, delta: f32 },
}

/// The player craft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    pub pose: Pose2D,
    pub body: Body,
    /// Scale applied to each movement intent.
    pub max_speed: f32,
    pub rotation_speed: f32,
    /// Shots per second.
    pub fire_rate: f32,
    /// Seconds until the next shot; negative means ready.
    pub cooldown: f32,
}

impl Agent {
    pub fn new(tuning: &AgentTuning) -> Self {
        Self {
            pose: Pose2D::new(tuning.start_position, tuning.start_orientation),
            body: Body::default(),
            max_speed: tuning.max_speed,
            rotation_speed: tuning.rotation_speed,
            fire_rate: tuning.fire_rate,
            cooldown: 0.0,
        }
    }

    /// Tuning that rebuilds this agent, at rest, where it currently stands.
    pub fn tuning(&self) -> AgentTuning {
        AgentTuning {
            max_speed: self.max_speed,
            rotation_speed: self.rotation_speed,
            fire_rate: self.fire_rate,
            start_position: self.pose.position,
            start_orientation: self.pose.orientation,
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(&AgentTuning::default())
    }
}

/// The authoritative world state.
///
/// Mutated only by the simulation step; renderers and tools read it.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) agent: Agent,
    /// Unordered bag. Slot order carries no meaning.
    pub(crate) projectiles: Vec<Projectile>,
    /// Placeholder: handed to the renderer, never touched by the step.
    pub(crate) enemies: Vec<SpriteHandle>,
    pub(crate) tick: u64,
    pub(crate) event_log: Vec<WorldEvent>,
}

impl World {
    /// Create a world with the agent placed according to the config.
    pub fn new(config: &SimConfig) -> Self {
        Self::with_agent(Agent::new(&config.agent))
    }

    pub fn with_agent(agent: Agent) -> Self {
        Self {
            agent,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            tick: 0,
            event_log: Vec::new(),
        }
    }

    /// Frames simulated so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Mutable agent access for live tuning between frames.
    pub fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    pub fn enemies(&self) -> &[SpriteHandle] {
        &self.enemies
    }

    pub fn add_enemy(&mut self, handle: SpriteHandle) {
        self.enemies.push(handle);
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Deterministic hash of the simulated state, for replay comparison.
    ///
    /// Covers the tick, the agent and every projectile in slot order. The
    /// event log and enemy handles are excluded.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        let mix_vec = |h: &mut u64, v: Vec2| {
            mix(h, &v.x.to_le_bytes());
            mix(h, &v.y.to_le_bytes());
        };

        mix(&mut h, &self.tick.to_le_bytes());
        let a = &self.agent;
        mix_vec(&mut h, a.pose.position);
        mix(&mut h, &a.pose.orientation.to_le_bytes());
        mix_vec(&mut h, a.body.velocity);
        mix_vec(&mut h, a.body.acceleration);
        mix(&mut h, &a.cooldown.to_le_bytes());
        mix(&mut h, &(self.projectiles.len() as u64).to_le_bytes());
        for p in &self.projectiles {
            mix_vec(&mut h, p.position);
            mix_vec(&mut h, p.velocity);
        }
        h
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}
