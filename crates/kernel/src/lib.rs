//! Seekship kernel: authoritative world state and the per-frame simulation step.
//!
//! # Invariants
//! - The step is a pure function of the world, the frame input and the config.
//! - Steering always runs before translation within a frame.
//! - Cooldown decays every frame, whether or not the fire intent is held.
//! - The world exclusively owns every projectile; removal is by flag, never by handle.

pub mod boundary;
pub mod integrator;
pub mod projectile;
pub mod steering;
pub mod step;
pub mod tape;
pub mod world;

pub use integrator::Body;
pub use projectile::Projectile;
pub use steering::SeekOutcome;
pub use step::{RunSummary, StepReport, run_until_close, step, step_in_place};
pub use tape::{InputTape, TapeError};
pub use world::{Agent, World, WorldEvent};
