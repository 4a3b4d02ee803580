//! Shared value types and configuration for the seekship simulation.
//!
//! # Invariants
//! - Types here carry no behavior beyond keeping derived fields in sync.
//! - Every frame-coupled constant lives in [`SimConfig`], never inline.

pub mod config;
pub mod types;

pub use config::{AgentTuning, ConfigError, FrictionMode, ProjectileTuning, SimConfig};
pub use types::{
    FrameInput, MoveIntents, POINTER_UNSAMPLED, Pose2D, SCREEN_HEIGHT, SCREEN_WIDTH, SpriteHandle,
};
