use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Errors from loading or validating a [`SimConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// How the friction coefficient is applied to velocity each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FrictionMode {
    /// Multiply once per frame regardless of delta. Damping depends on framerate.
    #[default]
    PerFrame,
    /// Multiply by `coefficient.powf(delta * reference_fps)`.
    PerSecond { reference_fps: f32 },
}

/// Initial tuning for the player craft. Live edits happen on the agent itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentTuning {
    /// Thrust scale for movement intents.
    pub max_speed: f32,
    /// Fraction of the heading error closed per second.
    pub rotation_speed: f32,
    /// Shots per second.
    pub fire_rate: f32,
    pub start_position: Vec2,
    pub start_orientation: f32,
}

impl Default for AgentTuning {
    fn default() -> Self {
        Self {
            max_speed: 2000.0,
            rotation_speed: 5.0,
            fire_rate: 100.0,
            start_position: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            start_orientation: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub max_speed: f32,
    pub damage: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            max_speed: 2000.0,
            damage: 100.0,
        }
    }
}

/// Named constants consumed by the simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: f32,
    pub height: f32,
    pub friction: f32,
    pub friction_mode: FrictionMode,
    /// Below this distance to the target the agent rotates but does not translate.
    pub arrival_radius: f32,
    /// Frame deltas above this many seconds are reported as budget overruns.
    pub frame_budget: f32,
    pub agent: AgentTuning,
    pub projectile: ProjectileTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            friction: 0.98,
            friction_mode: FrictionMode::PerFrame,
            arrival_radius: 3.0,
            frame_budget: 1.0 / 60.0,
            agent: AgentTuning::default(),
            projectile: ProjectileTuning::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0) {
            return Err(invalid("width", format!("must be positive, got {}", self.width)));
        }
        if !(self.height > 0.0) {
            return Err(invalid("height", format!("must be positive, got {}", self.height)));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(invalid(
                "friction",
                format!("must be in (0, 1], got {}", self.friction),
            ));
        }
        if let FrictionMode::PerSecond { reference_fps } = self.friction_mode {
            if !(reference_fps > 0.0) {
                return Err(invalid(
                    "friction_mode.reference_fps",
                    format!("must be positive, got {reference_fps}"),
                ));
            }
        }
        if !(self.arrival_radius >= 0.0) {
            return Err(invalid(
                "arrival_radius",
                format!("must not be negative, got {}", self.arrival_radius),
            ));
        }
        if !(self.projectile.max_speed >= 0.0) {
            return Err(invalid(
                "projectile.max_speed",
                format!("must not be negative, got {}", self.projectile.max_speed),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
