//! Recorded frame inputs for deterministic replay.

use std::path::Path;

use serde::{Deserialize, Serialize};
use seekship_common::{AgentTuning, FrameInput, SimConfig};

use crate::step::run_until_close;
use crate::world::{Agent, World};

const TAPE_VERSION: u32 = 2;

/// Errors from loading or saving an [`InputTape`].
#[derive(Debug, thiserror::Error)]
pub enum TapeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tape version mismatch: file has v{file_version}, expected v{expected_version}")]
    VersionMismatch {
        file_version: u32,
        expected_version: u32,
    },
}

/// An ordered sequence of frame inputs plus the agent they drove.
///
/// The agent tuning is stored because it can be edited live before a run
/// starts, so the config alone does not reproduce the recorded world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputTape {
    version: u32,
    #[serde(default)]
    agent: AgentTuning,
    frames: Vec<FrameInput>,
    /// `state_hash` of the recorded run's final world, when known.
    #[serde(default)]
    final_hash: Option<u64>,
}

impl Default for InputTape {
    fn default() -> Self {
        Self::new()
    }
}

impl InputTape {
    /// An empty tape for an agent with default tuning.
    pub fn new() -> Self {
        Self::for_agent(AgentTuning::default())
    }

    pub fn for_agent(agent: AgentTuning) -> Self {
        Self {
            version: TAPE_VERSION,
            agent,
            frames: Vec::new(),
            final_hash: None,
        }
    }

    pub fn from_frames(agent: AgentTuning, frames: Vec<FrameInput>) -> Self {
        Self {
            frames,
            ..Self::for_agent(agent)
        }
    }

    pub fn agent(&self) -> &AgentTuning {
        &self.agent
    }

    /// Remember the hash the recorded run ended on.
    pub fn set_final_hash(&mut self, hash: u64) {
        self.final_hash = Some(hash);
    }

    pub fn final_hash(&self) -> Option<u64> {
        self.final_hash
    }

    /// Append a frame.
    pub fn record(&mut self, input: FrameInput) {
        self.frames.push(input);
    }

    pub fn frames(&self) -> &[FrameInput] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Write the tape as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TapeError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TapeError> {
        let file = std::fs::File::open(path)?;
        let tape: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        if tape.version != TAPE_VERSION {
            return Err(TapeError::VersionMismatch {
                file_version: tape.version,
                expected_version: TAPE_VERSION,
            });
        }
        Ok(tape)
    }

    /// Run the tape from a fresh world holding the recorded agent.
    ///
    /// `config` supplies everything else. Stops early at a recorded close
    /// intent, like a live run would.
    pub fn replay(&self, config: &SimConfig) -> World {
        let (world, summary) = run_until_close(
            World::with_agent(Agent::new(&self.agent)),
            config,
            self.frames.iter().copied(),
            |_, _, _| {},
        );
        tracing::debug!(
            frames = summary.frames,
            closed = summary.closed,
            hash = world.state_hash(),
            "tape replayed"
        );
        world
    }
}
