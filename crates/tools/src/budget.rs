use std::collections::VecDeque;

use seekship_common::SimConfig;

/// Per-frame time budget. Reports overruns, never corrects them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBudget {
    /// Seconds.
    pub limit: f32,
}

impl Default for FrameBudget {
    fn default() -> Self {
        Self { limit: 1.0 / 60.0 }
    }
}

impl FrameBudget {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            limit: config.frame_budget,
        }
    }

    /// True when `delta` exceeds the budget. Logs a warning in that case.
    pub fn check(&self, delta: f32) -> bool {
        let exceeded = delta > self.limit;
        if exceeded {
            tracing::warn!(delta, limit = self.limit, "frame budget exceeded");
        }
        exceeded
    }
}

/// Rolling window of recent frame deltas, in seconds, for the overlay readout.
#[derive(Debug)]
pub struct FrameTimer {
    window: VecDeque<f32>,
    capacity: usize,
}

impl FrameTimer {
    /// A zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a frame delta, evicting the oldest once full. Negative or
    /// non-finite deltas count as zero.
    pub fn record(&mut self, delta: f32) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(delta);
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn mean_delta(&self) -> f32 {
        if self.window.is_empty() {
            return 0.0;
        }
        self.window.iter().sum::<f32>() / self.window.len() as f32
    }

    /// Frames per second over the window; 0 while nothing has elapsed.
    pub fn mean_fps(&self) -> f32 {
        let mean = self.mean_delta();
        if mean > 0.0 { 1.0 / mean } else { 0.0 }
    }

    pub fn slowest(&self) -> f32 {
        self.window.iter().copied().fold(0.0, f32::max)
    }

    pub fn fastest(&self) -> f32 {
        self.window
            .iter()
            .copied()
            .reduce(f32::min)
            .unwrap_or(0.0)
    }
}
