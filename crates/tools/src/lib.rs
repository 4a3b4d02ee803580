//! Developer Tooling: debug overlay telemetry, frame budget checks, live tweaks.
//!
//! # Invariants
//! - Tools read the world; only the tweak panel writes, and only agent tuning.
//! - Budget overruns are diagnostics; deltas are never altered.

mod budget;
mod inspector;
mod tweak;

pub use budget::{FrameBudget, FrameTimer};
pub use inspector::{FrameTelemetry, WorldInspector};
pub use tweak::{Tweak, TweakPanel};
