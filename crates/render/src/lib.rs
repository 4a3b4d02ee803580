//! Rendering Adapter: renderer-agnostic presentation of the world.
//!
//! # Invariants
//! - Renderer cannot mutate world truth directly.
//! - Render state derives from world state and view.
//!
//! Sprite textures and window drawing belong to a backend; this crate only
//! decides what goes where. [`DebugTextRenderer`] stands in for a backend in
//! headless runs and tests.

mod draw;
mod renderer;

pub use draw::{BACKGROUND, DrawList, Sprite, SpriteKind};
pub use renderer::{DebugTextRenderer, RenderView, Renderer};
