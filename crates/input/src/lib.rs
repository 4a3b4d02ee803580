//! Input mapping: raw device state in, one [`FrameInput`](seekship_common::FrameInput) per frame out.
//!
//! # Invariants
//! - The simulation consumes actions, never raw device events.
//! - A window close is latched until the input state is dropped.

pub mod action;
pub mod state;

pub use action::{Action, BindingError, Bindings, Button, Key, MouseButton};
pub use state::InputState;
