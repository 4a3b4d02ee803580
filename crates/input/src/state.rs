use std::collections::HashSet;

use glam::Vec2;
use seekship_common::{FrameInput, MoveIntents, POINTER_UNSAMPLED};

use crate::action::{Action, Bindings, Button};

/// Held buttons, the last pointer sample and the latched window close.
#[derive(Debug, Clone)]
pub struct InputState {
    bindings: Bindings,
    held: HashSet<Button>,
    pointer: Vec2,
    window_closed: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(Bindings::default())
    }
}

impl InputState {
    pub fn new(bindings: Bindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
            pointer: POINTER_UNSAMPLED,
            window_closed: false,
        }
    }

    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    pub fn press(&mut self, button: Button) {
        if self.held.insert(button) && self.bindings.action_for(button) == Some(Action::Close) {
            tracing::info!(?button, "closing intent");
        }
    }

    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
    }

    /// Record the pointer position in screen space.
    pub fn move_pointer(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// The window was asked to close. Sticks for the rest of the session.
    pub fn window_closed(&mut self) {
        if !self.window_closed {
            tracing::info!("closing intent");
        }
        self.window_closed = true;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// True while any held button maps to `action`.
    pub fn is_active(&self, action: Action) -> bool {
        self.held
            .iter()
            .any(|b| self.bindings.action_for(*b) == Some(action))
    }

    /// Fold the current device state into the input for one frame.
    pub fn frame(&self, delta: f32) -> FrameInput {
        FrameInput {
            delta,
            pointer: self.pointer,
            intents: MoveIntents {
                forward: self.is_active(Action::MoveForward),
                backward: self.is_active(Action::MoveBackward),
                strafe_left: self.is_active(Action::StrafeLeft),
                strafe_right: self.is_active(Action::StrafeRight),
            },
            fire: self.is_active(Action::Fire),
            close: self.window_closed || self.is_active(Action::Close),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Key, MouseButton};

    #[test]
    fn fresh_state_is_idle_with_unsampled_pointer() {
        let input = InputState::default().frame(0.01);
        assert_eq!(input, FrameInput::idle(0.01));
    }

    #[test]
    fn held_keys_become_intents() {
        let mut state = InputState::default();
        state.press(Button::Key(Key::W));
        state.press(Button::Key(Key::D));
        state.press(Button::Mouse(MouseButton::Left));
        state.move_pointer(Vec2::new(300.0, 200.0));

        let input = state.frame(0.02);
        assert!(input.intents.forward);
        assert!(input.intents.strafe_right);
        assert!(!input.intents.backward);
        assert!(input.fire);
        assert_eq!(input.pointer, Vec2::new(300.0, 200.0));
        assert!(!input.close);
    }

    #[test]
    fn release_clears_intent() {
        let mut state = InputState::default();
        state.press(Button::Key(Key::S));
        state.release(Button::Key(Key::S));
        assert!(!state.frame(0.01).intents.backward);
    }

    #[test]
    fn escape_closes_only_while_held() {
        let mut state = InputState::default();
        state.press(Button::Key(Key::Escape));
        assert!(state.frame(0.01).close);
        state.release(Button::Key(Key::Escape));
        assert!(!state.frame(0.01).close);
    }

    #[test]
    fn window_close_is_latched() {
        let mut state = InputState::default();
        state.window_closed();
        assert!(state.frame(0.01).close);
        assert!(state.frame(0.01).close);
    }

    #[test]
    fn unbound_buttons_are_ignored() {
        let mut state = InputState::default();
        state.press(Button::Key(Key::Space));
        let input = state.frame(0.01);
        assert!(!input.intents.any());
        assert!(!input.fire);
    }

    #[test]
    fn rebound_key_drives_new_action() {
        let mut state = InputState::default();
        state.bindings_mut().bind_named("up", Action::MoveForward).unwrap();
        state.press(Button::Key(Key::Up));
        assert!(state.frame(0.01).intents.forward);
    }
}
