use std::collections::HashMap;
use std::str::FromStr;

/// A high-level action produced from device input.
///
/// The simulation only ever sees actions folded into a frame input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    Fire,
    Close,
}

/// Keyboard keys the bindings understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Anything that can be held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Key(Key),
    Mouse(MouseButton),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("unknown button name: {0:?}")]
    UnknownButton(String),
}

impl FromStr for Button {
    type Err = BindingError;

    /// Parse names such as `"W"`, `"escape"` or `"mouse_left"`. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let button = match s.to_ascii_lowercase().as_str() {
            "w" => Self::Key(Key::W),
            "a" => Self::Key(Key::A),
            "s" => Self::Key(Key::S),
            "d" => Self::Key(Key::D),
            "up" => Self::Key(Key::Up),
            "down" => Self::Key(Key::Down),
            "left" => Self::Key(Key::Left),
            "right" => Self::Key(Key::Right),
            "space" => Self::Key(Key::Space),
            "escape" | "esc" => Self::Key(Key::Escape),
            "mouse_left" => Self::Mouse(MouseButton::Left),
            "mouse_right" => Self::Mouse(MouseButton::Right),
            "mouse_middle" => Self::Mouse(MouseButton::Middle),
            _ => return Err(BindingError::UnknownButton(s.to_string())),
        };
        Ok(button)
    }
}

/// Button to action table. A button maps to at most one action; an action
/// may have several buttons.
#[derive(Debug, Clone)]
pub struct Bindings {
    map: HashMap<Button, Action>,
}

impl Default for Bindings {
    /// WASD to move, left mouse to fire, Escape to close.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(Button::Key(Key::W), Action::MoveForward);
        bindings.bind(Button::Key(Key::S), Action::MoveBackward);
        bindings.bind(Button::Key(Key::A), Action::StrafeLeft);
        bindings.bind(Button::Key(Key::D), Action::StrafeRight);
        bindings.bind(Button::Mouse(MouseButton::Left), Action::Fire);
        bindings.bind(Button::Key(Key::Escape), Action::Close);
        bindings
    }
}

impl Bindings {
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a button, replacing whatever it was bound to before.
    pub fn bind(&mut self, button: Button, action: Action) {
        self.map.insert(button, action);
    }

    /// Bind by button name, e.g. `bind_named("up", Action::MoveForward)`.
    pub fn bind_named(&mut self, name: &str, action: Action) -> Result<(), BindingError> {
        let button = name.parse()?;
        self.bind(button, action);
        Ok(())
    }

    pub fn unbind(&mut self, button: Button) -> Option<Action> {
        self.map.remove(&button)
    }

    pub fn action_for(&self, button: Button) -> Option<Action> {
        self.map.get(&button).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_match_wasd_layout() {
        let b = Bindings::default();
        assert_eq!(b.action_for(Button::Key(Key::W)), Some(Action::MoveForward));
        assert_eq!(b.action_for(Button::Key(Key::S)), Some(Action::MoveBackward));
        assert_eq!(b.action_for(Button::Key(Key::A)), Some(Action::StrafeLeft));
        assert_eq!(b.action_for(Button::Key(Key::D)), Some(Action::StrafeRight));
        assert_eq!(
            b.action_for(Button::Mouse(MouseButton::Left)),
            Some(Action::Fire)
        );
        assert_eq!(b.action_for(Button::Key(Key::Escape)), Some(Action::Close));
        assert_eq!(b.action_for(Button::Key(Key::Space)), None);
    }

    #[test]
    fn parse_button_names() {
        assert_eq!("W".parse::<Button>(), Ok(Button::Key(Key::W)));
        assert_eq!("Esc".parse::<Button>(), Ok(Button::Key(Key::Escape)));
        assert_eq!(
            "mouse_right".parse::<Button>(),
            Ok(Button::Mouse(MouseButton::Right))
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "F13".parse::<Button>().unwrap_err();
        assert_eq!(err, BindingError::UnknownButton("F13".into()));
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut b = Bindings::default();
        b.bind_named("space", Action::Fire).unwrap();
        b.bind_named("w", Action::MoveBackward).unwrap();
        assert_eq!(b.action_for(Button::Key(Key::Space)), Some(Action::Fire));
        assert_eq!(b.action_for(Button::Key(Key::W)), Some(Action::MoveBackward));

        assert_eq!(b.unbind(Button::Key(Key::W)), Some(Action::MoveBackward));
        assert_eq!(b.action_for(Button::Key(Key::W)), None);
    }
}
