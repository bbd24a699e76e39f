/// Keyboard vocabulary understood by the gallery
use iced::keyboard::{self, key::Named, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Escape,
    ArrowLeft,
    ArrowRight,
    Tab,
}

/// A key press with the modifier state that matters to us
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }

    /// Enter and Space activate the focused element
    pub fn is_activation(&self) -> bool {
        matches!(self.key, Key::Enter | Key::Space)
    }

    /// Translate an iced key press. Keys we don't handle yield `None`.
    pub fn from_iced(key: &keyboard::Key, modifiers: Modifiers) -> Option<Self> {
        let key = match key {
            keyboard::Key::Named(Named::Enter) => Key::Enter,
            keyboard::Key::Named(Named::Space) => Key::Space,
            keyboard::Key::Named(Named::Escape) => Key::Escape,
            keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
            keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
            keyboard::Key::Named(Named::Tab) => Key::Tab,
            keyboard::Key::Character(c) if c.as_str() == " " => Key::Space,
            _ => return None,
        };

        Some(Self {
            key,
            shift: modifiers.shift(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_named_keys() {
        let input = KeyInput::from_iced(&keyboard::Key::Named(Named::Tab), Modifiers::SHIFT);
        assert_eq!(input, Some(KeyInput::shifted(Key::Tab)));

        let input = KeyInput::from_iced(&keyboard::Key::Named(Named::Escape), Modifiers::empty());
        assert_eq!(input, Some(KeyInput::new(Key::Escape)));
    }

    #[test]
    fn test_ignores_unrelated_keys() {
        let input = KeyInput::from_iced(&keyboard::Key::Named(Named::ArrowUp), Modifiers::empty());
        assert_eq!(input, None);

        let input = KeyInput::from_iced(&keyboard::Key::Character("a".into()), Modifiers::empty());
        assert_eq!(input, None);
    }

    #[test]
    fn test_activation_keys() {
        assert!(KeyInput::new(Key::Enter).is_activation());
        assert!(KeyInput::new(Key::Space).is_activation());
        assert!(!KeyInput::new(Key::Escape).is_activation());
    }
}
