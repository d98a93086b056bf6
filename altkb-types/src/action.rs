use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
}

impl KeyAction {
    /// Keycode triggered by this action, if it's a plain key
    pub fn keycode(&self) -> Option<KeyCode> {
        match self {
            KeyAction::Single(Action::Key(k)) => Some(*k),
            _ => None,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum, including lighting keycodes.
    Key(KeyCode),
    /// Activate a layer while the key is held
    LayerOn(u8),
    /// Deactivate a layer when the key is pressed
    LayerOff(u8),
    /// Toggle a layer when the key is released
    LayerToggle(u8),
    /// Set default layer
    DefaultLayer(u8),
}
