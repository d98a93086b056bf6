//! User hooks invoked by [`Keyboard`](crate::keyboard::Keyboard).
//!
//! The default implementations do nothing: every key event is processed
//! normally and every layer change is accepted as is.

use crate::config::DebugConfig;
use crate::event::KeyEvent;
use crate::light::RgbLight;
use crate::types::action::KeyAction;
use crate::types::layer::LayerState;

pub trait KeymapHooks {
    /// Called once after the keyboard is initialized.
    fn on_post_init<L: RgbLight>(&mut self, _light: &mut L, _debug: &mut DebugConfig, _layer_state: LayerState) {}

    /// Called for every key press and release, before the action is processed.
    ///
    /// Return `false` to stop further processing of this event.
    fn on_key_event<L: RgbLight>(
        &mut self,
        _light: &mut L,
        _debug: &DebugConfig,
        _action: KeyAction,
        _event: KeyEvent,
        _layer_state: LayerState,
    ) -> bool {
        true
    }

    /// Called when the layer state is about to change.
    ///
    /// The returned state is the one applied.
    fn on_layer_change<L: RgbLight>(&mut self, _light: &mut L, _debug: &DebugConfig, state: LayerState) -> LayerState {
        state
    }
}

/// Hooks that do nothing
pub struct NoHooks;

impl KeymapHooks for NoHooks {}
