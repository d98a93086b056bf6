//! Layer and caps lock RGB indicator.
//!
//! The whole strip shows one color:
//!
//! 1. `layer_color` (blue) while the indicator layer is active,
//! 2. otherwise `caps_color` (red) while the caps backlight is on,
//! 3. otherwise `default_color` (green).
//!
//! The caps backlight is toggled by every caps lock press, it's independent of
//! the host's caps lock state.

use crate::config::{DebugConfig, IndicatorConfig};
use crate::event::KeyEvent;
use crate::hooks::KeymapHooks;
use crate::light::RgbLight;
use crate::types::action::KeyAction;
use crate::types::keycode::KeyCode;
use crate::types::layer::LayerState;
use crate::types::light::Hsv;

/// Which of the indicator colors is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    Layer,
    CapsLock,
    Default,
}

impl IndicatorColor {
    pub fn hsv(self, config: &IndicatorConfig) -> Hsv {
        match self {
            IndicatorColor::Layer => config.layer_color,
            IndicatorColor::CapsLock => config.caps_color,
            IndicatorColor::Default => config.default_color,
        }
    }
}

/// Select the indicator color, first match wins.
pub fn select_indicator(layer_state: LayerState, caps_backlight_on: bool, indicator_layer: u8) -> IndicatorColor {
    if layer_state.is_on(indicator_layer) {
        IndicatorColor::Layer
    } else if caps_backlight_on {
        IndicatorColor::CapsLock
    } else {
        IndicatorColor::Default
    }
}

/// Keymap hooks which drive the RGB indicator
pub struct RgbIndicator {
    config: IndicatorConfig,
    /// Flipped on every caps lock press
    caps_backlight_on: bool,
}

impl Default for RgbIndicator {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

impl RgbIndicator {
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            config,
            caps_backlight_on: false,
        }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn caps_backlight_on(&self) -> bool {
        self.caps_backlight_on
    }

    /// Select the color for `layer_state` and apply it to the light, without persisting it.
    ///
    /// The choice is printed while `debug.enable` is set.
    pub fn update_rgb_state<L: RgbLight>(
        &self,
        light: &mut L,
        debug: &DebugConfig,
        layer_state: LayerState,
    ) -> IndicatorColor {
        let color = select_indicator(layer_state, self.caps_backlight_on, self.config.layer);
        if debug.enable() {
            match color {
                IndicatorColor::Layer => debug!("update_rgb_state: layer {} active, setting blue", self.config.layer),
                IndicatorColor::CapsLock => debug!("update_rgb_state: caps backlight on, setting red"),
                IndicatorColor::Default => debug!("update_rgb_state: default, setting green"),
            }
        }
        light.set_hsv_noeeprom(color.hsv(&self.config));
        color
    }
}

impl KeymapHooks for RgbIndicator {
    fn on_post_init<L: RgbLight>(&mut self, light: &mut L, debug: &mut DebugConfig, layer_state: LayerState) {
        light.enable();
        light.set_mode(self.config.mode);
        light.set_hsv_noeeprom(self.config.default_color);

        debug.set_enable(true);
        debug.set_matrix(true);
        debug.set_keyboard(true);

        // The layer state may be non-zero already
        self.update_rgb_state(light, debug, layer_state);
    }

    fn on_key_event<L: RgbLight>(
        &mut self,
        light: &mut L,
        debug: &DebugConfig,
        action: KeyAction,
        event: KeyEvent,
        layer_state: LayerState,
    ) -> bool {
        if action.keycode() == Some(KeyCode::CapsLock) && event.pressed {
            self.caps_backlight_on = !self.caps_backlight_on;
            if debug.enable() {
                debug!("on_key_event: CapsLock toggled, caps backlight: {}", self.caps_backlight_on);
            }
            self.update_rgb_state(light, debug, layer_state);
        }
        true
    }

    fn on_layer_change<L: RgbLight>(&mut self, light: &mut L, debug: &DebugConfig, state: LayerState) -> LayerState {
        if debug.enable() {
            debug!("on_layer_change: new layer state: {:?}", state);
        }
        self.update_rgb_state(light, debug, state);
        state
    }
}
