//! RGB lighting abstraction.
//!
//! [`RgbLight`] is the interface the keymap needs from an RGB strip driver,
//! [`RgbLightState`] is an in-memory implementation which tracks the same state
//! an rgblight driver keeps.

use crate::types::keycode::KeyCode;
use crate::types::light::{Hsv, LightMode};

/// Hue step of the hue up/down keycodes
pub const HUE_STEP: u8 = 8;
/// Saturation step of the saturation up/down keycodes
pub const SAT_STEP: u8 = 17;
/// Value step of the brightness up/down keycodes
pub const VAL_STEP: u8 = 17;
/// Max animation speed
pub const MAX_SPEED: u8 = 3;

/// Interface to an RGB lighting driver.
///
/// All operations are infallible from the keymap's point of view.
pub trait RgbLight {
    /// Turn lighting on
    fn enable(&mut self);

    /// Turn lighting on or off
    fn toggle(&mut self);

    /// Select a lighting effect
    fn set_mode(&mut self, mode: LightMode);

    /// Step to the next or previous lighting effect
    fn step_mode(&mut self, forward: bool);

    /// Set the color without persisting it
    fn set_hsv_noeeprom(&mut self, hsv: Hsv);

    /// Step hue up or down, hue wraps around
    fn step_hue(&mut self, increase: bool);

    /// Step saturation up or down
    fn step_sat(&mut self, increase: bool);

    /// Step value(brightness) up or down
    fn step_val(&mut self, increase: bool);

    /// Step animation speed up or down
    fn step_speed(&mut self, increase: bool);
}

/// Apply a lighting keycode to the light.
///
/// Returns `false` if the keycode isn't an RGB keycode.
pub fn process_rgb_keycode<L: RgbLight>(light: &mut L, key: KeyCode) -> bool {
    match key {
        KeyCode::RgbTog => light.toggle(),
        KeyCode::RgbModeForward => light.step_mode(true),
        KeyCode::RgbModeReverse => light.step_mode(false),
        KeyCode::RgbHui => light.step_hue(true),
        KeyCode::RgbHud => light.step_hue(false),
        KeyCode::RgbSai => light.step_sat(true),
        KeyCode::RgbSad => light.step_sat(false),
        KeyCode::RgbVai => light.step_val(true),
        KeyCode::RgbVad => light.step_val(false),
        KeyCode::RgbSpi => light.step_speed(true),
        KeyCode::RgbSpd => light.step_speed(false),
        KeyCode::RgbModePlain => light.set_mode(LightMode::StaticLight),
        KeyCode::RgbModeBreathe => light.set_mode(LightMode::Breathing),
        KeyCode::RgbModeRainbow => light.set_mode(LightMode::RainbowMood),
        KeyCode::RgbModeSwirl => light.set_mode(LightMode::RainbowSwirl),
        KeyCode::RgbModeSnake => light.set_mode(LightMode::Snake),
        KeyCode::RgbModeKnight => light.set_mode(LightMode::Knight),
        KeyCode::RgbModeXmas => light.set_mode(LightMode::Christmas),
        KeyCode::RgbModeGradient => light.set_mode(LightMode::StaticGradient),
        KeyCode::RgbModeRgbtest => light.set_mode(LightMode::RgbTest),
        _ => return false,
    }
    true
}

/// In-memory RGB light state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbLightState {
    pub enabled: bool,
    pub mode: LightMode,
    pub hsv: Hsv,
    pub speed: u8,
}

impl Default for RgbLightState {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: LightMode::StaticLight,
            hsv: Hsv::new(0, 255, 255),
            speed: 0,
        }
    }
}

impl RgbLight for RgbLightState {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    fn set_mode(&mut self, mode: LightMode) {
        self.mode = mode;
    }

    fn step_mode(&mut self, forward: bool) {
        self.mode = if forward { self.mode.next() } else { self.mode.prev() };
    }

    fn set_hsv_noeeprom(&mut self, hsv: Hsv) {
        self.hsv = hsv;
    }

    fn step_hue(&mut self, increase: bool) {
        self.hsv.hue = if increase {
            self.hsv.hue.wrapping_add(HUE_STEP)
        } else {
            self.hsv.hue.wrapping_sub(HUE_STEP)
        };
    }

    fn step_sat(&mut self, increase: bool) {
        self.hsv.sat = if increase {
            self.hsv.sat.saturating_add(SAT_STEP)
        } else {
            self.hsv.sat.saturating_sub(SAT_STEP)
        };
    }

    fn step_val(&mut self, increase: bool) {
        self.hsv.val = if increase {
            self.hsv.val.saturating_add(VAL_STEP)
        } else {
            self.hsv.val.saturating_sub(VAL_STEP)
        };
    }

    fn step_speed(&mut self, increase: bool) {
        self.speed = if increase {
            (self.speed + 1).min(MAX_SPEED)
        } else {
            self.speed.saturating_sub(1)
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rgb_keycodes() {
        let mut light = RgbLightState::default();
        assert!(process_rgb_keycode(&mut light, KeyCode::RgbTog));
        assert!(light.enabled);

        assert!(process_rgb_keycode(&mut light, KeyCode::RgbModeSnake));
        assert_eq!(light.mode, LightMode::Snake);
        process_rgb_keycode(&mut light, KeyCode::RgbModeForward);
        assert_eq!(light.mode, LightMode::Knight);
        process_rgb_keycode(&mut light, KeyCode::RgbModeReverse);
        process_rgb_keycode(&mut light, KeyCode::RgbModeReverse);
        assert_eq!(light.mode, LightMode::RainbowSwirl);

        assert!(!process_rgb_keycode(&mut light, KeyCode::CapsLock));
        assert!(!process_rgb_keycode(&mut light, KeyCode::BacklightStep));
    }

    #[test]
    fn test_value_and_speed_saturate() {
        let mut light = RgbLightState::default();
        process_rgb_keycode(&mut light, KeyCode::RgbVai);
        assert_eq!(light.hsv.val, 255);
        process_rgb_keycode(&mut light, KeyCode::RgbVad);
        assert_eq!(light.hsv.val, 255 - VAL_STEP);
        for _ in 0..20 {
            process_rgb_keycode(&mut light, KeyCode::RgbVad);
        }
        assert_eq!(light.hsv.val, 0);

        for _ in 0..5 {
            process_rgb_keycode(&mut light, KeyCode::RgbSpi);
        }
        assert_eq!(light.speed, MAX_SPEED);
        process_rgb_keycode(&mut light, KeyCode::RgbSpd);
        assert_eq!(light.speed, MAX_SPEED - 1);
    }

    #[test]
    fn test_hue_wraps() {
        let mut light = RgbLightState::default();
        process_rgb_keycode(&mut light, KeyCode::RgbHud);
        assert_eq!(light.hsv.hue, 248);
    }
}
