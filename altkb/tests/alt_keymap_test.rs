pub mod common;

use altkb::event::KeyEvent;
use altkb::indicator::IndicatorColor;
use altkb::layout::{CAPS_LOCK_POS, FN_POS};
use altkb::types::keycode::KeyCode;
use altkb::types::layer::LayerState;
use altkb::types::light::{Hsv, LightMode};

use crate::common::{KC_LSHIFT, create_alt_keyboard};

fn caps(pressed: bool) -> KeyEvent {
    KeyEvent {
        row: CAPS_LOCK_POS.0,
        col: CAPS_LOCK_POS.1,
        pressed,
    }
}

fn fn_key(pressed: bool) -> KeyEvent {
    KeyEvent {
        row: FN_POS.0,
        col: FN_POS.1,
        pressed,
    }
}

#[test]
fn test_boot_state() {
    let keyboard = create_alt_keyboard();
    assert!(keyboard.light().enabled);
    assert_eq!(keyboard.light().mode, LightMode::StaticLight);
    assert_eq!(keyboard.light().hsv, Hsv::GREEN);
    assert_eq!(keyboard.layer_state(), LayerState::default());

    let debug = keyboard.debug_config();
    assert!(debug.enable());
    assert!(debug.matrix());
    assert!(debug.keyboard());
}

#[test]
fn test_indicator_scenario() {
    let mut keyboard = create_alt_keyboard();

    // Caps lock: red, and the key still reaches the host
    let report = keyboard.process_key_event(caps(true)).unwrap();
    assert_eq!(report.keycodes[0], KeyCode::CapsLock as u8);
    assert_eq!(keyboard.light().hsv, Hsv::RED);
    assert!(keyboard.hooks().caps_backlight_on());
    let report = keyboard.process_key_event(caps(false)).unwrap();
    assert!(report.is_empty());
    assert_eq!(keyboard.light().hsv, Hsv::RED);

    // Hold Fn: blue
    assert!(keyboard.process_key_event(fn_key(true)).is_none());
    assert_eq!(keyboard.layer_state(), LayerState::new(0b10));
    assert_eq!(keyboard.light().hsv, Hsv::BLUE);

    // Caps lock falls through the transparent key on layer 1, the flag flips but blue stays
    keyboard.process_key_event(caps(true));
    keyboard.process_key_event(caps(false));
    assert!(!keyboard.hooks().caps_backlight_on());
    assert_eq!(keyboard.light().hsv, Hsv::BLUE);

    // Release Fn: green, since caps backlight is off again
    assert!(keyboard.process_key_event(fn_key(false)).is_none());
    assert_eq!(keyboard.layer_state(), LayerState::default());
    assert_eq!(keyboard.light().hsv, Hsv::GREEN);
}

#[test]
fn test_caps_restored_after_fn_release() {
    let mut keyboard = create_alt_keyboard();

    keyboard.process_key_event(caps(true));
    keyboard.process_key_event(fn_key(true));
    assert_eq!(keyboard.light().hsv, Hsv::BLUE);
    keyboard.process_key_event(caps(false));
    keyboard.process_key_event(fn_key(false));
    assert_eq!(keyboard.light().hsv, Hsv::RED);
}

#[test]
fn test_function_layer_keys() {
    let mut keyboard = create_alt_keyboard();
    keyboard.process_key_event(fn_key(true));

    // 1 -> F1
    let report = keyboard.process_key_event(KeyEvent::press(0, 1)).unwrap();
    assert_eq!(report.keycodes[0], KeyCode::F1 as u8);
    keyboard.process_key_event(KeyEvent::release(0, 1));

    // I -> Up
    let report = keyboard.process_key_event(KeyEvent::press(1, 8)).unwrap();
    assert_eq!(report.keycodes[0], KeyCode::Up as u8);

    // Fn released while I is held: I still releases Up
    keyboard.process_key_event(fn_key(false));
    let report = keyboard.process_key_event(KeyEvent::release(1, 8)).unwrap();
    assert!(report.is_empty());

    // Back on the base layer
    let report = keyboard.process_key_event(KeyEvent::press(1, 8)).unwrap();
    assert_eq!(report.keycodes[0], KeyCode::I as u8);
}

#[test]
fn test_transparent_falls_through() {
    let mut keyboard = create_alt_keyboard();
    keyboard.process_key_event(fn_key(true));

    let report = keyboard.process_key_event(KeyEvent::press(3, 0)).unwrap();
    assert_eq!(report.modifier, KC_LSHIFT);
    let report = keyboard.process_key_event(KeyEvent::press(2, 6)).unwrap();
    assert_eq!(report.modifier, KC_LSHIFT);
    assert_eq!(report.keycodes[0], KeyCode::H as u8);
}

#[test]
fn test_rgb_keys_on_function_layer() {
    let mut keyboard = create_alt_keyboard();
    keyboard.process_key_event(fn_key(true));

    // Space -> RGB toggle
    assert!(keyboard.process_key_event(KeyEvent::press(4, 6)).is_none());
    assert!(!keyboard.light().enabled);
    keyboard.process_key_event(KeyEvent::release(4, 6));
    keyboard.process_key_event(KeyEvent::press(4, 6));
    assert!(keyboard.light().enabled);

    // V -> RGB test, F -> snake, right arrow -> next mode
    keyboard.process_key_event(KeyEvent::press(3, 4));
    assert_eq!(keyboard.light().mode, LightMode::RgbTest);
    keyboard.process_key_event(KeyEvent::press(2, 4));
    assert_eq!(keyboard.light().mode, LightMode::Snake);
    keyboard.process_key_event(KeyEvent::press(4, 14));
    assert_eq!(keyboard.light().mode, LightMode::Knight);

    // Down arrow -> brightness down
    keyboard.process_key_event(KeyEvent::press(4, 13));
    assert_eq!(keyboard.light().hsv.val, 255 - altkb::light::VAL_STEP);

    // Releasing Fn restores the indicator color
    keyboard.process_key_event(fn_key(false));
    assert_eq!(keyboard.light().hsv, Hsv::GREEN);
    assert_eq!(
        IndicatorColor::Default.hsv(keyboard.hooks().config()),
        keyboard.light().hsv
    );
}

#[test]
fn test_nkro_and_backlight_keys() {
    let mut keyboard = create_alt_keyboard();
    keyboard.process_key_event(fn_key(true));

    // N -> NKRO toggle
    assert!(keyboard.process_key_event(KeyEvent::press(3, 6)).is_none());
    assert!(keyboard.nkro_enabled());
    keyboard.process_key_event(KeyEvent::release(3, 6));

    // A -> backlight step, nothing happens
    let light = *keyboard.light();
    assert!(keyboard.process_key_event(KeyEvent::press(2, 1)).is_none());
    assert_eq!(*keyboard.light(), light);
}
