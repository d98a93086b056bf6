//! # altkb types
//!
//! Plain data shared by the altkb keymap and runtime.
//!
//! ## Modules
//!
//! - [`action`] - Key actions stored in the keymap (keys, layer switches)
//! - [`keycode`] - Keycode definitions: HID keyboard page, magic, backlight and RGB keycodes
//! - [`layer`] - Active layer bitmask
//! - [`light`] - HSV colors and RGB lighting modes
//! - [`debug`] - Debug output flags

#![no_std]

pub mod action;
pub mod debug;
pub mod keycode;
pub mod layer;
pub mod light;
