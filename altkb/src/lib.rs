#![doc = include_str!("../../README.md")]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub use altkb_types as types;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

pub mod channel;
pub mod config;
pub mod descriptor;
pub mod event;
pub mod hooks;
pub mod indicator;
pub mod keyboard;
pub mod keymap;
pub mod layout;
mod layout_macro;
pub mod light;

pub use keyboard::Keyboard;
pub use keymap::KeyMap;

pub type RawMutex = CriticalSectionRawMutex;

/// Capacity of the key event channel
pub const EVENT_CHANNEL_SIZE: usize = 16;
/// Capacity of the keyboard report channel
pub const REPORT_CHANNEL_SIZE: usize = 16;
