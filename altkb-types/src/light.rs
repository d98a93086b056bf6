use serde::{Deserialize, Serialize};

/// A color in the rgblight HSV space, hue `0..=255` covers the full circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    pub const RED: Self = Self::new(0, 255, 255);
    pub const GREEN: Self = Self::new(85, 255, 255);
    pub const BLUE: Self = Self::new(170, 255, 255);

    pub const fn new(hue: u8, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }
}

/// Lighting effect of the whole RGB strip.
///
/// The order is the order in which the mode step keycodes cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightMode {
    #[default]
    StaticLight,
    Breathing,
    RainbowMood,
    RainbowSwirl,
    Snake,
    Knight,
    Christmas,
    StaticGradient,
    RgbTest,
}

impl LightMode {
    const ALL: [LightMode; 9] = [
        LightMode::StaticLight,
        LightMode::Breathing,
        LightMode::RainbowMood,
        LightMode::RainbowSwirl,
        LightMode::Snake,
        LightMode::Knight,
        LightMode::Christmas,
        LightMode::StaticGradient,
        LightMode::RgbTest,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// Next mode, wraps to the first one
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous mode, wraps to the last one
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
