use serde::{Deserialize, Serialize};

pub use crate::types::debug::DebugConfig;
use crate::types::light::{Hsv, LightMode};

/// Config for the layer and caps lock RGB indicator.
///
/// Priority of the indicator colors: `layer_color` while `layer` is active,
/// then `caps_color` while the caps backlight is on, otherwise `default_color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorConfig {
    /// The layer which overrides the indicator color
    pub layer: u8,
    pub layer_color: Hsv,
    pub caps_color: Hsv,
    pub default_color: Hsv,
    /// Lighting effect selected at boot
    pub mode: LightMode,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            layer: 1,
            layer_color: Hsv::BLUE,
            caps_color: Hsv::RED,
            default_color: Hsv::GREEN,
            mode: LightMode::StaticLight,
        }
    }
}
