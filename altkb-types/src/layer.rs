use core::fmt;

use serde::{Deserialize, Serialize};

/// Bitmask of active layers, bit `n` is set when layer `n` is active.
///
/// Supports at most 32 layers.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    /// Max number of layers a `LayerState` can track
    pub const MAX_LAYERS: u8 = 32;

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if layer `layer` is active
    pub const fn is_on(self, layer: u8) -> bool {
        layer < Self::MAX_LAYERS && self.0 & (1 << layer) != 0
    }

    /// Same state with layer `layer` activated
    pub const fn with(self, layer: u8) -> Self {
        if layer < Self::MAX_LAYERS { Self(self.0 | (1 << layer)) } else { self }
    }

    /// Same state with layer `layer` deactivated
    pub const fn without(self, layer: u8) -> Self {
        if layer < Self::MAX_LAYERS { Self(self.0 & !(1 << layer)) } else { self }
    }

    /// Same state with layer `layer` flipped
    pub const fn toggled(self, layer: u8) -> Self {
        if layer < Self::MAX_LAYERS { Self(self.0 ^ (1 << layer)) } else { self }
    }

    /// Highest active layer, `None` if no layer is active
    pub const fn highest(self) -> Option<u8> {
        if self.0 == 0 { None } else { Some(31 - self.0.leading_zeros() as u8) }
    }
}

impl fmt::Debug for LayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerState({:#b})", self.0)
    }
}
