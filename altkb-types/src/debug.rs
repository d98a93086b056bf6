use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// Debug output flags.
///
/// `enable` gates all debug prints, `matrix` and `keyboard` additionally print
/// every key event and every keyboard report.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    #[bits(1)]
    pub enable: bool,
    #[bits(1)]
    pub matrix: bool,
    #[bits(1)]
    pub keyboard: bool,
    #[bits(1)]
    pub mouse: bool,
    #[bits(4)]
    _reserved: u8,
}

