//! Keymap of the Massdrop ALT, 65% ANSI blocker layout.
//!
//! Layer 0 is the base layer, caps lock sits in the bottom left corner.
//! Layer 1 is the function layer, held by the key right of right alt. It holds
//! F-keys, arrows on IJKL, RGB controls and the NKRO toggle.

use crate::types::action::KeyAction;
use crate::{a, k, layout_65_ansi_blocker, mo};

pub const ROW: usize = 5;
pub const COL: usize = 15;
pub const NUM_LAYER: usize = 2;

/// Matrix position of the caps lock key
pub const CAPS_LOCK_POS: (u8, u8) = (4, 0);
/// Matrix position of the `MO(1)` key
pub const FN_POS: (u8, u8) = (4, 11);

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        layout_65_ansi_blocker!(
            k!(Escape), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace), k!(Delete),
            k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Backslash), k!(Home),
            k!(LCtrl), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), k!(Enter), k!(End),
            k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift), k!(Up), k!(RGui),
            k!(CapsLock), k!(LGui), k!(LAlt), k!(Space), k!(RAlt), mo!(1), k!(Left), k!(Down), k!(Right)
        ),
        layout_65_ansi_blocker!(
            k!(Grave), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), a!(Transparent), k!(Insert),
            a!(Transparent), k!(RgbSpi), k!(RgbSpd), k!(RgbModePlain), k!(RgbModeBreathe), k!(RgbModeRainbow), a!(Transparent), a!(Transparent), k!(Up), a!(Transparent), k!(PrintScreen), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),
            a!(Transparent), k!(BacklightStep), k!(BacklightToggleBreathing), k!(RgbModeSwirl), k!(RgbModeSnake), k!(RgbModeKnight), a!(Transparent), k!(Left), k!(Down), k!(Right), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),
            a!(Transparent), a!(Transparent), k!(RgbModeXmas), k!(RgbModeGradient), k!(RgbModeRgbtest), a!(Transparent), k!(MagicToggleNkro), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(RgbVai), a!(Transparent),
            a!(Transparent), a!(Transparent), a!(Transparent), k!(RgbTog), a!(Transparent), a!(Transparent), k!(RgbModeReverse), k!(RgbVad), k!(RgbModeForward)
        ),
    ]
}

/// The keymap, immutable after compile time
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = get_default_keymap();

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::action::Action;
    use crate::types::keycode::KeyCode;

    fn key_count(layer: usize) -> usize {
        KEYMAP[layer].iter().flatten().filter(|a| **a != KeyAction::No).count()
    }

    #[test]
    fn test_every_key_is_placed() {
        // 67 keys on the board, layer 1 has no `No` either since unused keys are transparent
        assert_eq!(key_count(0), 67);
        assert_eq!(key_count(1), 67);
    }

    #[test]
    fn test_matrix_gaps_are_aligned() {
        for (row, col) in [(2, 12), (3, 11), (4, 3), (4, 4), (4, 5), (4, 7), (4, 8), (4, 9)] {
            assert_eq!(KEYMAP[0][row][col], KeyAction::No);
            assert_eq!(KEYMAP[1][row][col], KeyAction::No);
        }
    }

    #[test]
    fn test_special_positions() {
        let (row, col) = CAPS_LOCK_POS;
        assert_eq!(KEYMAP[0][row as usize][col as usize], k!(CapsLock));
        let (row, col) = FN_POS;
        assert_eq!(KEYMAP[0][row as usize][col as usize], KeyAction::Single(Action::LayerOn(1)));
        assert_eq!(KEYMAP[1][row as usize][col as usize], a!(Transparent));
        assert_eq!(KEYMAP[0][4][6], k!(Space));
        assert_eq!(KEYMAP[1][4][6], k!(RgbTog));
        assert_eq!(KEYMAP[0][2][13], k!(Enter));
        assert_eq!(KEYMAP[0][3][12], k!(RShift));
    }

    #[test]
    fn test_function_layer_keys() {
        assert_eq!(KEYMAP[1][0][0], k!(Grave));
        assert_eq!(KEYMAP[1][0][12], k!(F12));
        assert_eq!(KEYMAP[1][0][14], k!(Insert));
        // Arrow cluster on IJKL
        assert_eq!(KEYMAP[1][1][8], k!(Up));
        assert_eq!(KEYMAP[1][2][7], k!(Left));
        assert_eq!(KEYMAP[1][2][8], k!(Down));
        assert_eq!(KEYMAP[1][2][9], k!(Right));
        assert_eq!(KEYMAP[1][3][6], KeyAction::Single(Action::Key(KeyCode::MagicToggleNkro)));
        assert_eq!(KEYMAP[1][4][14], k!(RgbModeForward));
    }
}
