use altkb::channel::{KEY_EVENT_CHANNEL, KEYBOARD_REPORT_CHANNEL};
use altkb::descriptor::KeyboardReport;
use altkb::event::KeyEvent;
use altkb::hooks::KeymapHooks;
use altkb::indicator::RgbIndicator;
use altkb::keyboard::Keyboard;
use altkb::keymap::KeyMap;
use altkb::layout::{COL, KEYMAP, NUM_LAYER, ROW};
use altkb::light::{RgbLight, RgbLightState};
use embassy_futures::select::{Either, select};
use embassy_futures::{block_on, yield_now};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const KC_LSHIFT: u8 = 1 << 1;

pub type AltKeyboard = Keyboard<'static, RgbIndicator, RgbLightState, ROW, COL, NUM_LAYER>;

/// The ALT keymap with the RGB indicator, post init already done
pub fn create_alt_keyboard() -> AltKeyboard {
    let mut keyboard = Keyboard::new(KeyMap::new(&KEYMAP), RgbIndicator::default(), RgbLightState::default());
    keyboard.init();
    keyboard
}

/// Feed `events` through the key event channel into `keyboard.run()`, collect the sent reports.
///
/// The channels are global, run it in a forked test.
pub fn run_key_sequence<H: KeymapHooks, L: RgbLight, const R: usize, const C: usize, const N: usize>(
    keyboard: &mut Keyboard<'static, H, L, R, C, N>,
    events: &[KeyEvent],
) -> Vec<KeyboardReport> {
    block_on(async {
        let feed = async {
            let mut reports = Vec::new();
            for event in events {
                KEY_EVENT_CHANNEL.send(*event).await;
                // Let the keyboard process the event
                yield_now().await;
                while let Ok(report) = KEYBOARD_REPORT_CHANNEL.try_receive() {
                    reports.push(report);
                }
            }
            reports
        };

        match select(keyboard.run(), feed).await {
            Either::First(_) => unreachable!("keyboard loop never returns"),
            Either::Second(reports) => reports,
        }
    })
}
