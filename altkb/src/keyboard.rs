use crate::channel::{KEY_EVENT_CHANNEL, KEYBOARD_REPORT_CHANNEL};
use crate::config::DebugConfig;
use crate::descriptor::KeyboardReport;
use crate::event::KeyEvent;
use crate::hooks::KeymapHooks;
use crate::keymap::KeyMap;
use crate::light::{RgbLight, process_rgb_keycode};
use crate::types::action::{Action, KeyAction};
use crate::types::keycode::KeyCode;
use crate::types::layer::LayerState;

/// Key processor.
///
/// Resolves key events to actions through the keymap, runs the user hooks,
/// and turns the result into HID reports, layer changes or lighting changes.
pub struct Keyboard<'a, H: KeymapHooks, L: RgbLight, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Keymap
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,

    /// User hooks
    hooks: H,

    /// RGB light driven by the hooks and the lighting keycodes
    light: L,

    /// Debug flags, set by the hooks at post init
    debug: DebugConfig,

    /// Modifier bits of the held modifier keys
    held_modifiers: u8,

    /// Held keycodes, 6KRO
    held_keycodes: [KeyCode; 6],

    /// Matrix position of each held keycode
    registered_keys: [Option<(u8, u8)>; 6],

    /// NKRO flag, toggled by the magic keycodes
    nkro: bool,
}

impl<'a, H: KeymapHooks, L: RgbLight, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
    Keyboard<'a, H, L, ROW, COL, NUM_LAYER>
{
    pub fn new(keymap: KeyMap<'a, ROW, COL, NUM_LAYER>, hooks: H, light: L) -> Self {
        Keyboard {
            keymap,
            hooks,
            light,
            debug: DebugConfig::new(),
            held_modifiers: 0,
            held_keycodes: [KeyCode::No; 6],
            registered_keys: [None; 6],
            nkro: false,
        }
    }

    /// Run the post init hook, call it once before processing any key event.
    pub fn init(&mut self) {
        let layer_state = self.keymap.layer_state();
        self.hooks.on_post_init(&mut self.light, &mut self.debug, layer_state);
        info!("Keyboard initialized, debug config: {:?}", self.debug);
    }

    /// Main loop: receive key events, process them and send out the reports.
    pub async fn run(&mut self) -> ! {
        loop {
            let key_event = KEY_EVENT_CHANNEL.receive().await;
            if let Some(report) = self.process_key_event(key_event) {
                KEYBOARD_REPORT_CHANNEL.send(report).await;
            }
        }
    }

    /// Process a single key event.
    ///
    /// Returns the keyboard report to send, if the event changed the held keys.
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Option<KeyboardReport> {
        if self.debug.enable() && self.debug.matrix() {
            debug!("Key event: {:?}", key_event);
        }

        let action = self.keymap.get_action_with_layer_cache(key_event);
        let layer_state = self.keymap.layer_state();
        if !self
            .hooks
            .on_key_event(&mut self.light, &self.debug, action, key_event, layer_state)
        {
            return None;
        }

        let report = match action {
            KeyAction::No | KeyAction::Transparent => None,
            KeyAction::Single(action) => self.process_key_action(action, key_event),
        };

        if let Some(report) = &report {
            if self.debug.enable() && self.debug.keyboard() {
                debug!("Keyboard report: {:?}", report);
            }
        }
        report
    }

    fn process_key_action(&mut self, action: Action, key_event: KeyEvent) -> Option<KeyboardReport> {
        match action {
            Action::Key(key) => return self.process_action_key(key, key_event),
            Action::LayerOn(layer_num) => {
                // Momentary layer: on while held
                let state = if key_event.pressed {
                    self.keymap.activate_layer(layer_num)
                } else {
                    self.keymap.deactivate_layer(layer_num)
                };
                self.update_layer_state(state);
            }
            Action::LayerOff(layer_num) => {
                if key_event.pressed {
                    let state = self.keymap.deactivate_layer(layer_num);
                    self.update_layer_state(state);
                }
            }
            Action::LayerToggle(layer_num) => {
                if !key_event.pressed {
                    let state = self.keymap.toggle_layer(layer_num);
                    self.update_layer_state(state);
                }
            }
            Action::DefaultLayer(layer_num) => {
                if key_event.pressed {
                    self.keymap.set_default_layer(layer_num);
                }
            }
        }
        None
    }

    /// Every layer state change goes through the layer change hook, the returned state is applied.
    fn update_layer_state(&mut self, state: LayerState) {
        if state == self.keymap.layer_state() {
            return;
        }
        let accepted = self.hooks.on_layer_change(&mut self.light, &self.debug, state);
        self.keymap.set_layer_state(accepted);
    }

    fn process_action_key(&mut self, key: KeyCode, key_event: KeyEvent) -> Option<KeyboardReport> {
        if key == KeyCode::No {
            None
        } else if key.is_basic() {
            if key_event.pressed {
                self.register_key(key, key_event);
            } else {
                self.unregister_key(key, key_event);
            }
            Some(self.keyboard_report())
        } else if key.is_rgb() {
            if key_event.pressed {
                process_rgb_keycode(&mut self.light, key);
            }
            None
        } else if key.is_magic() {
            if key_event.pressed {
                self.process_action_magic(key);
            }
            None
        } else if key.is_backlight() {
            if key_event.pressed {
                warn!("No backlight on this keyboard, {:?} is ignored", key);
            }
            None
        } else {
            warn!("Unsupported key: {:?}", key);
            None
        }
    }

    fn process_action_magic(&mut self, key: KeyCode) {
        match key {
            KeyCode::MagicNkroOn => self.nkro = true,
            KeyCode::MagicNkroOff => self.nkro = false,
            KeyCode::MagicToggleNkro => self.nkro = !self.nkro,
            _ => {
                warn!("Unsupported magic key: {:?}", key);
                return;
            }
        }
        info!("NKRO: {}", self.nkro);
    }

    /// Register a key, the key can be a basic keycode or a modifier.
    fn register_key(&mut self, key: KeyCode, key_event: KeyEvent) {
        if key.is_modifier() {
            self.held_modifiers |= key.as_modifier_bit();
        } else {
            self.register_keycode(key, key_event);
        }
    }

    /// Unregister a key, the key can be a basic keycode or a modifier.
    fn unregister_key(&mut self, key: KeyCode, key_event: KeyEvent) {
        if key.is_modifier() {
            self.held_modifiers &= !key.as_modifier_bit();
        } else {
            self.unregister_keycode(key, key_event);
        }
    }

    fn find_slot(&self, key_event: KeyEvent) -> Option<usize> {
        self.registered_keys
            .iter()
            .position(|k| *k == Some((key_event.row, key_event.col)))
    }

    fn register_keycode(&mut self, key: KeyCode, key_event: KeyEvent) {
        let slot = self
            .find_slot(key_event)
            .or_else(|| self.held_keycodes.iter().position(|&k| k == KeyCode::No));

        match slot {
            Some(index) => {
                self.held_keycodes[index] = key;
                self.registered_keys[index] = Some((key_event.row, key_event.col));
            }
            None => warn!("All 6 key slots are taken, {:?} is dropped", key),
        }
    }

    fn unregister_keycode(&mut self, key: KeyCode, key_event: KeyEvent) {
        // A key dropped at press time has no slot, other keys with the same keycode stay held
        match self.find_slot(key_event) {
            Some(index) => {
                self.held_keycodes[index] = KeyCode::No;
                self.registered_keys[index] = None;
            }
            None => debug!("{:?} at ({}, {}) was never registered", key, key_event.row, key_event.col),
        }
    }

    fn keyboard_report(&self) -> KeyboardReport {
        KeyboardReport {
            modifier: self.held_modifiers,
            reserved: 0,
            leds: 0,
            keycodes: self.held_keycodes.map(|k| k as u8),
        }
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER> {
        &self.keymap
    }

    pub fn layer_state(&self) -> LayerState {
        self.keymap.layer_state()
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn light(&self) -> &L {
        &self.light
    }

    pub fn debug_config(&self) -> DebugConfig {
        self.debug
    }

    /// Debug flags can be changed at runtime, the hooks see the change on the next event
    pub fn debug_config_mut(&mut self) -> &mut DebugConfig {
        &mut self.debug
    }

    pub fn nkro_enabled(&self) -> bool {
        self.nkro
    }
}
