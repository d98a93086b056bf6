use crate::event::KeyEvent;
use crate::types::action::KeyAction;
use crate::types::layer::LayerState;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// Hardware key strokes use tuple `(row, col, layer)` to retrieve the action from Keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: LayerState,
    /// Default layer number, max: 32
    default_layer: u8,
    /// Layer cache
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        KeyMap {
            layers,
            layer_state: LayerState::default(),
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
        }
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number
    pub fn set_default_layer(&mut self, layer_num: u8) {
        if !Self::is_valid_layer(layer_num) {
            return;
        }
        self.default_layer = layer_num;
    }

    /// Current layer state
    pub fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    /// Replace the layer state, bits beyond `NUM_LAYER` are dropped
    pub fn set_layer_state(&mut self, state: LayerState) {
        let mask = 1u32.checked_shl(NUM_LAYER as u32).map_or(u32::MAX, |bit| bit - 1);
        self.layer_state = LayerState::new(state.bits() & mask);
    }

    /// Fetch the action in keymap, without layer cache
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        if row >= ROW || col >= COL || layer_num >= NUM_LAYER {
            warn!("Position ({}, {}) on layer {} is out of the keymap", row, col, layer_num);
            return KeyAction::No;
        }
        self.layers[layer_num][row][col]
    }

    /// Fetch the action in keymap, with layer cache
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key event {:?} is out of the {}x{} matrix", key_event, ROW, COL);
            return KeyAction::No;
        }

        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.layer_state.is_on(layer_idx as u8) || layer_idx as u8 == self.default_layer {
                // This layer is activated
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }

                // Found a valid action in the layer, cache it
                self.save_layer_cache(row, col, layer_idx as u8);

                return action;
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        KeyAction::No
    }

    /// The highest activated layer, falls back to the default layer
    pub fn get_activated_layer(&self) -> u8 {
        // Layer state never holds bits beyond `NUM_LAYER`
        match self.layer_state.highest() {
            Some(layer_num) if layer_num > self.default_layer => layer_num,
            _ => self.default_layer,
        }
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    fn is_valid_layer(layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }

    /// Layer state after activating the given layer
    ///
    /// The state is not applied, the caller decides via [`KeyMap::set_layer_state`].
    pub fn activate_layer(&self, layer_num: u8) -> LayerState {
        if !Self::is_valid_layer(layer_num) {
            return self.layer_state;
        }
        self.layer_state.with(layer_num)
    }

    /// Layer state after deactivating the given layer
    pub fn deactivate_layer(&self, layer_num: u8) -> LayerState {
        if !Self::is_valid_layer(layer_num) {
            return self.layer_state;
        }
        self.layer_state.without(layer_num)
    }

    /// Layer state after toggling the given layer
    pub fn toggle_layer(&self, layer_num: u8) -> LayerState {
        if !Self::is_valid_layer(layer_num) {
            return self.layer_state;
        }
        self.layer_state.toggled(layer_num)
    }
}
