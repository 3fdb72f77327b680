//! Keyboard input handling
//!
//! Maps raw key names onto per-side held-key state. Each side owns an
//! independent mapping and an independent `PaddleKeys`.

use game_core::PaddleKeys;

/// Key names driving one paddle
#[derive(Debug, Clone, Copy)]
pub struct KeyMap {
    pub up: &'static [&'static str],
    pub down: &'static [&'static str],
}

/// Left player: arrows or W/S
pub const LEFT_KEYS: KeyMap = KeyMap {
    up: &["ArrowUp", "w", "W"],
    down: &["ArrowDown", "s", "S"],
};

/// Right player: I/K
pub const RIGHT_KEYS: KeyMap = KeyMap {
    up: &["i", "I"],
    down: &["k", "K"],
};

impl KeyMap {
    /// Handle key down event
    pub fn apply_key_down(&self, key: &str, keys: &mut PaddleKeys) {
        if self.up.contains(&key) {
            keys.up = true;
        }
        if self.down.contains(&key) {
            keys.down = true;
        }
    }

    /// Handle key up event
    pub fn apply_key_up(&self, key: &str, keys: &mut PaddleKeys) {
        if self.up.contains(&key) {
            keys.up = false;
        }
        if self.down.contains(&key) {
            keys.down = false;
        }
    }
}
