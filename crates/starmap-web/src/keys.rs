// Keyboard mapping. Pure so it can be tested on the host.

use starmap_core::constants::KEY_SCROLL_IMPULSE;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    ClosePanel,
    /// Velocity added to the camera, world units per frame.
    Scroll(f32),
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::ClosePanel),
        "ArrowUp" => Some(KeyAction::Scroll(KEY_SCROLL_IMPULSE)),
        "ArrowDown" => Some(KeyAction::Scroll(-KEY_SCROLL_IMPULSE)),
        "PageUp" => Some(KeyAction::Scroll(3.0 * KEY_SCROLL_IMPULSE)),
        "PageDown" | " " => Some(KeyAction::Scroll(-3.0 * KEY_SCROLL_IMPULSE)),
        _ => None,
    }
}
