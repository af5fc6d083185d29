// Key to action mapping. Pure; the host-side tests include this file directly.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleOverlay,
    ToggleMarkers,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "h" | "H" => Some(KeyAction::ToggleOverlay),
        "m" | "M" => Some(KeyAction::ToggleMarkers),
        _ => None,
    }
}
