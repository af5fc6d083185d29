// Host-side tests for the pure key mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keys {
    include!("../src/events/keys.rs");
}

use keys::*;

#[test]
fn overlay_toggle_is_case_insensitive() {
    assert_eq!(key_action("h"), Some(KeyAction::ToggleOverlay));
    assert_eq!(key_action("H"), Some(KeyAction::ToggleOverlay));
}

#[test]
fn marker_toggle_is_case_insensitive() {
    assert_eq!(key_action("m"), Some(KeyAction::ToggleMarkers));
    assert_eq!(key_action("M"), Some(KeyAction::ToggleMarkers));
}

#[test]
fn other_keys_do_nothing() {
    for key in ["", " ", "Escape", "Enter", "hm", "1", "ArrowUp", "Shift"] {
        assert_eq!(key_action(key), None, "key {:?}", key);
    }
}

#[test]
fn every_action_has_a_key() {
    let keys: Vec<_> = ('a'..='z').map(|c| c.to_string()).collect();
    let actions: Vec<_> = keys.iter().filter_map(|k| key_action(k)).collect();
    assert!(actions.contains(&KeyAction::ToggleOverlay));
    assert!(actions.contains(&KeyAction::ToggleMarkers));
    assert_eq!(actions.len(), 2);
}
