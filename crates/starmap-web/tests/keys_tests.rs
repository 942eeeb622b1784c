// Host-side tests for keyboard mapping.

mod keys {
    include!("../src/keys.rs");
}

use keys::{key_action, KeyAction};

#[test]
fn escape_closes_panel() {
    assert_eq!(key_action("Escape"), Some(KeyAction::ClosePanel));
}

#[test]
fn arrows_scroll_in_opposite_directions_and_pages_scroll_further() {
    let up = match key_action("ArrowUp") {
        Some(KeyAction::Scroll(v)) => v,
        other => panic!("unexpected {:?}", other),
    };
    let down = match key_action("ArrowDown") {
        Some(KeyAction::Scroll(v)) => v,
        other => panic!("unexpected {:?}", other),
    };
    let page_down = match key_action("PageDown") {
        Some(KeyAction::Scroll(v)) => v,
        other => panic!("unexpected {:?}", other),
    };
    assert!(up > 0.0 && down < 0.0);
    assert_eq!(up, -down);
    assert!(page_down < down);
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(key_action("a"), None);
    assert_eq!(key_action("Enter"), None);
}
