use super::*;

// =============================================================
// NavState
// =============================================================

#[test]
fn nav_state_default_closed() {
    assert!(!NavState::default().open);
}

#[test]
fn toggle_opens_then_closes() {
    let mut nav = NavState::default();
    nav.toggle();
    assert!(nav.open);
    nav.toggle();
    assert!(!nav.open);
}

#[test]
fn close_is_idempotent() {
    let mut nav = NavState { open: true };
    nav.close();
    nav.close();
    assert!(!nav.open);
}

#[test]
fn outside_click_closes_open_menu() {
    let mut nav = NavState { open: true };
    assert!(nav.on_document_click(false));
    assert!(!nav.open);
}

#[test]
fn inside_click_keeps_menu_open() {
    let mut nav = NavState { open: true };
    assert!(!nav.on_document_click(true));
    assert!(nav.open);
}

#[test]
fn outside_click_on_closed_menu_is_noop() {
    let mut nav = NavState::default();
    assert!(!nav.on_document_click(false));
    assert!(!nav.open);
}
