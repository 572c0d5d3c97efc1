use super::*;

#[test]
fn ui_state_default_light_and_menu_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.menu_open);
}

#[test]
fn toggle_menu_flips_and_close_menu_resets() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
}
