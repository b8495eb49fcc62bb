use super::*;

#[test]
fn escape_closes_dialog() {
    assert!(closes_dialog("Escape"));
}

#[test]
fn other_keys_keep_dialog_open() {
    assert!(!closes_dialog("Enter"));
    assert!(!closes_dialog("Esc"));
    assert!(!closes_dialog("escape"));
    assert!(!closes_dialog(""));
}
