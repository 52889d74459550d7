//! Tests for key combo parsing and conversion.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use armature::keys::{Key, KeyCombo, KeyParseError, Modifiers, convert_key_event};

#[test]
fn test_parse_single_char() {
    let combo = KeyCombo::parse("a").unwrap();
    assert_eq!(combo.key, Key::Char('a'));
    assert_eq!(combo.modifiers, Modifiers::NONE);
}

#[test]
fn test_parse_named_keys() {
    assert_eq!(KeyCombo::parse("enter").unwrap().key, Key::Enter);
    assert_eq!(KeyCombo::parse("escape").unwrap().key, Key::Escape);
    assert_eq!(KeyCombo::parse("down").unwrap().key, Key::Down);
    assert_eq!(KeyCombo::parse("space").unwrap().key, Key::Space);
}

#[test]
fn test_parse_aliases() {
    assert_eq!(KeyCombo::parse("return").unwrap().key, Key::Enter);
    assert_eq!(KeyCombo::parse("esc").unwrap().key, Key::Escape);
    assert_eq!(KeyCombo::parse("pgup").unwrap().key, Key::PageUp);
    assert_eq!(KeyCombo::parse("del").unwrap().key, Key::Delete);
}

#[test]
fn test_parse_modifiers() {
    let combo = KeyCombo::parse("ctrl+shift+down").unwrap();
    assert_eq!(combo.key, Key::Down);
    assert!(combo.modifiers.ctrl);
    assert!(combo.modifiers.shift);
    assert!(!combo.modifiers.alt);

    let combo = KeyCombo::parse("control+a").unwrap();
    assert!(combo.modifiers.ctrl);
}

#[test]
fn test_parse_function_keys() {
    assert_eq!(KeyCombo::parse("f1").unwrap().key, Key::F(1));
    assert_eq!(KeyCombo::parse("f12").unwrap().key, Key::F(12));
    assert!(matches!(
        KeyCombo::parse("f13"),
        Err(KeyParseError::UnknownKey(_))
    ));
}

#[test]
fn test_parse_case_insensitive() {
    assert_eq!(KeyCombo::parse("Enter").unwrap().key, Key::Enter);
    let combo = KeyCombo::parse("CTRL+k").unwrap();
    assert!(combo.modifiers.ctrl);
    assert_eq!(combo.key, Key::Char('k'));
}

#[test]
fn test_parse_errors() {
    assert_eq!(KeyCombo::parse(""), Err(KeyParseError::Empty));
    assert_eq!(
        KeyCombo::parse("meta+a"),
        Err(KeyParseError::UnknownModifier("meta".to_string()))
    );
    assert!(matches!(
        KeyCombo::parse("bogus"),
        Err(KeyParseError::UnknownKey(_))
    ));
}

#[test]
fn test_parse_via_from_str() {
    let combo: KeyCombo = "ctrl+down".parse().unwrap();
    assert_eq!(combo, KeyCombo::key(Key::Down).ctrl());
}

#[test]
fn test_builder_methods() {
    let combo = KeyCombo::key(Key::Char('k')).ctrl().shift();
    assert!(combo.modifiers.ctrl);
    assert!(combo.modifiers.shift);
    assert!(!combo.modifiers.alt);
}

#[test]
fn test_convert_key_event() {
    let event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    let combo = convert_key_event(event).unwrap();
    assert_eq!(combo.key, Key::Char('a'));
    assert!(combo.modifiers.ctrl);
}

#[test]
fn test_convert_space_normalizes() {
    let event = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
    let combo = convert_key_event(event).unwrap();
    assert_eq!(combo.key, Key::Space);
}

#[test]
fn test_convert_ignores_release() {
    let event = KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(convert_key_event(event).is_none());
}
