//! Key and modifier types used by the input behaviors.
//!
//! Key routing works on [`KeyCombo`] values. Embedders either construct
//! combos directly or convert them from crossterm events with
//! [`convert_key_event`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither ctrl, shift nor alt is held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Character key
    Char(char),
    /// Function keys F1-F12
    F(u8),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Space
    Space,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Insert
    Insert,
    /// Delete
    Delete,
}

impl Key {
    /// Create a character key
    pub const fn char(c: char) -> Self {
        Self::Char(c)
    }
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Parse a key string like `"enter"`, `"ctrl+k"` or `"ctrl+shift+down"`.
    ///
    /// Modifiers come first, separated by `+`, the key name last. Key names
    /// accept the usual aliases (`esc`, `return`, `pgup`, `del`, ...).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let combo = KeyCombo::parse("ctrl+down")?;
    /// assert_eq!(combo.key, Key::Down);
    /// assert!(combo.modifiers.ctrl);
    /// ```
    pub fn parse(s: &str) -> Result<Self, KeyParseError> {
        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let Some((key_part, modifier_parts)) = parts.split_last() else {
            return Err(KeyParseError::Empty);
        };
        if key_part.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let mut modifiers = Modifiers::NONE;
        for part in modifier_parts {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                other => return Err(KeyParseError::UnknownModifier(other.to_string())),
            }
        }

        Ok(Self::new(parse_key_name(key_part)?, modifiers))
    }
}

impl std::str::FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors from [`KeyCombo::parse`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("Empty key string")]
    Empty,
    #[error("Unknown key name: {0}")]
    UnknownKey(String),
    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
}

fn parse_key_name(name: &str) -> Result<Key, KeyParseError> {
    let key = match name.to_lowercase().as_str() {
        "enter" | "return" => Key::Enter,
        "escape" | "esc" => Key::Escape,
        "backspace" => Key::Backspace,
        "tab" => Key::Tab,
        "space" => Key::Space,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" | "pgup" => Key::PageUp,
        "pagedown" | "pgdn" => Key::PageDown,
        "insert" | "ins" => Key::Insert,
        "delete" | "del" => Key::Delete,
        lower => {
            if let Some(n) = lower.strip_prefix('f')
                && let Ok(n) = n.parse::<u8>()
                && (1..=12).contains(&n)
            {
                Key::F(n)
            } else {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return Err(KeyParseError::UnknownKey(name.to_string())),
                }
            }
        }
    };
    Ok(key)
}

/// Convert a crossterm KeyCode to a key
fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::F(n) => Some(Key::F(n)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::Delete => Some(Key::Delete),
        _ => None,
    }
}

/// Convert crossterm KeyModifiers to modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

/// Convert a crossterm KeyEvent to a KeyCombo.
///
/// Only key press events convert; release and repeat events return `None`.
pub fn convert_key_event(event: KeyEvent) -> Option<KeyCombo> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = convert_key(event.code)?;
    let modifiers = convert_modifiers(event.modifiers);

    // Handle space specially (KeyCode::Char(' ') should become Key::Space)
    let key = if let Key::Char(' ') = key {
        Key::Space
    } else {
        key
    };

    Some(KeyCombo::new(key, modifiers))
}
