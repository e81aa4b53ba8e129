//! Input event types and key binding matching.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// Any key with no binding name.
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers::from(event.modifiers),
        }
    }
}

impl InputEvent {
    /// Create a new input event.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Check if this matches a key binding string (e.g., "Ctrl+c", "Enter", "?").
    ///
    /// Shift is not compared: it is implied by the character itself, so
    /// `"?"` matches whatever the terminal reports for Shift+/.
    pub fn matches(&self, binding: &str) -> bool {
        let mut expected_ctrl = false;
        let mut expected_alt = false;
        let mut expected_key = "";

        for part in binding.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" => expected_ctrl = true,
                "alt" => expected_alt = true,
                "shift" => {}
                _ => expected_key = part,
            }
        }
        // "+" on its own splits into two empty parts.
        if binding == "+" {
            expected_key = "+";
        }

        if self.modifiers.ctrl != expected_ctrl || self.modifiers.alt != expected_alt {
            return false;
        }

        match expected_key.to_lowercase().as_str() {
            "enter" => self.key == Key::Enter,
            "esc" | "escape" => self.key == Key::Escape,
            "backspace" => self.key == Key::Backspace,
            "tab" => self.key == Key::Tab,
            "up" => self.key == Key::Up,
            "down" => self.key == Key::Down,
            "left" => self.key == Key::Left,
            "right" => self.key == Key::Right,
            "home" => self.key == Key::Home,
            "end" => self.key == Key::End,
            "pageup" => self.key == Key::PageUp,
            "pagedown" => self.key == Key::PageDown,
            s if s.starts_with('f') && s.len() > 1 && s.len() <= 3 => {
                s[1..].parse::<u8>().is_ok_and(|n| self.key == Key::F(n))
            }
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        self.key == Key::Char(c) || self.key == Key::Char(c.to_ascii_uppercase())
                    }
                    _ => false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::from(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_matches_named_keys() {
        assert!(key(KeyCode::Enter).matches("Enter"));
        assert!(key(KeyCode::Esc).matches("esc"));
        assert!(key(KeyCode::F(5)).matches("F5"));
        assert!(!key(KeyCode::Enter).matches("Esc"));
    }

    #[test]
    fn test_matches_chars_case_insensitively() {
        assert!(key(KeyCode::Char('q')).matches("q"));
        assert!(key(KeyCode::Char('Q')).matches("q"));
        assert!(!key(KeyCode::Char('w')).matches("q"));
    }

    #[test]
    fn test_shifted_symbol_matches() {
        let question = InputEvent::from(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(question.matches("?"));
    }

    #[test]
    fn test_modifiers_must_agree() {
        let ctrl_c = InputEvent::from(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(ctrl_c.matches("Ctrl+c"));
        assert!(!ctrl_c.matches("c"));
        assert!(!key(KeyCode::Char('c')).matches("Ctrl+c"));
    }

    #[test]
    fn test_unknown_keys_match_nothing() {
        assert!(!key(KeyCode::Insert).matches(""));
        assert!(!key(KeyCode::Char('a')).matches("nonsense"));
    }
}
