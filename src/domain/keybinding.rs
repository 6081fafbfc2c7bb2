use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// User actions that can be bound to keys.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,

    // Note operations
    AddNote,
    DeleteNote,
    SaveNote,
    ToggleTagSearch,

    // Navigation / Focus
    FocusNext,
    FocusPrevious,
    FocusList,
    NavigateUp,
    NavigateDown,
    SelectFirst,
    SelectLast,

    // Dialogs
    Confirm,
    Cancel,
}

/// A key bound to an action, with the label shown in the footer.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
}

impl Keybind {
    /// Creates a binding.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
        }
    }
}

/// Parses a binding such as `Ctrl+s`, `Alt+Enter` or `F2`.
///
/// Modifier names are case-insensitive; a single character key keeps its
/// case. Returns `None` for unknown key names.
#[must_use]
pub fn parse_key(binding: &str) -> Option<KeyEvent> {
    let binding = binding.trim();
    if binding.is_empty() {
        return None;
    }

    let mut parts: Vec<&str> = binding.split('+').collect();
    // "Ctrl++" binds the plus key itself.
    if binding.ends_with("++") {
        parts.truncate(parts.len() - 2);
        parts.push("+");
    }
    let key_name = parts.pop()?;

    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        match part.trim().to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_name.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        lower => {
            let mut chars = key_name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    let n = lower.strip_prefix('f')?.parse::<u8>().ok()?;
                    KeyCode::F(n)
                }
            }
        }
    };

    if let KeyCode::Char(c) = code
        && c.is_ascii_uppercase()
    {
        modifiers |= KeyModifiers::SHIFT;
    }

    Some(KeyEvent::new(code, modifiers))
}
