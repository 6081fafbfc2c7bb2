use crate::domain::keybinding::{Action, Keybind, parse_key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

/// Key bindings: the keys that trigger each action and the key shown for it.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self {
            display_bindings: HashMap::new(),
            input_bindings: Vec::new(),
        };

        let ctrl = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        let plain = |code: KeyCode| KeyEvent::new(code, KeyModifiers::NONE);

        registry.register(Action::Quit, ctrl('c'), true);
        registry.register(Action::Quit, ctrl('q'), false);

        registry.register(Action::AddNote, ctrl('n'), true);
        registry.register(Action::DeleteNote, ctrl('d'), true);
        registry.register(Action::SaveNote, ctrl('s'), true);
        registry.register(Action::ToggleTagSearch, ctrl('f'), true);

        registry.register(Action::FocusNext, plain(KeyCode::Tab), true);
        registry.register(
            Action::FocusPrevious,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        registry.register(Action::FocusPrevious, plain(KeyCode::BackTab), false);
        registry.register(Action::FocusList, ctrl('l'), true);

        registry.register(Action::NavigateUp, plain(KeyCode::Up), true);
        registry.register(Action::NavigateUp, plain(KeyCode::Char('k')), false);
        registry.register(Action::NavigateDown, plain(KeyCode::Down), true);
        registry.register(Action::NavigateDown, plain(KeyCode::Char('j')), false);
        registry.register(Action::SelectFirst, plain(KeyCode::Home), true);
        registry.register(Action::SelectFirst, plain(KeyCode::Char('g')), false);
        registry.register(Action::SelectLast, plain(KeyCode::End), true);
        registry.register(
            Action::SelectLast,
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            false,
        );

        registry.register(Action::Confirm, plain(KeyCode::Enter), true);
        registry.register(Action::Confirm, plain(KeyCode::Char(' ')), false);
        registry.register(Action::Cancel, plain(KeyCode::Esc), true);

        registry
    }
}

impl CommandRegistry {
    /// Creates the default registry with user overrides applied.
    ///
    /// Each override binds a key to an action ahead of the defaults and
    /// becomes the key shown for that action. Unparsable keys are skipped.
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();

        let mut entries: Vec<_> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (binding, action) in entries {
            match parse_key(binding) {
                Some(key) => {
                    registry.input_bindings.retain(|(k, _)| !same_key(k, &key));
                    registry.input_bindings.insert(0, (key, *action));
                    registry.display_bindings.insert(*action, key);
                }
                None => warn!(key = %binding, "Ignoring unrecognized keybinding"),
            }
        }

        registry
    }

    fn register(&mut self, action: Action, key: KeyEvent, is_primary: bool) {
        if is_primary {
            self.display_bindings.insert(action, key);
        }
        self.input_bindings.push((key, action));
    }

    /// Returns the primary key of `action`.
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    /// Returns the action bound to `key`, if any.
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| same_key(k, &key))
            .map(|(_, a)| *a)
    }

    /// Builds a footer entry for `action` using its primary key.
    pub fn keybind(&self, action: Action, label: &'static str) -> Option<Keybind> {
        self.get(action).map(|key| Keybind::new(key, action, label))
    }
}

fn same_key(a: &KeyEvent, b: &KeyEvent) -> bool {
    a.code == b.code && a.modifiers == b.modifiers
}

/// Screens that list their key bindings in the footer.
pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}
