//! Focus keybindings for dialog traversal.

use crate::core::input::{key_ids_equal, KeyId};
use crate::core::input_event::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusAction {
    Next,
    Previous,
}

#[derive(Debug, Clone)]
pub enum KeyBinding {
    Single(KeyId),
    Multiple(Vec<KeyId>),
}

impl KeyBinding {
    fn matches(&self, key_id: &str) -> bool {
        match self {
            KeyBinding::Single(bound) => key_ids_equal(bound, key_id),
            KeyBinding::Multiple(bound) => bound.iter().any(|bound| key_ids_equal(bound, key_id)),
        }
    }
}

impl From<&str> for KeyBinding {
    fn from(value: &str) -> Self {
        KeyBinding::Single(value.to_string())
    }
}

impl From<String> for KeyBinding {
    fn from(value: String) -> Self {
        KeyBinding::Single(value)
    }
}

impl From<Vec<&str>> for KeyBinding {
    fn from(value: Vec<&str>) -> Self {
        KeyBinding::Multiple(value.into_iter().map(|item| item.to_string()).collect())
    }
}

impl From<Vec<String>> for KeyBinding {
    fn from(value: Vec<String>) -> Self {
        KeyBinding::Multiple(value)
    }
}

/// Keys that move focus around a dialog's focus ring.
#[derive(Debug, Clone)]
pub struct FocusKeybindings {
    next: KeyBinding,
    previous: KeyBinding,
}

impl Default for FocusKeybindings {
    fn default() -> Self {
        Self {
            next: "tab".into(),
            previous: "shift+tab".into(),
        }
    }
}

impl FocusKeybindings {
    pub fn new(next: impl Into<KeyBinding>, previous: impl Into<KeyBinding>) -> Self {
        Self {
            next: next.into(),
            previous: previous.into(),
        }
    }

    pub fn set<K: Into<KeyBinding>>(&mut self, action: FocusAction, keys: K) {
        match action {
            FocusAction::Next => self.next = keys.into(),
            FocusAction::Previous => self.previous = keys.into(),
        }
    }

    /// Focus action bound to `event`, if any. Key releases never move focus.
    pub fn action_for(&self, event: &InputEvent) -> Option<FocusAction> {
        if event.is_release() {
            return None;
        }
        let key_id = event.key_id()?;
        if self.next.matches(key_id) {
            Some(FocusAction::Next)
        } else if self.previous.matches(key_id) {
            Some(FocusAction::Previous)
        } else {
            None
        }
    }
}
