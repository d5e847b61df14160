use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Wireframe` → `"KeyW"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::Close, "Escape".into()),
            (KeyAction::Wireframe, "KeyW".into()),
            (KeyAction::Fill, "KeyF".into()),
            (KeyAction::Points, "KeyP".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }

    /// Keys bound to more than one action, with the actions sharing each
    /// key. Sorted, so reports are stable across runs.
    #[must_use]
    pub fn conflicts(&self) -> Vec<(String, Vec<KeyAction>)> {
        let mut by_key: BTreeMap<&str, Vec<KeyAction>> = BTreeMap::new();
        for (action, key) in &self.bindings {
            by_key.entry(key.as_str()).or_default().push(*action);
        }
        by_key
            .into_iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(key, mut actions)| {
                actions.sort_unstable();
                (key.to_owned(), actions)
            })
            .collect()
    }

    /// Bind `action` to `key`, replacing its previous key. Any other action
    /// bound to the same key is unbound.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|_, bound| *bound != key);
        let _ = self.bindings.insert(action, key);
    }
}
