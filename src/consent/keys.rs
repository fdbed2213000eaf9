use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    Accept,
    Decline,
}

/// Keyboard shortcuts for the consent dialog. Matching ignores ASCII case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub accept: char,
    pub decline: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            accept: 'y',
            decline: 'n',
        }
    }
}

impl KeyBindings {
    /// Maps a key name as reported by the host (`"y"`, `"N"`, `"Enter"`).
    pub fn resolve(&self, key: &str) -> Option<KeyAction> {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if c.eq_ignore_ascii_case(&self.accept) {
            Some(KeyAction::Accept)
        } else if c.eq_ignore_ascii_case(&self.decline) {
            Some(KeyAction::Decline)
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    listeners: BTreeMap<u64, KeyBindings>,
}

/// Page-wide key listener table (the host's global `keydown` listeners).
///
/// Listeners are added through [`KeyRegistry::register`] and live exactly as
/// long as the returned guard.
#[derive(Clone, Debug, Default)]
pub struct KeyRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, bindings: KeyBindings) -> KeyListenerGuard {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, bindings);
        tracing::trace!(id, "key listener registered");
        KeyListenerGuard {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Actions triggered by `key`, one per matching listener, in
    /// registration order.
    pub fn dispatch(&self, key: &str) -> Vec<KeyAction> {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter_map(|b| b.resolve(key))
            .collect()
    }
}

/// Unregisters its listener on drop.
#[derive(Debug)]
pub struct KeyListenerGuard {
    registry: Weak<RefCell<RegistryInner>>,
    id: u64,
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.borrow_mut().listeners.remove(&self.id);
            tracing::trace!(id = self.id, "key listener removed");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/consent/keys.rs"]
mod tests;
