//! Role storage seam
//!
//! The viewer's role lives in a client-side key-value store (browser local
//! storage, a session cache, a test harness). The resolver reads it through
//! this trait on every call instead of touching ambient global state, so
//! role switches take effect immediately and tests can inject any store.

use std::collections::HashMap;
use std::sync::RwLock;

/// Synchronous key-value source for the viewer's current role.
pub trait RoleStore {
    /// Look up the stored value for `key`. Absent keys return `None`.
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory [`RoleStore`] backed by a `HashMap`.
///
/// Uses interior mutability so a store shared with a resolver can switch
/// roles at runtime (impersonation, test harnesses).
///
/// # Example
///
/// ```
/// use backoffice_screen::{MemoryRoleStore, RoleStore};
///
/// let store = MemoryRoleStore::new();
/// assert_eq!(store.get("user_role"), None);
///
/// store.set("user_role", "editor");
/// assert_eq!(store.get("user_role"), Some("editor".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryRoleStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryRoleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for `key`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.into(), value.into());
        }
    }

    /// Remove the value for `key`.
    pub fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

impl RoleStore for MemoryRoleStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryRoleStore::new();
        assert_eq!(store.get("user_role"), None);

        store.set("user_role", "admin");
        assert_eq!(store.get("user_role"), Some("admin".to_string()));

        store.set("user_role", "viewer");
        assert_eq!(store.get("user_role"), Some("viewer".to_string()));

        store.remove("user_role");
        assert_eq!(store.get("user_role"), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryRoleStore::new();
        store.set("a", "1");
        store.set("b", "2");
        store.remove("a");
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), Some("2".to_string()));
    }
}
