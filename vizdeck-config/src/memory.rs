//! Volatile configuration store.
//!
//! Used for ephemeral sessions (nothing touches disk) and as a recording
//! double in tests: every `set` is appended to a write log.

use std::collections::BTreeMap;

use parking_lot::{Mutex, RwLock};

use crate::store::{AppConfiguration, ConfigWrite};
use crate::value::ConfigValue;

/// In-memory `AppConfiguration` whose writes complete immediately.
#[derive(Default)]
pub struct MemoryConfigStore {
    values: RwLock<BTreeMap<String, ConfigValue>>,
    writes: Mutex<Vec<(String, ConfigValue)>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `values`.
    pub fn with_values<I, K>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        let values = values.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            values: RwLock::new(values),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Every write performed so far, in order.
    pub fn writes(&self) -> Vec<(String, ConfigValue)> {
        self.writes.lock().clone()
    }

    /// Writes performed against `key`, in order.
    pub fn writes_to(&self, key: &str) -> Vec<ConfigValue> {
        self.writes
            .lock()
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

impl AppConfiguration for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<ConfigValue> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: ConfigValue) -> ConfigWrite {
        self.writes.lock().push((key.to_string(), value.clone()));
        self.values.write().insert(key.to_string(), value);
        ConfigWrite::completed(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_key_is_none() {
        let store = MemoryConfigStore::new();
        assert_eq!(store.get("showDebugPanels"), None);
        assert_eq!(store.get_bool("showDebugPanels"), None);
    }

    #[test]
    fn test_writes_are_recorded_in_order() {
        let store = MemoryConfigStore::new();
        store.set("a", ConfigValue::Bool(true)).detach();
        store.set("b", ConfigValue::Number(5.0)).detach();
        store.set("a", ConfigValue::Bool(false)).detach();

        assert_eq!(store.writes().len(), 3);
        assert_eq!(
            store.writes_to("a"),
            vec![ConfigValue::Bool(true), ConfigValue::Bool(false)]
        );
        assert_eq!(store.get_bool("a"), Some(false));
    }

    #[test]
    fn test_prepopulated_values_are_not_writes() {
        let store = MemoryConfigStore::with_values([("language", ConfigValue::from("ja"))]);
        assert_eq!(store.get_string("language").as_deref(), Some("ja"));
        assert!(store.writes().is_empty());
    }
}
