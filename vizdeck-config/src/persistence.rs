//! YAML-backed configuration store.
//!
//! Covers:
//! - `load` / `load_from` (read the settings file, create it when missing)
//! - Background persistence on one writer thread, atomic write (temp file then rename)
//! - XDG-style path helpers (`config_dir`, `default_path`)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use parking_lot::RwLock;
use tokio::sync::mpsc;

use crate::error::ConfigError;
use crate::store::{AppConfiguration, ConfigWrite, WriteCompletion};
use crate::value::ConfigValue;

type ValueMap = BTreeMap<String, ConfigValue>;

/// A save queued by `set`.
struct SaveRequest {
    key: String,
    completion: WriteCompletion,
}

/// Configuration store persisted to a YAML file.
///
/// Values live in memory behind a lock; every `set` queues a save of the
/// full map for the store's writer thread. Saves run in order and always
/// write the newest snapshot, so the file never ends up older than the last
/// write. The writer drains its queue and exits once the store is dropped.
pub struct YamlConfigStore {
    path: PathBuf,
    values: Arc<RwLock<ValueMap>>,
    writer: mpsc::UnboundedSender<SaveRequest>,
}

impl YamlConfigStore {
    /// Load the settings file from its default location.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::default_path();
        Self::load_from(&path)
            .with_context(|| format!("failed to load settings from {}", path.display()))
    }

    /// Load the settings file at `path`, creating an empty one if missing.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        log::info!("Settings path: {:?}", path);

        let values = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                ValueMap::new()
            } else {
                serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?
            }
        } else {
            log::info!("Settings file not found, creating empty file at {:?}", path);
            let values = ValueMap::new();
            save_values(&path, &values)?;
            values
        };

        log::debug!("Loaded {} settings", values.len());

        let values = Arc::new(RwLock::new(values));
        let writer = spawn_writer(path.clone(), Arc::clone(&values))?;

        Ok(Self {
            path,
            values,
            writer,
        })
    }

    /// Path of the backing settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of every stored value.
    pub fn values(&self) -> ValueMap {
        self.values.read().clone()
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("vizdeck")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("vizdeck")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Get the default settings file path
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("settings.yaml")
    }
}

impl AppConfiguration for YamlConfigStore {
    fn get(&self, key: &str) -> Option<ConfigValue> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: ConfigValue) -> ConfigWrite {
        log::debug!("Setting {} = {}", key, value);
        self.values.write().insert(key.to_string(), value);

        let (write, completion) = ConfigWrite::pending();
        let request = SaveRequest {
            key: key.to_string(),
            completion,
        };
        if let Err(mpsc::error::SendError(request)) = self.writer.send(request) {
            log::error!("Settings writer stopped, {} was not persisted", request.key);
            request.completion.complete(Err(ConfigError::WriteAborted));
        }
        write
    }
}

/// Start the thread that persists queued saves for `path`.
fn spawn_writer(
    path: PathBuf,
    values: Arc<RwLock<ValueMap>>,
) -> Result<mpsc::UnboundedSender<SaveRequest>, ConfigError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<SaveRequest>();

    std::thread::Builder::new()
        .name("settings-writer".to_string())
        .spawn(move || {
            while let Some(request) = rx.blocking_recv() {
                let snapshot = values.read().clone();
                let result = save_values(&path, &snapshot);
                if let Err(e) = &result {
                    log::error!("Failed to persist setting {}: {}", request.key, e);
                }
                request.completion.complete(result);
            }
            log::debug!("Settings writer for {:?} stopped", path);
        })?;

    Ok(tx)
}

/// Atomic save: write to a temp file then rename to prevent corruption on crash
fn save_values(path: &Path, values: &ValueMap) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let yaml = serde_yaml_ng::to_string(values).map_err(ConfigError::Serialize)?;
    let temp_path = path.with_extension("yaml.tmp");
    fs::write(&temp_path, &yaml)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.yaml");
        let store = YamlConfigStore::load_from(&path).unwrap();
        assert!(path.exists());
        assert!(store.values().is_empty());
    }

    #[test]
    fn test_set_is_visible_before_persistence() {
        let dir = TempDir::new().unwrap();
        let store = YamlConfigStore::load_from(dir.path().join("settings.yaml")).unwrap();
        let write = store.set("showDebugPanels", ConfigValue::Bool(true));
        assert_eq!(store.get_bool("showDebugPanels"), Some(true));
        write.wait().unwrap();
    }

    #[test]
    fn test_values_survive_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        {
            let store = YamlConfigStore::load_from(&path).unwrap();
            store.set("colorScheme", "light".into()).wait().unwrap();
            store
                .set("messageRate", ConfigValue::Number(30.0))
                .wait()
                .unwrap();
        }
        let reloaded = YamlConfigStore::load_from(&path).unwrap();
        assert_eq!(reloaded.get_string("colorScheme").as_deref(), Some("light"));
        assert_eq!(reloaded.get_number("messageRate"), Some(30.0));
    }

    #[test]
    fn test_last_write_wins_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        let store = YamlConfigStore::load_from(&path).unwrap();
        let writes: Vec<_> = (0..8)
            .map(|i| store.set("showDebugPanels", ConfigValue::Bool(i % 2 == 1)))
            .collect();
        for write in writes {
            write.wait().unwrap();
        }
        let reloaded = YamlConfigStore::load_from(&path).unwrap();
        assert_eq!(reloaded.get_bool("showDebugPanels"), Some(true));
    }

    #[test]
    fn test_writes_complete_in_order() {
        let dir = TempDir::new().unwrap();
        let store = YamlConfigStore::load_from(dir.path().join("settings.yaml")).unwrap();
        let mut earlier: Vec<_> = (0..16)
            .map(|i| store.set("messageRate", ConfigValue::Number(f64::from(i))))
            .collect();
        store.set("colorScheme", "dark".into()).wait().unwrap();
        for write in &mut earlier {
            assert!(matches!(write.try_result(), Some(Ok(()))));
        }
    }

    #[test]
    fn test_pending_writes_finish_after_store_drop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        let store = YamlConfigStore::load_from(&path).unwrap();
        let write = store.set("language", "en".into());
        drop(store);
        write.wait().unwrap();
        let reloaded = YamlConfigStore::load_from(&path).unwrap();
        assert_eq!(reloaded.get_string("language").as_deref(), Some("en"));
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "colorScheme: [unterminated").unwrap();
        let err = YamlConfigStore::load_from(&path).err().unwrap();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_typed_getters_ignore_other_types() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "showDebugPanels: \"yes\"\n").unwrap();
        let store = YamlConfigStore::load_from(&path).unwrap();
        assert_eq!(store.get_bool("showDebugPanels"), None);
        assert_eq!(store.get_string("showDebugPanels").as_deref(), Some("yes"));
    }
}
