//! Workspace state persisted next to the settings file.
//!
//! Holds the preferred settings tab the dialog opens on when the caller
//! does not ask for a specific one.

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vizdeck_config::YamlConfigStore;
use vizdeck_settings_ui::{SettingsTab, WorkspaceState};

/// On-disk shape of `workspace.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_settings_tab: Option<SettingsTab>,
}

/// Workspace state loaded from a YAML file.
pub struct WorkspaceStore {
    path: PathBuf,
    state: RwLock<WorkspaceFile>,
}

impl WorkspaceStore {
    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load from `path`. A missing or empty file yields default state.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if contents.trim().is_empty() {
                WorkspaceFile::default()
            } else {
                serde_yaml_ng::from_str(&contents)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
        } else {
            log::info!("No workspace state at {:?}, using defaults", path);
            WorkspaceFile::default()
        };

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// `workspace.yaml` in the settings directory.
    pub fn default_path() -> PathBuf {
        YamlConfigStore::config_dir().join("workspace.yaml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store the preferred settings tab and save the file.
    pub fn set_preferred_settings_tab(&self, tab: Option<SettingsTab>) -> Result<()> {
        let snapshot = {
            let mut state = self.state.write();
            state.preferred_settings_tab = tab;
            state.clone()
        };
        self.save(&snapshot)
    }

    fn save(&self, state: &WorkspaceFile) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let yaml = serde_yaml_ng::to_string(state)?;
        let temp_path = self.path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml)?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("failed to save {}", self.path.display()))?;
        log::info!("Saved workspace state to {:?}", self.path);
        Ok(())
    }
}

impl WorkspaceState for WorkspaceStore {
    fn preferred_settings_tab(&self) -> Option<SettingsTab> {
        self.state.read().preferred_settings_tab
    }
}
