//! Trait definitions for settings dialog dependencies.
//!
//! These traits define the interface between the settings dialog and the
//! host application. The host implements them (or uses the simple
//! implementations below) and hands them to the dialog through
//! `SettingsCapabilities`.

use crate::tab::SettingsTab;

/// Read-only view of shared workspace state.
pub trait WorkspaceState: Send + Sync {
    /// The tab the workspace wants the settings dialog to open on.
    fn preferred_settings_tab(&self) -> Option<SettingsTab>;
}

/// Platform queries used to gate platform-specific controls.
pub trait Platform: Send + Sync {
    /// Whether this is the desktop build (as opposed to browser-hosted).
    fn is_desktop(&self) -> bool;

    /// Whether this is a development build. Development-only experimental
    /// features are listed only here.
    fn is_development(&self) -> bool {
        false
    }
}

/// Lookup of user-facing strings.
pub trait Translator: Send + Sync {
    /// Display string for `key`.
    fn translate(&self, key: &str) -> String;
}

/// Pre-built content for the Extensions tab.
///
/// When the host supplies one, it replaces the default extensions panel.
pub trait ExtensionSettingsPanel {
    fn show(&mut self, ui: &mut egui::Ui, translator: &dyn Translator);
}

/// Installed extension metadata shown by the default extensions panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionInfo {
    pub id: String,
    pub name: String,
    pub publisher: String,
    pub version: String,
    pub description: String,
}

/// Source of installed extensions for the default extensions panel.
pub trait ExtensionCatalog: Send + Sync {
    fn installed(&self) -> anyhow::Result<Vec<ExtensionInfo>>;
}

/// Platform answers fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPlatform {
    pub desktop: bool,
    pub development: bool,
}

impl StaticPlatform {
    pub fn desktop() -> Self {
        Self {
            desktop: true,
            development: false,
        }
    }

    pub fn web() -> Self {
        Self {
            desktop: false,
            development: false,
        }
    }

    pub fn with_development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }
}

impl Platform for StaticPlatform {
    fn is_desktop(&self) -> bool {
        self.desktop
    }

    fn is_development(&self) -> bool {
        self.development
    }
}

/// Workspace state with a fixed preferred tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticWorkspace {
    pub preferred_tab: Option<SettingsTab>,
}

impl StaticWorkspace {
    pub fn new(preferred_tab: Option<SettingsTab>) -> Self {
        Self { preferred_tab }
    }
}

impl WorkspaceState for StaticWorkspace {
    fn preferred_settings_tab(&self) -> Option<SettingsTab> {
        self.preferred_tab
    }
}

/// Extension catalog backed by a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    pub extensions: Vec<ExtensionInfo>,
}

impl ExtensionCatalog for StaticCatalog {
    fn installed(&self) -> anyhow::Result<Vec<ExtensionInfo>> {
        Ok(self.extensions.clone())
    }
}
