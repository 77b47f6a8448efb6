//! SettingsDialog struct and its inputs.
//!
//! This module contains the dialog struct, the props a caller passes when
//! opening it, and the bundle of injected capabilities. Lifecycle and
//! operations live in `state.rs`, rendering in `display.rs`.

use std::sync::Arc;

use vizdeck_config::AppConfiguration;

use crate::about_tab::AboutPanel;
use crate::experimental_tab::ExperimentalPanel;
use crate::extensions_tab::ExtensionsPanel;
use crate::features::{ExperimentalFeature, default_features};
use crate::general_tab::GeneralPanel;
use crate::i18n::EnglishTranslator;
use crate::tab::SettingsTab;
use crate::traits::{ExtensionCatalog, ExtensionSettingsPanel, Platform, Translator, WorkspaceState};
use crate::{CloseHandler, CloseReason};

mod display;
mod state;

pub use state::resolve_initial_tab;
pub(crate) use state::write_setting;

/// Caller-owned inputs of the dialog.
pub struct SettingsDialogProps {
    /// Tab to open on; wins over the workspace preference
    pub initial_tab: Option<SettingsTab>,
    /// Invoked when the dialog asks to be closed
    pub on_close: CloseHandler,
}

impl SettingsDialogProps {
    pub fn new(on_close: impl FnMut(CloseReason) + 'static) -> Self {
        Self {
            initial_tab: None,
            on_close: Box::new(on_close),
        }
    }

    pub fn with_initial_tab(mut self, tab: Option<SettingsTab>) -> Self {
        self.initial_tab = tab;
        self
    }
}

/// Collaborators the dialog consumes but does not implement.
pub struct SettingsCapabilities {
    pub config: Arc<dyn AppConfiguration>,
    pub workspace: Arc<dyn WorkspaceState>,
    pub platform: Arc<dyn Platform>,
    pub translator: Arc<dyn Translator>,
    /// Replaces the default extensions panel when present
    pub extension_settings: Option<Box<dyn ExtensionSettingsPanel>>,
    /// Installed extensions for the default extensions panel
    pub extension_catalog: Option<Arc<dyn ExtensionCatalog>>,
    pub experimental_features: Vec<ExperimentalFeature>,
    pub app_name: String,
    /// Build-time version of the host application
    pub app_version: String,
}

impl SettingsCapabilities {
    /// Capabilities with English strings, the default feature list and no
    /// extension collaborators.
    pub fn new(
        config: Arc<dyn AppConfiguration>,
        workspace: Arc<dyn WorkspaceState>,
        platform: Arc<dyn Platform>,
        app_version: impl Into<String>,
    ) -> Self {
        Self {
            config,
            workspace,
            platform,
            translator: Arc::new(EnglishTranslator),
            extension_settings: None,
            extension_catalog: None,
            experimental_features: default_features(),
            app_name: "vizdeck".to_string(),
            app_version: app_version.into(),
        }
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_extension_settings(mut self, panel: Box<dyn ExtensionSettingsPanel>) -> Self {
        self.extension_settings = Some(panel);
        self
    }

    pub fn with_extension_catalog(mut self, catalog: Arc<dyn ExtensionCatalog>) -> Self {
        self.extension_catalog = Some(catalog);
        self
    }

    pub fn with_experimental_features(mut self, features: Vec<ExperimentalFeature>) -> Self {
        self.experimental_features = features;
        self
    }

    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Translate a user-facing string.
    pub fn translate(&self, key: &str) -> String {
        self.translator.translate(key)
    }
}

/// Modal settings dialog using egui.
///
/// Owns the active tab and the state of all four section panels; panels
/// that are not visible keep their state until the dialog is dropped.
pub struct SettingsDialog {
    active_tab: SettingsTab,
    caps: SettingsCapabilities,
    on_close: CloseHandler,

    general: GeneralPanel,
    extensions: ExtensionsPanel,
    experimental: ExperimentalPanel,
    about: AboutPanel,
}
