//! SettingsDialog lifecycle and operations.

use vizdeck_config::{AppConfiguration, ConfigValue};

use crate::about_tab::AboutPanel;
use crate::experimental_tab::ExperimentalPanel;
use crate::extensions_tab::ExtensionsPanel;
use crate::general_tab::{self, GeneralPanel};
use crate::tab::SettingsTab;
use crate::traits::WorkspaceState;
use crate::CloseReason;

use super::{SettingsCapabilities, SettingsDialog, SettingsDialogProps};

/// Store a setting without observing the outcome of the write.
pub(crate) fn write_setting(config: &dyn AppConfiguration, key: &str, value: ConfigValue) {
    log::info!("Settings: {} = {}", key, value);
    // Errors ignored: persistence failures are logged by the store.
    config.set(key, value).detach();
}

/// Tab the dialog opens on: the explicit tab, else the workspace
/// preference, else General. A candidate without a panel is skipped.
pub fn resolve_initial_tab(
    explicit: Option<SettingsTab>,
    workspace: &dyn WorkspaceState,
) -> SettingsTab {
    [explicit, workspace.preferred_settings_tab()]
        .into_iter()
        .flatten()
        .find(|tab| {
            if !tab.has_panel() {
                log::warn!("Settings tab '{}' has no panel, skipping it", tab);
            }
            tab.has_panel()
        })
        .unwrap_or_default()
}

impl SettingsDialog {
    /// Open a new settings dialog.
    pub fn new(props: SettingsDialogProps, mut caps: SettingsCapabilities) -> Self {
        let active_tab = resolve_initial_tab(props.initial_tab, caps.workspace.as_ref());
        log::info!(
            "Opening settings dialog on '{}' (explicit: {:?})",
            active_tab,
            props.initial_tab
        );

        let extensions = ExtensionsPanel::new(caps.extension_settings.take());

        Self {
            active_tab,
            caps,
            on_close: props.on_close,
            general: GeneralPanel::default(),
            extensions,
            experimental: ExperimentalPanel,
            about: AboutPanel::default(),
        }
    }

    /// Currently active tab.
    pub fn active_tab(&self) -> SettingsTab {
        self.active_tab
    }

    /// Test identifier of the active tab.
    pub fn active_test_id(&self) -> String {
        self.active_tab.test_id()
    }

    /// Make `tab` the active tab.
    ///
    /// Requests for a tab without a panel are ignored.
    pub fn select_tab(&mut self, tab: SettingsTab) {
        if !tab.has_panel() {
            log::debug!("Ignoring selection of settings tab '{}' without panel", tab);
            return;
        }
        if tab != self.active_tab {
            log::debug!("Settings tab {} -> {}", self.active_tab, tab);
            self.active_tab = tab;
        }
    }

    /// Ask the caller to close the dialog.
    ///
    /// Invokes the close handler once; visibility stays with the caller.
    pub fn request_close(&mut self, reason: CloseReason) {
        log::info!("Settings dialog close requested ({:?})", reason);
        (self.on_close)(reason);
    }

    /// Write the debug-mode flag (fire-and-forget).
    pub fn set_debug_mode(&self, enabled: bool) {
        general_tab::set_debug_mode(self.caps.config.as_ref(), enabled);
    }

    /// Current debug-mode flag.
    pub fn debug_mode(&self) -> bool {
        general_tab::debug_mode(self.caps.config.as_ref())
    }

    /// Each panel tab paired with whether it is visible.
    pub fn panel_visibility(&self) -> Vec<(SettingsTab, bool)> {
        SettingsTab::panels()
            .iter()
            .map(|tab| (*tab, *tab == self.active_tab))
            .collect()
    }

    pub fn capabilities(&self) -> &SettingsCapabilities {
        &self.caps
    }

    pub fn general_panel(&self) -> &GeneralPanel {
        &self.general
    }

    pub fn extensions_panel(&self) -> &ExtensionsPanel {
        &self.extensions
    }

    pub fn extensions_panel_mut(&mut self) -> &mut ExtensionsPanel {
        &mut self.extensions
    }

    pub fn about_panel(&self) -> &AboutPanel {
        &self.about
    }
}
