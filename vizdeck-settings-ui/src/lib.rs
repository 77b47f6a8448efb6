//! Settings dialog for the vizdeck visualization application.
//!
//! This crate provides an egui-based modal dialog with four sections
//! (General, Extensions, Experimental Features, About). It owns only the
//! active-tab state; configuration, workspace state, platform queries,
//! translation and extension management are injected through the trait
//! interfaces in [`traits`] and [`vizdeck_config::AppConfiguration`].

// Trait interfaces for decoupling from the host application
pub mod traits;
pub use traits::*;

pub mod features;
pub mod i18n;
pub mod section;
pub mod tab;

// Section panels
pub mod about_tab;
pub mod experimental_tab;
pub mod extensions_tab;
pub mod general_tab;

// SettingsDialog struct and impl
mod settings_dialog;
pub use settings_dialog::{
    SettingsCapabilities, SettingsDialog, SettingsDialogProps, resolve_initial_tab,
};

pub use features::ExperimentalFeature;
pub use i18n::EnglishTranslator;
pub use tab::{SettingsTab, TabOrientation, UnknownTab};

// Re-export the configuration capability that consumers need
pub use vizdeck_config::{self as config, AppConfiguration, ConfigValue, ConfigWrite};

/// Why the dialog asked its caller to close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The close control in the title bar
    TitleBarClose,
    /// The "Done" button in the footer
    DoneButton,
    /// Escape pressed while the dialog was the top modal
    EscapeKey,
    /// Click on the backdrop outside the dialog
    OutsideClick,
}

/// Callback invoked when the dialog requests to be closed.
pub type CloseHandler = Box<dyn FnMut(CloseReason)>;

/// Identifiers of the controls a frame rendered.
pub mod controls {
    pub const TAB_LIST: &str = "dialog.tab-list";
    pub const TITLE_CLOSE: &str = "dialog.title-close";
    pub const DONE: &str = "dialog.done";

    pub const COLOR_SCHEME: &str = "general.color-scheme";
    pub const TIME_FORMAT: &str = "general.time-format";
    pub const MESSAGE_RATE: &str = "general.message-rate";
    pub const LANGUAGE: &str = "general.language";
    pub const AUTO_UPDATE: &str = "general.auto-update";
    pub const LAUNCH_DEFAULT: &str = "general.launch-default";
    pub const ROS_PACKAGE_PATH: &str = "general.ros-package-path";
    pub const DEBUG_MODE: &str = "general.debug-mode";

    pub const EXTENSIONS_CUSTOM: &str = "extensions.custom";
    pub const EXTENSIONS_FILTER: &str = "extensions.filter";
    pub const EXTENSIONS_LIST: &str = "extensions.list";
    pub const EXTENSIONS_EMPTY: &str = "extensions.empty";
    pub const EXTENSIONS_ERROR: &str = "extensions.error";

    pub const EXPERIMENTAL_LIST: &str = "experimental.list";
    pub const EXPERIMENTAL_EMPTY: &str = "experimental.empty";

    pub const ABOUT_VERSION: &str = "about.version";
    pub const ABOUT_COPY_VERSION: &str = "about.copy-version";
    pub const ABOUT_LINKS: &str = "about.links";
}

/// What a single call to [`SettingsDialog::show`] rendered.
///
/// Lets hosts and tests verify the dialog without inspecting egui state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsFrame {
    /// Whether the dialog was open this frame
    pub rendered: bool,
    /// Test identifier of the active tab
    pub active_test_id: String,
    /// The panel drawn this frame
    pub visible_panel: Option<SettingsTab>,
    /// Orientation of the tab list
    pub orientation: Option<TabOrientation>,
    /// Controls drawn this frame, in drawing order
    pub controls: Vec<&'static str>,
    /// Close requested this frame, if any
    pub close_reason: Option<CloseReason>,
    /// Screen rectangles of clickable controls, keyed by control id or tab
    /// test id
    pub rects: Vec<(String, egui::Rect)>,
    /// Outer rectangle of the dialog
    pub dialog_rect: Option<egui::Rect>,
    /// Viewport of the active panel's scroll area
    pub panel_rect: Option<egui::Rect>,
}

impl SettingsFrame {
    /// Whether the control with this identifier was drawn.
    pub fn has_control(&self, id: &str) -> bool {
        self.controls.contains(&id)
    }

    /// Where the control with this identifier was drawn.
    pub fn rect(&self, id: &str) -> Option<egui::Rect> {
        self.rects
            .iter()
            .find(|(rect_id, _)| rect_id == id)
            .map(|(_, rect)| *rect)
    }

    pub(crate) fn record(&mut self, id: &'static str) {
        self.controls.push(id);
    }

    pub(crate) fn record_rect(&mut self, id: impl Into<String>, rect: egui::Rect) {
        self.rects.push((id.into(), rect));
    }
}
