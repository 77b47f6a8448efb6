//! Application module for vizdeck
//!
//! - `App`: loads the stores and runs the event loop
//! - `AppState`: winit handler that owns the settings window

use crate::cli::RuntimeOptions;
use crate::platform::NativePlatform;
use crate::settings_window::{SettingsWindow, SettingsWindowAction};
use crate::workspace::WorkspaceStore;
use anyhow::{Context, Result};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use tokio::runtime::Runtime;
use vizdeck_config::{AppConfiguration, YamlConfigStore};
use vizdeck_settings_ui::traits::StaticCatalog;
use vizdeck_settings_ui::{SettingsCapabilities, SettingsDialog, SettingsDialogProps};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// Main application entry point
pub struct App {
    runtime: Arc<Runtime>,
    options: RuntimeOptions,
    config: Arc<dyn AppConfiguration>,
    workspace: Arc<WorkspaceStore>,
}

impl App {
    /// Load settings and workspace state
    pub fn new(runtime: Arc<Runtime>, options: RuntimeOptions) -> Result<Self> {
        let config = match &options.config_path {
            Some(path) => YamlConfigStore::load_from(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => YamlConfigStore::load()?,
        };
        let workspace = WorkspaceStore::load()?;

        Ok(Self {
            runtime,
            options,
            config: Arc::new(config),
            workspace: Arc::new(workspace),
        })
    }

    /// Build the dialog; `close_requested` is set when it asks to close.
    pub fn build_dialog(&self, close_requested: Rc<Cell<bool>>) -> SettingsDialog {
        let caps = SettingsCapabilities::new(
            Arc::clone(&self.config),
            self.workspace.clone(),
            Arc::new(NativePlatform::new(self.options.web)),
            crate::VERSION,
        )
        .with_extension_catalog(Arc::new(StaticCatalog::default()));

        let props = SettingsDialogProps::new(move |_reason| close_requested.set(true))
            .with_initial_tab(self.options.initial_tab);

        SettingsDialog::new(props, caps)
    }

    /// Run the application until the dialog is closed
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState {
            app: self,
            window: None,
            close_requested: Rc::new(Cell::new(false)),
            error: None,
        };

        event_loop.run_app(&mut state)?;

        match state.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Application state that handles events
struct AppState {
    app: App,
    window: Option<SettingsWindow>,
    close_requested: Rc<Cell<bool>>,
    /// Failure during window creation, returned from `App::run`
    error: Option<anyhow::Error>,
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let dialog = self.app.build_dialog(Rc::clone(&self.close_requested));
        let config = Arc::clone(&self.app.config);
        match self
            .app
            .runtime
            .block_on(SettingsWindow::new(event_loop, dialog, config))
        {
            Ok(window) => {
                log::info!("Opened settings window {:?}", window.window_id());
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to create settings window: {:#}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.window_id() != window_id {
            return;
        }

        if let SettingsWindowAction::Rendered(frame) = window.handle_window_event(event) {
            log::trace!(
                "Settings frame: tab={} controls={}",
                frame.active_test_id,
                frame.controls.len()
            );
        }

        if self.close_requested.get() {
            log::info!("Settings dialog closed, exiting");
            self.window = None;
            event_loop.exit();
        }
    }
}
