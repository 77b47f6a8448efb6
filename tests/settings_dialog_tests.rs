//! Headless frames of the settings dialog.

use parking_lot::Mutex;
use std::sync::Arc;
use vizdeck::platform::NativePlatform;
use vizdeck_config::{ConfigValue, MemoryConfigStore};
use vizdeck_settings_ui::traits::{
    ExtensionCatalog, ExtensionInfo, ExtensionSettingsPanel, StaticCatalog, StaticPlatform,
    StaticWorkspace, Translator,
};
use vizdeck_settings_ui::{
    CloseReason, ExperimentalFeature, Platform, SettingsCapabilities, SettingsDialog,
    SettingsDialogProps, SettingsFrame, SettingsTab, TabOrientation, controls, general_tab,
};

struct Harness {
    ctx: egui::Context,
    dialog: SettingsDialog,
    config: Arc<MemoryConfigStore>,
    closes: Arc<Mutex<Vec<CloseReason>>>,
}

impl Harness {
    fn new(
        explicit: Option<SettingsTab>,
        preferred: Option<SettingsTab>,
        platform: Arc<dyn Platform>,
        customize: impl FnOnce(SettingsCapabilities) -> SettingsCapabilities,
    ) -> Self {
        let config = Arc::new(MemoryConfigStore::new());
        let closes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&closes);

        let caps = SettingsCapabilities::new(
            config.clone(),
            Arc::new(StaticWorkspace::new(preferred)),
            platform,
            vizdeck::VERSION,
        );
        let props = SettingsDialogProps::new(move |reason| sink.lock().push(reason))
            .with_initial_tab(explicit);

        Self {
            ctx: egui::Context::default(),
            dialog: SettingsDialog::new(props, customize(caps)),
            config,
            closes,
        }
    }

    fn desktop() -> Self {
        Self::new(None, None, Arc::new(StaticPlatform::desktop()), |c| c)
    }

    fn frame_with(&mut self, width: f32, events: Vec<egui::Event>) -> SettingsFrame {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, 800.0),
            )),
            events,
            ..Default::default()
        };
        let mut frame = SettingsFrame::default();
        let dialog = &mut self.dialog;
        let _ = self.ctx.run(input, |ctx| {
            frame = dialog.show(ctx, true);
        });
        frame
    }

    fn frame(&mut self) -> SettingsFrame {
        self.frame_with(1000.0, Vec::new())
    }

    /// Press and release the primary button over `rect`; returns the release frame.
    fn click(&mut self, rect: egui::Rect) -> SettingsFrame {
        let pos = rect.center();
        self.frame_with(1000.0, vec![egui::Event::PointerMoved(pos)]);
        self.frame_with(1000.0, vec![pointer_button(pos, true)]);
        self.frame_with(1000.0, vec![pointer_button(pos, false)])
    }

    /// Click the control drawn at `id` in a freshly settled frame.
    fn click_control(&mut self, id: &str) -> SettingsFrame {
        let rect = self
            .frame()
            .rect(id)
            .unwrap_or_else(|| panic!("no rect recorded for {id}"));
        self.click(rect)
    }

    fn focus_ros_path(&self) {
        self.ctx
            .memory_mut(|m| m.request_focus(general_tab::ros_package_path_id()));
    }
}

fn pointer_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

fn key_pressed(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }
}

fn escape_pressed() -> egui::Event {
    key_pressed(egui::Key::Escape)
}

#[test]
fn test_closed_dialog_draws_nothing() {
    let mut h = Harness::desktop();
    let mut frame = SettingsFrame::default();
    let dialog = &mut h.dialog;
    let _ = h.ctx.run(egui::RawInput::default(), |ctx| {
        frame = dialog.show(ctx, false);
    });
    assert!(!frame.rendered);
    assert!(frame.controls.is_empty());
    assert_eq!(frame.active_test_id, "settings-tab-general");
}

#[test]
fn test_each_tab_shows_exactly_its_panel() {
    let mut h = Harness::desktop();
    for tab in SettingsTab::panels() {
        h.dialog.select_tab(*tab);
        let frame = h.frame();
        assert!(frame.rendered);
        assert_eq!(frame.visible_panel, Some(*tab));
        assert_eq!(frame.active_test_id, tab.test_id());
    }
}

#[test]
fn test_panel_controls_belong_to_active_tab() {
    let mut h = Harness::desktop();

    h.dialog.select_tab(SettingsTab::About);
    let about = h.frame();
    assert!(about.has_control(controls::ABOUT_VERSION));
    assert!(about.has_control(controls::ABOUT_LINKS));
    assert!(!about.has_control(controls::COLOR_SCHEME));
    assert!(!about.has_control(controls::EXTENSIONS_FILTER));

    h.dialog.select_tab(SettingsTab::General);
    let general = h.frame();
    assert!(general.has_control(controls::COLOR_SCHEME));
    assert!(!general.has_control(controls::ABOUT_VERSION));
}

#[test]
fn test_explicit_tab_beats_workspace_preference() {
    let mut h = Harness::new(
        Some(SettingsTab::About),
        Some(SettingsTab::Extensions),
        Arc::new(StaticPlatform::desktop()),
        |c| c,
    );
    assert_eq!(h.frame().visible_panel, Some(SettingsTab::About));
}

#[test]
fn test_workspace_preference_used_without_explicit_tab() {
    let mut h = Harness::new(
        None,
        Some(SettingsTab::ExperimentalFeatures),
        Arc::new(StaticPlatform::desktop()),
        |c| c,
    );
    assert_eq!(
        h.frame().active_test_id,
        "settings-tab-experimental-features"
    );
}

#[test]
fn test_opens_on_general_by_default() {
    let mut h = Harness::desktop();
    assert_eq!(h.frame().visible_panel, Some(SettingsTab::General));
}

#[test]
fn test_desktop_general_controls() {
    let mut h = Harness::desktop();
    let frame = h.frame();
    assert!(frame.has_control(controls::AUTO_UPDATE));
    assert!(!frame.has_control(controls::LAUNCH_DEFAULT));
    assert!(frame.has_control(controls::ROS_PACKAGE_PATH));
    assert!(frame.has_control(controls::DEBUG_MODE));
}

#[test]
fn test_web_general_controls() {
    let mut h = Harness::new(None, None, Arc::new(NativePlatform::new(true)), |c| c);
    let frame = h.frame();
    assert!(!frame.has_control(controls::AUTO_UPDATE));
    assert!(frame.has_control(controls::LAUNCH_DEFAULT));
    assert!(!frame.has_control(controls::ROS_PACKAGE_PATH));
    assert!(frame.has_control(controls::DEBUG_MODE));
}

#[test]
fn test_debug_toggle_writes_once_per_toggle() {
    let h = Harness::desktop();
    h.dialog.set_debug_mode(true);
    assert_eq!(
        h.config.writes_to("showDebugPanels"),
        vec![ConfigValue::Bool(true)]
    );
    assert!(h.dialog.debug_mode());

    h.dialog.set_debug_mode(false);
    assert_eq!(h.config.writes().len(), 2);
    assert!(!h.dialog.debug_mode());
}

#[test]
fn test_close_invokes_handler_once_from_any_tab() {
    for tab in SettingsTab::panels() {
        let mut h = Harness::desktop();
        h.dialog.select_tab(*tab);
        h.frame();
        h.dialog.request_close(CloseReason::DoneButton);
        assert_eq!(*h.closes.lock(), vec![CloseReason::DoneButton]);
    }
}

#[test]
fn test_frames_without_input_do_not_close() {
    let mut h = Harness::desktop();
    for _ in 0..3 {
        assert_eq!(h.frame().close_reason, None);
    }
    assert!(h.closes.lock().is_empty());
}

#[test]
fn test_escape_requests_close() {
    let mut h = Harness::desktop();
    h.frame();
    let frame = h.frame_with(1000.0, vec![escape_pressed()]);
    assert_eq!(frame.close_reason, Some(CloseReason::EscapeKey));
    assert_eq!(*h.closes.lock(), vec![CloseReason::EscapeKey]);
    // Visibility stays with the caller
    assert!(h.frame().rendered);
}

#[test]
fn test_tab_orientation_follows_width() {
    let mut h = Harness::desktop();
    assert_eq!(
        h.frame_with(1000.0, Vec::new()).orientation,
        Some(TabOrientation::Vertical)
    );
    assert_eq!(
        h.frame_with(480.0, Vec::new()).orientation,
        Some(TabOrientation::Horizontal)
    );
}

#[test]
fn test_extensions_filter_survives_tab_switch() {
    let catalog = StaticCatalog {
        extensions: vec![ExtensionInfo {
            id: "acme.map".to_string(),
            name: "Map".to_string(),
            publisher: "Acme".to_string(),
            version: "2.0.0".to_string(),
            description: "Tile map panel".to_string(),
        }],
    };
    let mut h = Harness::new(
        Some(SettingsTab::Extensions),
        None,
        Arc::new(StaticPlatform::desktop()),
        |c| c.with_extension_catalog(Arc::new(catalog)),
    );

    assert!(h.frame().has_control(controls::EXTENSIONS_LIST));

    h.dialog.extensions_panel_mut().set_filter("plot");
    assert!(h.frame().has_control(controls::EXTENSIONS_EMPTY));

    h.dialog.select_tab(SettingsTab::About);
    h.frame();
    h.dialog.select_tab(SettingsTab::Extensions);
    assert_eq!(h.dialog.extensions_panel().filter(), "plot");
    assert!(h.frame().has_control(controls::EXTENSIONS_EMPTY));
}

struct FailingCatalog;

impl ExtensionCatalog for FailingCatalog {
    fn installed(&self) -> anyhow::Result<Vec<ExtensionInfo>> {
        anyhow::bail!("extension directory unreadable")
    }
}

#[test]
fn test_catalog_error_is_shown() {
    let mut h = Harness::new(
        Some(SettingsTab::Extensions),
        None,
        Arc::new(StaticPlatform::desktop()),
        |c| c.with_extension_catalog(Arc::new(FailingCatalog)),
    );
    let frame = h.frame();
    assert!(frame.has_control(controls::EXTENSIONS_ERROR));
    assert!(!frame.has_control(controls::EXTENSIONS_LIST));
}

struct CustomPanel {
    shown: Arc<Mutex<u32>>,
}

impl ExtensionSettingsPanel for CustomPanel {
    fn show(&mut self, ui: &mut egui::Ui, translator: &dyn Translator) {
        *self.shown.lock() += 1;
        ui.label(translator.translate("extensions"));
    }
}

#[test]
fn test_custom_extension_panel_replaces_list() {
    let shown = Arc::new(Mutex::new(0));
    let panel = CustomPanel {
        shown: Arc::clone(&shown),
    };
    let mut h = Harness::new(
        Some(SettingsTab::Extensions),
        None,
        Arc::new(StaticPlatform::desktop()),
        |c| c.with_extension_settings(Box::new(panel)),
    );

    let frame = h.frame();
    assert!(frame.has_control(controls::EXTENSIONS_CUSTOM));
    assert!(!frame.has_control(controls::EXTENSIONS_FILTER));
    assert!(h.dialog.extensions_panel().has_custom_panel());
    assert_eq!(*shown.lock(), 1);
}

#[test]
fn test_development_only_features_hidden_in_release() {
    let features = vec![ExperimentalFeature::new(
        "experimental.memory-use-indicator",
        "memoryUseIndicator",
        "memoryUseIndicatorDescription",
    )
    .development_only()];

    let mut release = Harness::new(
        Some(SettingsTab::ExperimentalFeatures),
        None,
        Arc::new(StaticPlatform::desktop()),
        |c| c.with_experimental_features(features.clone()),
    );
    assert!(release.frame().has_control(controls::EXPERIMENTAL_EMPTY));

    let mut dev = Harness::new(
        Some(SettingsTab::ExperimentalFeatures),
        None,
        Arc::new(StaticPlatform::desktop().with_development(true)),
        |c| c.with_experimental_features(features.clone()),
    );
    assert!(dev.frame().has_control(controls::EXPERIMENTAL_LIST));
}

#[test]
fn test_about_shows_version_and_links() {
    let mut h = Harness::new(
        Some(SettingsTab::About),
        None,
        Arc::new(StaticPlatform::desktop()),
        |c| c,
    );
    let frame = h.frame();
    assert!(frame.has_control(controls::ABOUT_VERSION));
    assert!(frame.has_control(controls::ABOUT_COPY_VERSION));
    assert!(frame.has_control(controls::ABOUT_LINKS));
    assert_eq!(h.dialog.capabilities().app_version, vizdeck::VERSION);
    assert!(!h.dialog.about_panel().copied());
}

#[test]
fn test_clicking_debug_checkbox_toggles_setting() {
    let mut h = Harness::desktop();
    h.frame();

    h.click_control(controls::DEBUG_MODE);
    assert!(h.dialog.debug_mode());
    h.click_control(controls::DEBUG_MODE);
    assert!(!h.dialog.debug_mode());

    assert_eq!(
        h.config.writes_to("showDebugPanels"),
        vec![ConfigValue::Bool(true), ConfigValue::Bool(false)]
    );
}

#[test]
fn test_title_close_button_closes_once_from_every_tab() {
    for tab in SettingsTab::panels() {
        let mut h = Harness::desktop();
        h.dialog.select_tab(*tab);
        h.frame();

        let frame = h.click_control(controls::TITLE_CLOSE);
        assert_eq!(frame.close_reason, Some(CloseReason::TitleBarClose));
        h.frame();
        assert_eq!(*h.closes.lock(), vec![CloseReason::TitleBarClose], "{tab}");
    }
}

#[test]
fn test_done_button_closes_once_from_every_tab() {
    for tab in SettingsTab::panels() {
        let mut h = Harness::desktop();
        h.dialog.select_tab(*tab);
        h.frame();

        let frame = h.click_control(controls::DONE);
        assert_eq!(frame.close_reason, Some(CloseReason::DoneButton));
        h.frame();
        assert_eq!(*h.closes.lock(), vec![CloseReason::DoneButton], "{tab}");
    }
}

#[test]
fn test_clicking_backdrop_closes_as_outside_click() {
    let mut h = Harness::desktop();
    h.frame();
    let dialog = h.frame().dialog_rect.unwrap();
    let outside = egui::Rect::from_center_size(egui::pos2(5.0, 5.0), egui::vec2(2.0, 2.0));
    assert!(!dialog.intersects(outside));

    let frame = h.click(outside);
    assert_eq!(frame.close_reason, Some(CloseReason::OutsideClick));
    assert_eq!(*h.closes.lock(), vec![CloseReason::OutsideClick]);
}

#[test]
fn test_clicking_tab_shows_its_panel() {
    let mut h = Harness::desktop();
    h.frame();
    for tab in SettingsTab::panels().iter().rev() {
        h.click_control(&tab.test_id());
        let frame = h.frame();
        assert_eq!(frame.visible_panel, Some(*tab));
        assert_eq!(frame.active_test_id, tab.test_id());
    }
    assert!(h.closes.lock().is_empty());
}

#[test]
fn test_privacy_has_no_tab_button() {
    let mut h = Harness::desktop();
    h.frame();
    let frame = h.frame();
    assert!(frame.rect(&SettingsTab::Privacy.test_id()).is_none());
    for tab in SettingsTab::panels() {
        assert!(frame.rect(&tab.test_id()).is_some());
    }
}

#[test]
fn test_panel_fills_most_of_the_dialog() {
    for width in [1000.0, 480.0] {
        let mut h = Harness::desktop();
        h.frame_with(width, Vec::new());
        let frame = h.frame_with(width, Vec::new());

        let dialog = frame.dialog_rect.unwrap();
        let panel = frame.panel_rect.unwrap();
        assert!(
            panel.height() > dialog.height() * 0.5,
            "panel {panel:?} in dialog {dialog:?} at width {width}"
        );
        assert!(dialog.contains_rect(panel));
        assert!(panel.contains_rect(frame.rect(controls::DEBUG_MODE).unwrap()));
    }
}

#[test]
fn test_ros_path_draft_survives_tab_switch() {
    let key = "ros.ros_package_path";
    let mut h = Harness::desktop();
    h.frame();
    h.frame();

    h.focus_ros_path();
    h.frame();
    h.frame_with(1000.0, vec![egui::Event::Text("/opt/ros".to_string())]);
    assert_eq!(h.dialog.general_panel().ros_path_draft(), Some("/opt/ros"));
    assert!(h.config.writes_to(key).is_empty());

    h.dialog.select_tab(SettingsTab::About);
    h.frame();
    h.frame();
    h.dialog.select_tab(SettingsTab::General);
    h.frame();
    assert_eq!(h.dialog.general_panel().ros_path_draft(), Some("/opt/ros"));
    assert!(h.config.writes_to(key).is_empty());

    h.focus_ros_path();
    h.frame();
    h.frame_with(1000.0, vec![key_pressed(egui::Key::Enter)]);
    assert_eq!(
        h.config.writes_to(key),
        vec![ConfigValue::Text("/opt/ros".to_string())]
    );
    h.frame();
    assert_eq!(h.dialog.general_panel().ros_path_draft(), None);
}
