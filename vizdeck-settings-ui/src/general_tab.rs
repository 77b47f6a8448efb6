//! General settings tab.
//!
//! Contains:
//! - Color scheme, timestamp format, message rate and language
//! - Automatic updates (desktop builds)
//! - Launch preference / "open links in" (browser builds)
//! - ROS package path (desktop builds)
//! - Advanced: debug mode

use vizdeck_config::{
    AppConfiguration, AppSetting, ColorScheme, ConfigValue, DEFAULT_MESSAGE_RATE, Language,
    LaunchPreference, MESSAGE_RATES, TimeFormat,
};

use crate::section::{
    COMBO_WIDTH, INPUT_WIDTH, hint, section_heading, setting_row, subsection_label,
};
use crate::settings_dialog::{SettingsCapabilities, write_setting};
use crate::{SettingsFrame, controls};

/// Write the debug-mode flag.
///
/// Fire-and-forget: the outcome of the write is not observed.
pub fn set_debug_mode(config: &dyn AppConfiguration, enabled: bool) {
    write_setting(
        config,
        AppSetting::ShowDebugPanels.key(),
        ConfigValue::Bool(enabled),
    );
}

/// Current debug-mode flag (off when unset).
pub fn debug_mode(config: &dyn AppConfiguration) -> bool {
    config
        .get_bool(AppSetting::ShowDebugPanels.key())
        .unwrap_or(false)
}

/// Widget id of the ROS package path field.
pub fn ros_package_path_id() -> egui::Id {
    egui::Id::new("settings_general_ros_package_path")
}

/// State of the General panel kept while other tabs are shown.
#[derive(Debug, Default)]
pub struct GeneralPanel {
    /// ROS package path being typed; committed when the field loses focus
    ros_path_draft: Option<String>,
}

impl GeneralPanel {
    /// Show the general tab content.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        caps: &SettingsCapabilities,
        frame: &mut SettingsFrame,
    ) {
        let config = caps.config.as_ref();
        let is_desktop = caps.platform.is_desktop();

        section_heading(ui, &caps.translate("general"));

        frame.record(controls::COLOR_SCHEME);
        show_color_scheme(ui, caps, config);

        frame.record(controls::TIME_FORMAT);
        show_time_format(ui, caps, config);

        frame.record(controls::MESSAGE_RATE);
        show_message_rate(ui, caps, config);

        frame.record(controls::LANGUAGE);
        show_language(ui, caps, config);

        if is_desktop {
            frame.record(controls::AUTO_UPDATE);
            show_auto_update(ui, caps, config);
        } else {
            frame.record(controls::LAUNCH_DEFAULT);
            show_launch_default(ui, caps, config);
        }

        if is_desktop {
            frame.record(controls::ROS_PACKAGE_PATH);
            let rect = self.show_ros_package_path(ui, caps, config);
            frame.record_rect(controls::ROS_PACKAGE_PATH, rect);
        }

        subsection_label(ui, &caps.translate("advanced"));
        frame.record(controls::DEBUG_MODE);
        let mut enabled = debug_mode(config);
        let response = ui.checkbox(&mut enabled, caps.translate("debugModeDescription"));
        frame.record_rect(controls::DEBUG_MODE, response.rect);
        if response.changed() {
            set_debug_mode(config, enabled);
        }
    }

    /// Uncommitted ROS package path, if the user is editing one.
    pub fn ros_path_draft(&self) -> Option<&str> {
        self.ros_path_draft.as_deref()
    }

    fn show_ros_package_path(
        &mut self,
        ui: &mut egui::Ui,
        caps: &SettingsCapabilities,
        config: &dyn AppConfiguration,
    ) -> egui::Rect {
        let key = AppSetting::RosPackagePath.key();
        let stored = config.get_string(key).unwrap_or_default();
        let mut text = self.ros_path_draft.take().unwrap_or_else(|| stored.clone());

        let response = setting_row(ui, &caps.translate("rosPackagePath"), |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut text)
                    .id(ros_package_path_id())
                    .desired_width(INPUT_WIDTH)
                    .hint_text(caps.translate("rosPackagePathHint")),
            )
        })
        .inner;

        // Unsaved edits stay as a draft until the field loses focus.
        if response.lost_focus() {
            if text != stored {
                write_setting(config, key, ConfigValue::Text(text));
            }
        } else if response.has_focus() || text != stored {
            self.ros_path_draft = Some(text);
        }

        response.rect
    }
}

fn show_color_scheme(
    ui: &mut egui::Ui,
    caps: &SettingsCapabilities,
    config: &dyn AppConfiguration,
) {
    let key = AppSetting::ColorScheme.key();
    let current = config
        .get_string(key)
        .and_then(|s| ColorScheme::parse(&s))
        .unwrap_or_default();

    setting_row(ui, &caps.translate("colorScheme"), |ui| {
        for scheme in ColorScheme::all() {
            if ui
                .selectable_label(current == *scheme, caps.translate(scheme.label_key()))
                .clicked()
                && current != *scheme
            {
                write_setting(config, key, scheme.as_str().into());
            }
        }
    });
}

fn show_time_format(
    ui: &mut egui::Ui,
    caps: &SettingsCapabilities,
    config: &dyn AppConfiguration,
) {
    let key = AppSetting::TimeFormat.key();
    let current = config
        .get_string(key)
        .and_then(|s| TimeFormat::parse(&s))
        .unwrap_or_default();

    setting_row(ui, &caps.translate("timeFormat"), |ui| {
        egui::ComboBox::from_id_salt("general_time_format")
            .width(COMBO_WIDTH)
            .selected_text(caps.translate(current.label_key()))
            .show_ui(ui, |ui| {
                for format in TimeFormat::all() {
                    if ui
                        .selectable_label(current == *format, caps.translate(format.label_key()))
                        .clicked()
                        && current != *format
                    {
                        write_setting(config, key, format.as_str().into());
                    }
                }
            });
    });
}

fn show_message_rate(
    ui: &mut egui::Ui,
    caps: &SettingsCapabilities,
    config: &dyn AppConfiguration,
) {
    let key = AppSetting::MessageRate.key();
    let current = config.get_number(key).unwrap_or(DEFAULT_MESSAGE_RATE);

    setting_row(ui, &caps.translate("messageRate"), |ui| {
        egui::ComboBox::from_id_salt("general_message_rate")
            .width(COMBO_WIDTH)
            .selected_text(format!("{current} Hz"))
            .show_ui(ui, |ui| {
                for rate in MESSAGE_RATES {
                    let selected = (current - *rate).abs() < f64::EPSILON;
                    if ui.selectable_label(selected, format!("{rate} Hz")).clicked() && !selected {
                        write_setting(config, key, ConfigValue::Number(*rate));
                    }
                }
            })
            .response
            .on_hover_text(caps.translate("messageRateHint"));
    });
}

fn show_language(
    ui: &mut egui::Ui,
    caps: &SettingsCapabilities,
    config: &dyn AppConfiguration,
) {
    let key = AppSetting::Language.key();
    let current = config
        .get_string(key)
        .and_then(|s| Language::parse(&s))
        .unwrap_or_default();

    setting_row(ui, &caps.translate("language"), |ui| {
        egui::ComboBox::from_id_salt("general_language")
            .width(COMBO_WIDTH)
            .selected_text(current.native_name())
            .show_ui(ui, |ui| {
                for lang in Language::all() {
                    if ui
                        .selectable_label(current == *lang, lang.native_name())
                        .clicked()
                        && current != *lang
                    {
                        write_setting(config, key, lang.as_str().into());
                    }
                }
            });
    });
}

fn show_auto_update(
    ui: &mut egui::Ui,
    caps: &SettingsCapabilities,
    config: &dyn AppConfiguration,
) {
    let key = AppSetting::UpdatesEnabled.key();
    let mut enabled = config.get_bool(key).unwrap_or(true);

    ui.add_space(4.0);
    if ui
        .checkbox(&mut enabled, caps.translate("automaticUpdates"))
        .changed()
    {
        write_setting(config, key, ConfigValue::Bool(enabled));
    }
    hint(ui, &caps.translate("automaticUpdatesDescription"));
}

fn show_launch_default(
    ui: &mut egui::Ui,
    caps: &SettingsCapabilities,
    config: &dyn AppConfiguration,
) {
    let key = AppSetting::LaunchPreference.key();
    let current = config
        .get_string(key)
        .and_then(|s| LaunchPreference::parse(&s))
        .unwrap_or_default();

    setting_row(ui, &caps.translate("openLinksIn"), |ui| {
        for pref in LaunchPreference::all() {
            if ui
                .selectable_label(current == *pref, caps.translate(pref.label_key()))
                .clicked()
                && current != *pref
            {
                write_setting(config, key, pref.as_str().into());
            }
        }
    });
}
