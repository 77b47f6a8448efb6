//! Experimental features tab.

use vizdeck_config::ConfigValue;

use crate::features::visible_features;
use crate::section::{hint, section_heading};
use crate::settings_dialog::{SettingsCapabilities, write_setting};
use crate::{SettingsFrame, controls};

/// The Experimental Features panel. Feature state lives in the
/// configuration capability, so the panel itself holds none.
#[derive(Debug, Default)]
pub struct ExperimentalPanel;

impl ExperimentalPanel {
    /// Show the experimental features tab content.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        caps: &SettingsCapabilities,
        frame: &mut SettingsFrame,
    ) {
        let config = caps.config.as_ref();
        let is_development = caps.platform.is_development();

        section_heading(ui, &caps.translate("experimentalFeatures"));
        hint(ui, &caps.translate("experimentalFeaturesDescription"));
        ui.add_space(8.0);

        let mut any = false;
        for feature in visible_features(&caps.experimental_features, is_development) {
            if !any {
                frame.record(controls::EXPERIMENTAL_LIST);
                any = true;
            }

            let mut enabled = config.get_bool(&feature.key).unwrap_or(false);
            let mut label = caps.translate(&feature.name_key);
            if feature.development_only {
                label = format!("{} ({})", label, caps.translate("developmentOnly"));
            }
            if ui.checkbox(&mut enabled, label).changed() {
                write_setting(config, &feature.key, ConfigValue::Bool(enabled));
            }
            ui.indent(("experimental_feature", &feature.key), |ui| {
                hint(ui, &caps.translate(&feature.description_key));
            });
            ui.add_space(6.0);
        }

        if !any {
            frame.record(controls::EXPERIMENTAL_EMPTY);
            hint(ui, &caps.translate("noExperimentalFeatures"));
        }
    }
}
