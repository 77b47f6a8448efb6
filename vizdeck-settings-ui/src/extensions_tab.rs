//! Extensions settings tab.
//!
//! Shows the host-supplied extension settings panel when there is one,
//! otherwise a searchable list of installed extensions.

use crate::section::{INPUT_WIDTH, hint, section_heading};
use crate::settings_dialog::SettingsCapabilities;
use crate::traits::{ExtensionInfo, ExtensionSettingsPanel};
use crate::{SettingsFrame, controls};

/// State of the Extensions panel kept while other tabs are shown.
#[derive(Default)]
pub struct ExtensionsPanel {
    custom: Option<Box<dyn ExtensionSettingsPanel>>,
    filter: String,
}

impl ExtensionsPanel {
    pub fn new(custom: Option<Box<dyn ExtensionSettingsPanel>>) -> Self {
        Self {
            custom,
            filter: String::new(),
        }
    }

    /// Whether a host-supplied panel replaces the default list.
    pub fn has_custom_panel(&self) -> bool {
        self.custom.is_some()
    }

    /// Current search text of the default list.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Show the extensions tab content.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        caps: &SettingsCapabilities,
        frame: &mut SettingsFrame,
    ) {
        if let Some(custom) = self.custom.as_mut() {
            frame.record(controls::EXTENSIONS_CUSTOM);
            custom.show(ui, caps.translator.as_ref());
            return;
        }

        section_heading(ui, &caps.translate("extensions"));

        frame.record(controls::EXTENSIONS_FILTER);
        ui.add(
            egui::TextEdit::singleline(&mut self.filter)
                .desired_width(INPUT_WIDTH)
                .hint_text(caps.translate("searchExtensions")),
        );
        ui.add_space(8.0);

        let installed = match caps.extension_catalog.as_ref().map(|c| c.installed()) {
            None => Vec::new(),
            Some(Ok(list)) => list,
            Some(Err(e)) => {
                log::warn!("Failed to list installed extensions: {:#}", e);
                frame.record(controls::EXTENSIONS_ERROR);
                ui.colored_label(
                    egui::Color32::from_rgb(220, 90, 90),
                    caps.translate("extensionsLoadFailed"),
                );
                return;
            }
        };

        if installed.is_empty() {
            frame.record(controls::EXTENSIONS_EMPTY);
            hint(ui, &caps.translate("noExtensionsInstalled"));
            return;
        }

        let matches = filter_extensions(&installed, &self.filter);
        if matches.is_empty() {
            frame.record(controls::EXTENSIONS_EMPTY);
            hint(ui, &caps.translate("noExtensionsFound"));
            return;
        }

        frame.record(controls::EXTENSIONS_LIST);
        for ext in matches {
            show_extension(ui, ext);
        }
    }
}

fn show_extension(ui: &mut egui::Ui, ext: &ExtensionInfo) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&ext.name).strong());
            ui.label(
                egui::RichText::new(format!("v{}", ext.version))
                    .small()
                    .color(egui::Color32::GRAY),
            );
        });
        hint(ui, &ext.publisher);
        if !ext.description.is_empty() {
            ui.label(ext.description.as_str());
        }
    });
    ui.add_space(4.0);
}

/// Extensions whose id, name, publisher or description contains `query`
/// (case-insensitive). An empty query matches everything.
pub fn filter_extensions<'a>(
    extensions: &'a [ExtensionInfo],
    query: &str,
) -> Vec<&'a ExtensionInfo> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return extensions.iter().collect();
    }
    extensions
        .iter()
        .filter(|ext| {
            [&ext.id, &ext.name, &ext.publisher, &ext.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(id: &str, name: &str, publisher: &str) -> ExtensionInfo {
        ExtensionInfo {
            id: id.to_string(),
            name: name.to_string(),
            publisher: publisher.to_string(),
            version: "1.0.0".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        let list = vec![ext("a.map", "Map", "Acme"), ext("b.plot", "Plot", "Beta")];
        assert_eq!(filter_extensions(&list, "  ").len(), 2);
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let list = vec![ext("a.map", "Map", "Acme"), ext("b.plot", "Plot", "Beta")];
        let by_name = filter_extensions(&list, "PLOT");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "b.plot");
        let by_publisher = filter_extensions(&list, "acme");
        assert_eq!(by_publisher[0].id, "a.map");
        assert!(filter_extensions(&list, "gauge").is_empty());
    }
}
