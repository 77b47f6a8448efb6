//! Tab selector for the settings dialog.
//!
//! Wide viewports get a vertical list on the left of the dialog; narrow
//! ones get a horizontal strip above the content.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SettingsFrame;
use crate::traits::Translator;

/// Viewport width (logical points) at which the tab list turns vertical.
pub const VERTICAL_TABS_MIN_WIDTH: f32 = 600.0;

/// Section identifiers of the settings dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingsTab {
    #[default]
    General,
    /// Declared for workspace-state compatibility; has no panel.
    Privacy,
    Extensions,
    ExperimentalFeatures,
    About,
}

impl SettingsTab {
    /// Stable kebab-case name, used in the settings file and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Privacy => "privacy",
            Self::Extensions => "extensions",
            Self::ExperimentalFeatures => "experimental-features",
            Self::About => "about",
        }
    }

    /// Translation key for the tab label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Privacy => "privacy",
            Self::Extensions => "extensions",
            Self::ExperimentalFeatures => "experimentalFeatures",
            Self::About => "about",
        }
    }

    /// Identifier exposed for automated verification of the active tab.
    pub fn test_id(&self) -> String {
        format!("settings-tab-{}", self.as_str())
    }

    /// Whether this tab has a section panel.
    pub fn has_panel(&self) -> bool {
        !matches!(self, Self::Privacy)
    }

    /// Tabs with a section panel, in display order.
    pub fn panels() -> &'static [Self] {
        &[
            Self::General,
            Self::Extensions,
            Self::ExperimentalFeatures,
            Self::About,
        ]
    }

    /// Every declared tab identifier.
    pub fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Privacy,
            Self::Extensions,
            Self::ExperimentalFeatures,
            Self::About,
        ]
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tab name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = SettingsTab::all().iter().map(|t| t.as_str()).collect();
        write!(
            f,
            "unknown settings tab '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for SettingsTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Layout direction of the tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOrientation {
    Vertical,
    Horizontal,
}

impl TabOrientation {
    /// Orientation for a viewport of the given width.
    pub fn for_width(width: f32) -> Self {
        if width >= VERTICAL_TABS_MIN_WIDTH {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}

/// Render the tab list.
///
/// Returns the tab the user clicked this frame, if any. Only tabs with a
/// panel are offered. Each button's rect is recorded under the tab's test id.
pub fn show(
    ui: &mut egui::Ui,
    current_tab: SettingsTab,
    orientation: TabOrientation,
    translator: &dyn Translator,
    frame: &mut SettingsFrame,
) -> Option<SettingsTab> {
    let mut clicked = None;

    match orientation {
        TabOrientation::Vertical => {
            ui.add_space(8.0);
            for tab in SettingsTab::panels() {
                let response =
                    tab_button(ui, *tab, current_tab == *tab, translator, [150.0, 30.0]);
                frame.record_rect(tab.test_id(), response.rect);
                if response.clicked() {
                    clicked = Some(*tab);
                }
            }
        }
        TabOrientation::Horizontal => {
            egui::ScrollArea::horizontal()
                .id_salt("settings_tab_strip")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for tab in SettingsTab::panels() {
                            let label = translator.translate(tab.label_key());
                            let response = ui.selectable_label(current_tab == *tab, label);
                            frame.record_rect(tab.test_id(), response.rect);
                            if response.clicked() {
                                clicked = Some(*tab);
                            }
                        }
                    });
                });
        }
    }

    clicked
}

fn tab_button(
    ui: &mut egui::Ui,
    tab: SettingsTab,
    is_selected: bool,
    translator: &dyn Translator,
    size: [f32; 2],
) -> egui::Response {
    let text_color = if is_selected {
        egui::Color32::from_rgb(255, 255, 255)
    } else {
        egui::Color32::from_rgb(180, 180, 180)
    };

    let bg_color = if is_selected {
        egui::Color32::from_rgb(60, 60, 70)
    } else {
        egui::Color32::TRANSPARENT
    };

    ui.add_sized(
        size,
        egui::Button::new(
            egui::RichText::new(translator.translate(tab.label_key())).color(text_color),
        )
        .fill(bg_color)
        .stroke(if is_selected {
            egui::Stroke::new(1.0, egui::Color32::from_rgb(100, 100, 120))
        } else {
            egui::Stroke::NONE
        }),
    )
}
