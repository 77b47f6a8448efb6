//! Layout helpers shared by the section panels.

/// Standard width for text input controls
pub const INPUT_WIDTH: f32 = 300.0;

/// Standard width for combo boxes
pub const COMBO_WIDTH: f32 = 200.0;

/// Width of the label column in setting rows
pub const LABEL_WIDTH: f32 = 160.0;

/// Helper to show a section heading with consistent styling.
pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.heading(title);
    ui.add_space(4.0);
}

/// Helper to show a sub-section label with consistent styling.
pub fn subsection_label(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(title).strong());
    ui.add_space(4.0);
}

/// Helper to add spacing after a section.
pub fn section_spacing(ui: &mut egui::Ui) {
    ui.add_space(12.0);
}

/// Small grey explanatory text under a control.
pub fn hint(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .small()
            .color(egui::Color32::GRAY),
    );
}

/// A labelled row: fixed-width label on the left, control on the right.
pub fn setting_row<R>(
    ui: &mut egui::Ui,
    label: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    ui.horizontal(|ui| {
        ui.add_sized(
            [LABEL_WIDTH, 20.0],
            egui::Label::new(label).wrap_mode(egui::TextWrapMode::Truncate),
        );
        add_contents(ui)
    })
}
