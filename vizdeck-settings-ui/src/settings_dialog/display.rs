//! Display methods for SettingsDialog.
//
//! Contains: show(), show_body() and show_active_panel().

use egui::{Align, Context, Id, Layout, Modal, vec2};

use crate::tab::{self, SettingsTab, TabOrientation};
use crate::{CloseReason, SettingsFrame, controls};

use super::SettingsDialog;

/// Width of the vertical tab list
const SIDEBAR_WIDTH: f32 = 160.0;

/// Height reserved for the footer (separator + button row)
const FOOTER_HEIGHT: f32 = 40.0;

impl SettingsDialog {
    /// Render one frame of the dialog.
    ///
    /// `open` is owned by the caller; when false nothing is drawn. Close
    /// requests made this frame have already been passed to the close
    /// handler when this returns.
    pub fn show(&mut self, ctx: &Context, open: bool) -> SettingsFrame {
        let mut frame = SettingsFrame {
            active_test_id: self.active_test_id(),
            ..Default::default()
        };
        if !open {
            return frame;
        }
        frame.rendered = true;

        let viewport = ctx.input(|i| i.viewport_rect());
        let orientation = TabOrientation::for_width(viewport.width());
        frame.orientation = Some(orientation);

        let width = (viewport.width() * 0.9).clamp(320.0, 820.0);
        let height = (viewport.height() * 0.85).clamp(360.0, 640.0);

        let mut close_reason = None;

        let modal = Modal::new(Id::new("settings_dialog")).show(ctx, |ui| {
            ui.set_width(width);
            ui.set_min_height(height);

            // Title bar
            ui.horizontal(|ui| {
                ui.heading(self.caps.translate("settings"));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    frame.record(controls::TITLE_CLOSE);
                    let response = ui
                        .button("✕")
                        .on_hover_text(self.caps.translate("close"));
                    frame.record_rect(controls::TITLE_CLOSE, response.rect);
                    if response.clicked() {
                        close_reason = Some(CloseReason::TitleBarClose);
                    }
                });
            });
            ui.separator();

            // min_rect already spans the full min height; measure from the cursor
            let title_height = ui.cursor().min.y - ui.max_rect().min.y;
            let body_height = (height - title_height - FOOTER_HEIGHT).max(120.0);
            self.show_body(ui, orientation, body_height, &mut frame);

            // Footer
            ui.separator();
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                frame.record(controls::DONE);
                let response = ui.button(self.caps.translate("done"));
                frame.record_rect(controls::DONE, response.rect);
                if response.clicked() {
                    close_reason = Some(CloseReason::DoneButton);
                }
            });
        });
        frame.dialog_rect = Some(modal.response.rect);

        if close_reason.is_none() && modal.should_close() {
            close_reason = Some(if modal.backdrop_response.clicked() {
                CloseReason::OutsideClick
            } else {
                CloseReason::EscapeKey
            });
        }

        if let Some(reason) = close_reason {
            frame.close_reason = Some(reason);
            self.request_close(reason);
        }

        frame.active_test_id = self.active_test_id();
        frame
    }

    /// Tab list plus the active panel, laid out for `orientation`.
    fn show_body(
        &mut self,
        ui: &mut egui::Ui,
        orientation: TabOrientation,
        body_height: f32,
        frame: &mut SettingsFrame,
    ) {
        frame.record(controls::TAB_LIST);

        match orientation {
            TabOrientation::Vertical => {
                ui.allocate_ui_with_layout(
                    vec2(ui.available_width(), body_height),
                    Layout::left_to_right(Align::Min),
                    |ui| {
                        ui.allocate_ui_with_layout(
                            vec2(SIDEBAR_WIDTH, body_height),
                            Layout::top_down(Align::Min),
                            |ui| {
                                let clicked = tab::show(
                                    ui,
                                    self.active_tab,
                                    orientation,
                                    self.caps.translator.as_ref(),
                                    frame,
                                );
                                if let Some(tab) = clicked {
                                    self.select_tab(tab);
                                }
                            },
                        );

                        ui.separator();

                        ui.allocate_ui_with_layout(
                            vec2(ui.available_width(), body_height),
                            Layout::top_down(Align::Min),
                            |ui| self.show_active_panel(ui, body_height, frame),
                        );
                    },
                );
            }
            TabOrientation::Horizontal => {
                let strip_top = ui.cursor().min.y;
                let clicked = tab::show(
                    ui,
                    self.active_tab,
                    orientation,
                    self.caps.translator.as_ref(),
                    frame,
                );
                if let Some(tab) = clicked {
                    self.select_tab(tab);
                }
                ui.separator();
                let strip_height = ui.cursor().min.y - strip_top;
                let panel_height = (body_height - strip_height).max(120.0);
                self.show_active_panel(ui, panel_height, frame);
            }
        }
    }

    /// Show the content for the active tab. Other panels are not drawn but
    /// keep their state.
    fn show_active_panel(
        &mut self,
        ui: &mut egui::Ui,
        max_height: f32,
        frame: &mut SettingsFrame,
    ) {
        // select_tab and resolve_initial_tab never leave a panel-less tab active.
        debug_assert!(self.active_tab.has_panel());
        frame.visible_panel = Some(self.active_tab);

        let output = egui::ScrollArea::vertical()
            .id_salt(("settings_panel", self.active_tab))
            .max_height(max_height)
            .auto_shrink([false, false])
            .show(ui, |ui| match self.active_tab {
                SettingsTab::General | SettingsTab::Privacy => {
                    self.general.show(ui, &self.caps, frame);
                }
                SettingsTab::Extensions => {
                    self.extensions.show(ui, &self.caps, frame);
                }
                SettingsTab::ExperimentalFeatures => {
                    self.experimental.show(ui, &self.caps, frame);
                }
                SettingsTab::About => {
                    self.about.show(ui, &self.caps, frame);
                }
            });
        frame.panel_rect = Some(output.inner_rect);
    }
}
