//! About tab: application name and version, plus outbound links.

use crate::section::{hint, section_heading, section_spacing, subsection_label};
use crate::settings_dialog::SettingsCapabilities;
use crate::{SettingsFrame, controls};

/// An outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutLink {
    /// Translation key of the link text
    pub label_key: &'static str,
    pub url: &'static str,
}

/// A titled group of links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkCategory {
    /// Translation key of the category title
    pub title_key: &'static str,
    pub links: &'static [AboutLink],
}

/// Link categories in display order. Only Legal is populated.
pub const LINK_CATEGORIES: &[LinkCategory] = &[
    LinkCategory {
        title_key: "resources",
        links: &[],
    },
    LinkCategory {
        title_key: "products",
        links: &[],
    },
    LinkCategory {
        title_key: "contact",
        links: &[],
    },
    LinkCategory {
        title_key: "legal",
        links: &[AboutLink {
            label_key: "license",
            url: "https://opensource.org/license/mit",
        }],
    },
];

/// State of the About panel kept while other tabs are shown.
#[derive(Debug, Default)]
pub struct AboutPanel {
    copied: bool,
}

impl AboutPanel {
    /// Whether the version string has been copied from this dialog.
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Copy the version string to the clipboard.
    pub fn copy_version(&mut self, ctx: &egui::Context, version: &str) {
        ctx.copy_text(version.to_string());
        self.copied = true;
        log::info!("Copied version {} to clipboard", version);
    }

    /// Show the about tab content.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        caps: &SettingsCapabilities,
        frame: &mut SettingsFrame,
    ) {
        section_heading(ui, &caps.app_name);

        frame.record(controls::ABOUT_VERSION);
        ui.horizontal(|ui| {
            ui.label(format!("{} {}", caps.translate("version"), caps.app_version));

            frame.record(controls::ABOUT_COPY_VERSION);
            let button_text = if self.copied {
                caps.translate("copied")
            } else {
                caps.translate("copy")
            };
            if ui
                .small_button(button_text)
                .on_hover_text(caps.app_version.as_str())
                .clicked()
            {
                self.copy_version(ui.ctx(), &caps.app_version);
            }
        });

        section_spacing(ui);

        frame.record(controls::ABOUT_LINKS);
        for category in LINK_CATEGORIES {
            subsection_label(ui, &caps.translate(category.title_key));
            for link in category.links {
                if ui
                    .link(caps.translate(link.label_key))
                    .on_hover_text(link.url)
                    .clicked()
                {
                    open_url(link.url);
                }
            }
        }
        ui.add_space(4.0);
        hint(ui, &format!("{} {}", caps.app_name, caps.app_version));
    }
}

fn open_url(url: &str) {
    log::info!("Opening {}", url);
    if let Err(e) = open::that(url) {
        log::error!("Failed to open {}: {}", url, e);
    }
}
