//! Built-in English strings.

use crate::traits::Translator;

/// Translator backed by the built-in English table.
///
/// Unknown keys come back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTranslator;

impl Translator for EnglishTranslator {
    fn translate(&self, key: &str) -> String {
        match english(key) {
            Some(text) => text.to_string(),
            None => {
                log::debug!("No English string for key '{}'", key);
                key.to_string()
            }
        }
    }
}

/// Every key the dialog translates.
pub const KEYS: &[&str] = &[
    "settings",
    "general",
    "privacy",
    "extensions",
    "experimentalFeatures",
    "about",
    "done",
    "close",
    "colorScheme",
    "dark",
    "light",
    "followSystem",
    "timeFormat",
    "timeFormatSeconds",
    "timeFormatTimeOfDay",
    "messageRate",
    "messageRateHint",
    "language",
    "automaticUpdates",
    "automaticUpdatesDescription",
    "openLinksIn",
    "webApp",
    "desktopApp",
    "askEachTime",
    "rosPackagePath",
    "rosPackagePathHint",
    "advanced",
    "debugModeDescription",
    "searchExtensions",
    "noExtensionsInstalled",
    "noExtensionsFound",
    "extensionsLoadFailed",
    "experimentalFeaturesDescription",
    "noExperimentalFeatures",
    "developmentOnly",
    "memoryUseIndicator",
    "memoryUseIndicatorDescription",
    "messagePrefetch",
    "messagePrefetchDescription",
    "version",
    "copy",
    "copied",
    "resources",
    "products",
    "contact",
    "legal",
    "license",
];

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "settings" => "Settings",
        "general" => "General",
        "privacy" => "Privacy",
        "extensions" => "Extensions",
        "experimentalFeatures" => "Experimental features",
        "about" => "About",
        "done" => "Done",
        "close" => "Close",
        "colorScheme" => "Color scheme",
        "dark" => "Dark",
        "light" => "Light",
        "followSystem" => "Follow system",
        "timeFormat" => "Timestamp format",
        "timeFormatSeconds" => "Seconds",
        "timeFormatTimeOfDay" => "Local time",
        "messageRate" => "Message rate",
        "messageRateHint" => "Rate at which panels receive new messages during playback",
        "language" => "Language",
        "automaticUpdates" => "Automatic desktop app updates",
        "automaticUpdatesDescription" => "Download and install updates in the background",
        "openLinksIn" => "Open links in",
        "webApp" => "Web app",
        "desktopApp" => "Desktop app",
        "askEachTime" => "Ask each time",
        "rosPackagePath" => "ROS_PACKAGE_PATH",
        "rosPackagePathHint" => "Colon-separated list of package directories",
        "advanced" => "Advanced",
        "debugModeDescription" => "Enable panels and features for debugging the application",
        "searchExtensions" => "Search extensions",
        "noExtensionsInstalled" => "No extensions installed",
        "noExtensionsFound" => "No extensions match your search",
        "extensionsLoadFailed" => "Failed to load installed extensions",
        "experimentalFeaturesDescription" => {
            "These features are unstable and not recommended for daily use."
        }
        "noExperimentalFeatures" => "No experimental features are available in this build.",
        "developmentOnly" => "development only",
        "memoryUseIndicator" => "Memory use indicator",
        "memoryUseIndicatorDescription" => "Show the application memory use in the sidebar.",
        "messagePrefetch" => "Message prefetching",
        "messagePrefetchDescription" => {
            "Load messages ahead of the playback position to reduce stalls."
        }
        "version" => "Version",
        "copy" => "Copy",
        "copied" => "Copied",
        "resources" => "Resources",
        "products" => "Products",
        "contact" => "Contact",
        "legal" => "Legal",
        "license" => "License",
        _ => return None,
    };
    Some(text)
}
