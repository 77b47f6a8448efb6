//! Well-known configuration keys.

/// Application settings edited from the settings dialog.
///
/// Experimental feature flags use their own keys and are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppSetting {
    ColorScheme,
    TimeFormat,
    MessageRate,
    Language,
    UpdatesEnabled,
    LaunchPreference,
    RosPackagePath,
    ShowDebugPanels,
}

impl AppSetting {
    /// The key under which this setting is stored.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ColorScheme => "colorScheme",
            Self::TimeFormat => "timeFormat",
            Self::MessageRate => "messageRate",
            Self::Language => "language",
            Self::UpdatesEnabled => "updates.enabled",
            Self::LaunchPreference => "launchDefault",
            Self::RosPackagePath => "ros.ros_package_path",
            Self::ShowDebugPanels => "showDebugPanels",
        }
    }

    /// All known settings.
    pub fn all() -> &'static [Self] {
        &[
            Self::ColorScheme,
            Self::TimeFormat,
            Self::MessageRate,
            Self::Language,
            Self::UpdatesEnabled,
            Self::LaunchPreference,
            Self::RosPackagePath,
            Self::ShowDebugPanels,
        ]
    }
}

impl AsRef<str> for AppSetting {
    fn as_ref(&self) -> &str {
        self.key()
    }
}
