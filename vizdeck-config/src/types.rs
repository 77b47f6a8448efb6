//! Typed values for the general application preferences.
//!
//! Each enum round-trips through the string stored in the settings file
//! (`as_str` / `parse`) and names the translation key of its label.

/// Message rates (Hz) offered by the playback rate selector.
pub const MESSAGE_RATES: &[f64] = &[1.0, 3.0, 5.0, 10.0, 15.0, 20.0, 30.0, 60.0];

/// Default playback message rate (Hz).
pub const DEFAULT_MESSAGE_RATE: f64 = 60.0;

/// UI color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    Dark,
    Light,
    /// Follow the operating system preference
    #[default]
    System,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
            ColorScheme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.as_str() == value)
    }

    /// Translation key for the UI label
    pub fn label_key(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
            ColorScheme::System => "followSystem",
        }
    }

    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light, ColorScheme::System]
    }
}

/// Timestamp display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// Seconds since epoch
    Seconds,
    /// Local wall-clock time
    #[default]
    TimeOfDay,
}

impl TimeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFormat::Seconds => "SEC",
            TimeFormat::TimeOfDay => "TOD",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.as_str() == value)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TimeFormat::Seconds => "timeFormatSeconds",
            TimeFormat::TimeOfDay => "timeFormatTimeOfDay",
        }
    }

    pub fn all() -> &'static [TimeFormat] {
        &[TimeFormat::Seconds, TimeFormat::TimeOfDay]
    }
}

/// Where links to the application should open when running in a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchPreference {
    Web,
    Desktop,
    /// Ask each time
    #[default]
    Unknown,
}

impl LaunchPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchPreference::Web => "web",
            LaunchPreference::Desktop => "desktop",
            LaunchPreference::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.as_str() == value)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            LaunchPreference::Web => "webApp",
            LaunchPreference::Desktop => "desktopApp",
            LaunchPreference::Unknown => "askEachTime",
        }
    }

    pub fn all() -> &'static [LaunchPreference] {
        &[
            LaunchPreference::Web,
            LaunchPreference::Desktop,
            LaunchPreference::Unknown,
        ]
    }
}

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
    Japanese,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.as_str() == value)
    }

    /// Native name, shown untranslated so users can always find their language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
            Language::Japanese => "日本語",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese, Language::Japanese]
    }
}
