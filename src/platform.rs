//! Platform answers for the native host.

use vizdeck_settings_ui::Platform;

/// Platform of the running binary.
///
/// `--web` makes the host present itself as the browser-hosted build so the
/// web-only controls can be exercised from the desktop binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativePlatform {
    web: bool,
}

impl NativePlatform {
    pub fn new(web: bool) -> Self {
        Self { web }
    }
}

impl Platform for NativePlatform {
    fn is_desktop(&self) -> bool {
        !self.web
    }

    fn is_development(&self) -> bool {
        cfg!(debug_assertions)
    }
}
