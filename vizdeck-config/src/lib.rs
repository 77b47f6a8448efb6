//! Configuration system for the vizdeck visualization application.
//!
//! This crate provides the configuration capability consumed by the
//! settings dialog. It includes:
//!
//! - `AppConfiguration`, the key-value capability trait
//! - `ConfigValue`, the value type stored under each key
//! - `ConfigWrite`, the completion handle returned by every write
//! - `YamlConfigStore`, the file-backed store used by the desktop app
//! - `MemoryConfigStore`, a volatile store for ephemeral sessions and tests
//! - Typed enums for the general application preferences

pub mod error;
pub mod keys;
pub mod memory;
pub mod persistence;
pub mod store;
pub mod types;
pub mod value;

pub use error::ConfigError;
pub use keys::AppSetting;
pub use memory::MemoryConfigStore;
pub use persistence::YamlConfigStore;
pub use store::{AppConfiguration, ConfigWrite, WriteCompletion};
pub use types::{
    ColorScheme, DEFAULT_MESSAGE_RATE, Language, LaunchPreference, MESSAGE_RATES, TimeFormat,
};
pub use value::ConfigValue;
