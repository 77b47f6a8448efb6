//! Log bridge for vizdeck.
//!
//! Routes every `log::info!()` / `log::debug!()` etc. from all workspace
//! crates to a debug log file, `/tmp/vizdeck_debug.log` on Unix/macOS or
//! `%TEMP%\vizdeck_debug.log` on Windows. When `RUST_LOG` is set, lines are
//! mirrored to stderr as well.
//!
//! Level precedence: `--log-level` CLI flag, then `RUST_LOG`, then off.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Crates that are far too chatty below `Warn`.
const NOISY_TARGETS: &[&str] = &["wgpu", "naga", "egui_wgpu", "winit", "calloop"];

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let path = PathBuf::from("/tmp/vizdeck_debug.log");
    #[cfg(not(unix))]
    let path = std::env::temp_dir().join("vizdeck_debug.log");
    path
}

struct LogBridge {
    level: LevelFilter,
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl LogBridge {
    fn target_enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        let noisy = NOISY_TARGETS
            .iter()
            .any(|prefix| metadata.target().starts_with(prefix));
        !noisy || metadata.level() <= log::Level::Warn
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.target_enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{}", line);
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Most verbose level named in a `RUST_LOG` value.
///
/// Accepts plain levels (`debug`) and per-target directives
/// (`vizdeck=debug,wgpu=warn`); unparseable directives are skipped.
pub fn parse_rust_log(value: &str) -> Option<LevelFilter> {
    value
        .split(',')
        .filter_map(|directive| {
            let level = directive.rsplit('=').next()?.trim();
            level.parse::<LevelFilter>().ok()
        })
        .max()
}

/// Effective level from the CLI flag and the `RUST_LOG` value.
pub fn resolve_level(cli_level: Option<LevelFilter>, rust_log: Option<&str>) -> LevelFilter {
    cli_level
        .or_else(|| rust_log.and_then(parse_rust_log))
        .unwrap_or(LevelFilter::Off)
}

fn open_log_file(level: LevelFilter) -> Option<File> {
    if level == LevelFilter::Off {
        return None;
    }

    // Silently run without a file if it can't be opened
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(log_path())
        .ok()?;
    let rule = "=".repeat(80);
    let _ = writeln!(
        file,
        "{}\nvizdeck {} debug session started at {} (level={})\n{}",
        rule,
        crate::VERSION,
        timestamp(),
        level,
        rule
    );
    Some(file)
}

/// Install the log bridge as the global logger.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = resolve_level(cli_level, rust_log.as_deref());

    let bridge = BRIDGE.get_or_init(|| LogBridge {
        level,
        file: Mutex::new(open_log_file(level)),
        mirror_stderr: rust_log.is_some(),
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(bridge.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins_over_rust_log() {
        assert_eq!(
            resolve_level(Some(LevelFilter::Warn), Some("trace")),
            LevelFilter::Warn
        );
    }

    #[test]
    fn test_rust_log_used_without_cli_level() {
        assert_eq!(resolve_level(None, Some("info")), LevelFilter::Info);
        assert_eq!(resolve_level(None, None), LevelFilter::Off);
    }

    #[test]
    fn test_rust_log_directives_take_most_verbose() {
        assert_eq!(
            parse_rust_log("vizdeck=debug,wgpu=warn"),
            Some(LevelFilter::Debug)
        );
        assert_eq!(parse_rust_log("not-a-level"), None);
    }

    #[test]
    fn test_noisy_targets_capped_at_warn() {
        let bridge = LogBridge {
            level: LevelFilter::Trace,
            file: Mutex::new(None),
            mirror_stderr: false,
        };
        let info = |target: &'static str| {
            Metadata::builder()
                .level(log::Level::Info)
                .target(target)
                .build()
        };
        assert!(bridge.enabled(&info("vizdeck_settings_ui::tab")));
        assert!(!bridge.enabled(&info("wgpu_core::device")));
    }
}
