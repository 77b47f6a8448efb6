//! Command-line interface for vizdeck.
//!
//! This module handles CLI argument parsing and the `set-preferred-tab`
//! subcommand.

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use vizdeck_settings_ui::SettingsTab;

use crate::workspace::WorkspaceStore;

/// vizdeck - settings for the vizdeck visualization app
#[derive(Parser, Debug)]
#[command(name = "vizdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tab to open the settings dialog on (general, extensions,
    /// experimental-features, about)
    #[arg(long, value_name = "TAB")]
    pub tab: Option<SettingsTab>,

    /// Present the dialog as the browser-hosted build
    #[arg(long)]
    pub web: bool,

    /// Settings file to use instead of ~/.config/vizdeck/settings.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for the debug log file (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Store the tab the settings dialog opens on by default
    SetPreferredTab {
        /// Tab name, e.g. "extensions"
        tab: SettingsTab,
    },
}

/// Log level accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuntimeOptions {
    /// Explicit initial settings tab
    pub initial_tab: Option<SettingsTab>,
    /// Run as the browser-hosted build
    pub web: bool,
    /// Settings file override
    pub config_path: Option<PathBuf>,
    /// Log level from `--log-level`
    pub log_level: Option<LevelFilter>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            initial_tab: cli.tab,
            web: cli.web,
            config_path: cli.config,
            log_level: cli.log_level.map(LogLevel::to_level_filter),
        }
    }
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    process(Cli::parse())
}

/// Handle already-parsed arguments.
pub fn process(mut cli: Cli) -> CliResult {
    match cli.command.take() {
        Some(Commands::SetPreferredTab { tab }) => {
            match set_preferred_tab(&WorkspaceStore::default_path(), tab) {
                Ok(()) => {
                    println!("Settings will open on '{}'", tab);
                    CliResult::Exit(0)
                }
                Err(e) => {
                    eprintln!("vizdeck: error: {e:#}");
                    CliResult::Exit(1)
                }
            }
        }
        None => CliResult::Continue(RuntimeOptions::from(cli)),
    }
}

/// Write the preferred settings tab to the workspace file at `path`.
pub fn set_preferred_tab(path: &std::path::Path, tab: SettingsTab) -> anyhow::Result<()> {
    if !tab.has_panel() {
        anyhow::bail!("settings tab '{}' has no panel", tab);
    }
    let workspace = WorkspaceStore::load_from(path)?;
    workspace.set_preferred_settings_tab(Some(tab))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vizdeck"]).unwrap();
        let options = RuntimeOptions::from(cli);
        assert_eq!(options, RuntimeOptions::default());
    }

    #[test]
    fn test_tab_and_flags() {
        let cli = Cli::try_parse_from([
            "vizdeck",
            "--tab",
            "experimental-features",
            "--web",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let options = RuntimeOptions::from(cli);
        assert_eq!(options.initial_tab, Some(SettingsTab::ExperimentalFeatures));
        assert!(options.web);
        assert_eq!(options.log_level, Some(LevelFilter::Debug));
    }

    #[test]
    fn test_unknown_tab_rejected() {
        assert!(Cli::try_parse_from(["vizdeck", "--tab", "plugins"]).is_err());
    }

    #[test]
    fn test_set_preferred_tab_subcommand() {
        let cli = Cli::try_parse_from(["vizdeck", "set-preferred-tab", "about"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::SetPreferredTab {
                tab: SettingsTab::About
            })
        );
    }
}
