//! CLI argument definitions for EduGate

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use edu_gate::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `settings_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum NamingSubcommand {
    /// List every terminology key with its effective label.
    List,
    /// Display the effective label for one key.
    Get {
        /// Terminology key (e.g., `Course`, `Learner`, `CourseCreator`)
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Set an institute override for a key.
    Set {
        /// Terminology key to rename
        #[arg(value_name = "KEY")]
        key: String,
        /// Replacement label
        #[arg(value_name = "LABEL")]
        label: String,
    },
    /// Remove the override for a key (back to the default label).
    Unset {
        /// Terminology key to restore
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Remove all naming overrides (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum TabsSubcommand {
    /// List the institute's tab adjustments.
    List,
    /// Make a tab visible again.
    Show {
        /// Tab identifier (e.g., `studyLibrary`)
        #[arg(value_name = "TAB")]
        id: String,
    },
    /// Hide a tab for the whole institute.
    Hide {
        /// Tab identifier (e.g., `communityCentre`)
        #[arg(value_name = "TAB")]
        id: String,
    },
    /// Pin the tab strip order.
    ///
    /// Listed tabs come first in the given order; unlisted tabs keep
    /// their built-in position after them.
    Order {
        /// Tab identifiers in the desired order
        #[arg(value_name = "TABS", num_args = 1..)]
        ids: Vec<String>,
    },
    /// Remove all tab adjustments (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum AccessSubcommand {
    /// Check top-level tab access for a role.
    Tab {
        /// Backend role string (e.g., `TEACHER`)
        #[arg(value_name = "ROLE")]
        role: String,
        /// Tab identifier
        #[arg(value_name = "TAB")]
        tab: String,
    },
    /// Check child tab access for a role.
    Child {
        /// Backend role string
        #[arg(value_name = "ROLE")]
        role: String,
        /// Parent tab identifier
        #[arg(value_name = "TAB")]
        tab: String,
        /// Child tab identifier
        #[arg(value_name = "CHILD")]
        child: String,
    },
    /// Check feature access for a role.
    Feature {
        /// Backend role string
        #[arg(value_name = "ROLE")]
        role: String,
        /// Tab identifier
        #[arg(value_name = "TAB")]
        tab: String,
        /// Feature identifier
        #[arg(value_name = "FEATURE")]
        feature: String,
    },
    /// Print the access matrix for one role, or for all roles.
    Matrix {
        /// Backend role string (all roles when omitted)
        #[arg(value_name = "ROLE")]
        role: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum RoleSubcommand {
    /// Resolve the display name for a backend role string.
    Name {
        /// Backend role string (unknown values pass through unchanged)
        #[arg(value_name = "ROLE")]
        role: String,
    },
    /// List all known roles with their display names.
    List,
}

#[derive(Debug, Subcommand)]
pub enum EnrollSubcommand {
    /// Validate an enrollment roster CSV before importing it.
    Check {
        /// Path to the roster CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Known batch name (repeat for several); rows naming other
        /// batches get a warning
        #[arg(long = "batch", value_name = "NAME")]
        batches: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage tool configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage institute naming overrides.
    ///
    /// If no subcommand is provided, lists the effective terminology.
    Naming {
        #[command(subcommand)]
        subcommand: Option<NamingSubcommand>,
    },
    /// Manage institute tab adjustments.
    ///
    /// If no subcommand is provided, lists the current adjustments.
    Tabs {
        #[command(subcommand)]
        subcommand: Option<TabsSubcommand>,
    },
    /// Query role access to tabs, child tabs, and features.
    Access {
        #[command(subcommand)]
        subcommand: AccessSubcommand,
    },
    /// Resolve role display names.
    ///
    /// If no subcommand is provided, lists all roles.
    Role {
        #[command(subcommand)]
        subcommand: Option<RoleSubcommand>,
    },
    /// Validate bulk enrollment rosters.
    Enroll {
        #[command(subcommand)]
        subcommand: EnrollSubcommand,
    },
    /// Generate an access and terminology report.
    Report {
        /// Output file path (optional; defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "md")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "edugate",
    about = "EduGate command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config institute settings file path
    #[arg(long = "config-settings-file", value_name = "PATH")]
    pub config_settings_file: Option<PathBuf>,

    /// Override config institute settings file path (short form)
    #[arg(long = "settings-file", value_name = "PATH")]
    pub settings_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. Short-form flags (e.g., `--settings-file`) take
    /// precedence over long-form flags (e.g., `--config-settings-file`) when both are
    /// provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    ///
    /// # Examples
    /// ```ignore
    /// let args = Cli::parse();
    /// let overrides = args.to_config_overrides();
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            settings_file: self
                .settings_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_settings_file
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
