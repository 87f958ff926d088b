use clap::Parser;
use std::path::PathBuf;

use crate::error::{PowerError, Result};

/// Dump read when `--file` is not given, relative to the working directory.
pub const DEFAULT_DUMP_PATH: &str = "source/power_tt.txt";

/// Hierarchy prefix summed when `--prefix` is not given.
pub const DEFAULT_PREFIX: &str = "i_croc_soc/i_croc/i_pulser/";

/// Number of ranked instances shown when `--topn` is not given.
pub const DEFAULT_TOP_N: i64 = 20;

// ── OutputFormat ──────────────────────────────────────────────────────────────

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = PowerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(PowerError::Config(format!("unknown output format: {other}"))),
        }
    }
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise per-instance total power for any hierarchy prefix inside an
/// OpenSTA / OpenROAD power dump.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "get-power",
    about = "Summarise per-instance total power for any hierarchy prefix inside an OpenSTA / OpenROAD power dump",
    version
)]
pub struct Settings {
    /// Dump file from 'report_power > file'
    #[arg(short = 'f', long = "file", default_value = DEFAULT_DUMP_PATH)]
    pub file: PathBuf,

    /// Hierarchy prefix to sum
    #[arg(short = 'p', long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Show N hottest instances (0 or less: none)
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_TOP_N,
        allow_negative_numbers = true
    )]
    pub topn: i64,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list so
    /// tests can drive it without spawning a process.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Self::parse_from(args);
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// The selected output format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::load_from_args(["get-power"]);

        assert_eq!(settings.file, PathBuf::from("source/power_tt.txt"));
        assert_eq!(settings.prefix, "i_croc_soc/i_croc/i_pulser/");
        assert_eq!(settings.topn, 20);
        assert_eq!(settings.format, "text");
        assert_eq!(settings.log_level, "WARNING");
        assert!(!settings.debug);
    }

    #[test]
    fn test_settings_short_flags() {
        let settings = Settings::load_from_args([
            "get-power",
            "-f",
            "power_ff.txt",
            "-p",
            "top/u_core/",
            "-n",
            "10",
        ]);
        assert_eq!(settings.file, PathBuf::from("power_ff.txt"));
        assert_eq!(settings.prefix, "top/u_core/");
        assert_eq!(settings.topn, 10);
    }

    #[test]
    fn test_settings_long_flags() {
        let settings = Settings::load_from_args([
            "get-power",
            "--file",
            "/tmp/power_ss.txt",
            "--prefix",
            "i_core/",
            "--topn",
            "0",
        ]);
        assert_eq!(settings.file, PathBuf::from("/tmp/power_ss.txt"));
        assert_eq!(settings.prefix, "i_core/");
        assert_eq!(settings.topn, 0);
    }

    #[test]
    fn test_settings_negative_topn_accepted() {
        let settings = Settings::load_from_args(["get-power", "-n", "-3"]);
        assert_eq!(settings.topn, -3);
    }

    #[test]
    fn test_settings_empty_prefix() {
        let settings = Settings::load_from_args(["get-power", "--prefix", ""]);
        assert_eq!(settings.prefix, "");
    }

    #[test]
    fn test_settings_rejects_non_integer_topn() {
        let result = Settings::try_parse_from(["get-power", "-n", "many"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_rejects_unknown_format() {
        let result = Settings::try_parse_from(["get-power", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_debug_overrides_log_level() {
        let settings =
            Settings::load_from_args(["get-power", "--log-level", "ERROR", "--debug"]);
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_output_format_parsing() {
        let text = Settings::load_from_args(["get-power"]);
        assert_eq!(text.output_format().unwrap(), OutputFormat::Text);

        let json = Settings::load_from_args(["get-power", "--format", "json"]);
        assert_eq!(json.output_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_unknown_is_config_error() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, PowerError::Config(_)));
    }
}
