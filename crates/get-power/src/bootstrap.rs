use std::path::Path;

use power_core::error::PowerError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"warn"` if the level string is not recognised. Log output
/// goes to stderr so stdout only ever carries the report.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(level_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

/// Map the CLI level names onto tracing's lowercase directives.
fn level_directive(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

// ── Dump checks ────────────────────────────────────────────────────────────────

/// Fail fast when the dump path does not exist, before any parsing starts.
pub fn ensure_dump_exists(path: &Path) -> Result<(), PowerError> {
    if path.exists() {
        Ok(())
    } else {
        Err(PowerError::DumpNotFound(path.to_path_buf()))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_level_directive_maps_cli_names() {
        assert_eq!(level_directive("DEBUG"), "debug");
        assert_eq!(level_directive("INFO"), "info");
        assert_eq!(level_directive("WARNING"), "warn");
        assert_eq!(level_directive("ERROR"), "error");
        assert_eq!(level_directive("CRITICAL"), "error");
    }

    #[test]
    fn test_level_directive_passes_through_unknown() {
        assert_eq!(level_directive("trace"), "trace");
        assert_eq!(level_directive("Warn"), "warn");
    }

    #[test]
    fn test_ensure_dump_exists_ok() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("power_tt.txt");
        std::fs::write(&path, "").expect("write dump");

        ensure_dump_exists(&path).expect("existing dump must pass");
    }

    #[test]
    fn test_ensure_dump_exists_missing() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("absent.txt");

        match ensure_dump_exists(&path) {
            Err(PowerError::DumpNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected DumpNotFound, got {:?}", other),
        }
    }
}
