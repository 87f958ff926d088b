use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the power summariser.
///
/// Malformed dump rows are not errors; the reader skips them silently.
#[derive(Error, Debug)]
pub enum PowerError {
    /// The dump file given on the command line does not exist.
    #[error("dump file '{}' not found.", .0.display())]
    DumpNotFound(PathBuf),

    /// The dump exists but could not be opened.
    #[error("Failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON rendering of a report failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the power crates.
pub type Result<T> = std::result::Result<T, PowerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_dump_not_found() {
        let err = PowerError::DumpNotFound(PathBuf::from("/missing/power_tt.txt"));
        assert_eq!(err.to_string(), "dump file '/missing/power_tt.txt' not found.");
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PowerError::FileRead {
            path: PathBuf::from("/some/power.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/power.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_display_config() {
        let err = PowerError::Config("unknown format".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown format");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let err: PowerError = io_err.into();
        assert!(err.to_string().contains("bad utf-8"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: PowerError = json_err.into();
        assert!(err.to_string().contains("Failed to render JSON"));
    }
}
