//! Shared building blocks for the power summariser.
//!
//! Holds the domain types produced by a dump scan, the error taxonomy, the
//! command-line settings and the number formatting used by the reporters.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{PowerError, Result};
pub use models::{ParseStats, PowerRecord, PowerReport};
