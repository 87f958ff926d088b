//! Dump ingestion layer for the power summariser.
//!
//! Classifies the lines of an OpenSTA / OpenROAD `report_power` dump, keeps
//! the instance rows under a hierarchy prefix and ranks them by total power.

pub mod aggregator;
pub mod reader;

pub use aggregator::PowerAggregator;
pub use reader::{classify_line, load_dump, parse_lines, parse_reader, DumpLine};

pub use power_core as core;
