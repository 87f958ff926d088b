//! Report rendering for the power summariser.
//!
//! Turns a ranked [`PowerReport`](power_core::models::PowerReport) into the
//! plain-text table printed by default, or into JSON.

pub mod json;
pub mod text;

pub use json::render_json;
pub use text::render_text;

pub use power_core as core;
