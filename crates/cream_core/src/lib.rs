//! cream_core: Core source-location types for the cream-cheese front end.
//!
//! Provides byte offsets, line numbers and text spans shared by the
//! scanner and the diagnostics layer.

pub mod text;

// Re-export commonly used types
pub use text::{LineNumber, TextPos, TextSpan};
