//! Input/output operations, configuration and error handling

/// Command-line interface and render orchestration
pub mod cli;
/// Compile-time defaults and parameter ranges
pub mod configuration;
/// Error type and result alias
pub mod error;
/// PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress display for batch renders
pub mod progress;
