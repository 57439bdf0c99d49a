//! Logging module for the Tiny-ImageNet ingest tool
//!
//! This module provides:
//! - Custom log formatting with bracketed output
//! - Dual logging (optional file + stdout)
//! - Log file naming with timestamps

mod formatter;
mod setup;

pub use formatter::BracketedFormatter;
pub use setup::setup_logging;
