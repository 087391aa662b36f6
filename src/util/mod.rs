// Utility Module
// Configuration and text helpers for the command line front end

pub mod config;
pub mod format;

pub use config::MulConfig;
pub use format::{format_hex, parse_operand};
