//! CLI command definitions and handlers
//!
//! This module organizes the CLI into logical submodules:
//! - [`commands`] - Argument definitions and mode selection
//! - [`handlers`] - Mode execution handlers
//! - [`report`] - Error reporting and exit statuses

mod commands;
mod handlers;
mod report;

pub use commands::*;
pub use handlers::*;
pub use report::*;
