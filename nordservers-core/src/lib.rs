//! nordservers core library
//!
//! Server-list model, category mapping, and listing logic for the
//! `nordservers` CLI. Nothing in this crate touches the network or the
//! terminal; the binary crate owns both.

pub mod category;
pub mod config;
pub mod download;
pub mod error;
pub mod listing;
pub mod types;

// Re-export commonly used types
pub use category::Category;
pub use config::{ProviderConfig, Transport};
pub use download::{resolve_download, ConfigDownload};
pub use error::*;
pub use listing::{build_rows, countries, DisplayRow, ListingOptions};
pub use types::{parse_server_list, ServerRecord};
