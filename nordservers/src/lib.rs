//! nordservers CLI library
//!
//! Fetches the NordVPN server list, prints it as a table grouped by egress
//! location, and downloads OpenVPN configs. The listing logic lives in
//! `nordservers-core`; this crate adds the HTTP client, argument parsing,
//! and output.

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP access to the provider API.
pub mod client;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

#[cfg(test)]
pub mod test_utils;
