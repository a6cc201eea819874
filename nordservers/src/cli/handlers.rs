//! Mode execution handlers
//!
//! Handlers write their payload to `out` and the table header to `diag`.
//! `main` passes stdout and stderr; tests pass buffers.

use std::io::Write;

use anyhow::{Context, Result};
use nordservers_core::{build_rows, countries, resolve_download, ConfigDownload, ListingOptions, ProviderConfig};
use tracing::info;

use crate::client::{fetch_servers, Fetcher};
use crate::format::ServerTable;

use super::commands::Mode;

/// Printed to stderr whenever an xor (obfuscated) config is downloaded.
pub const OBFUSCATION_WARNING: &str = "[!] WARNING:  This configuration file is using the \
    \"scramble obfuscate\" directive, which may require a patched OpenVPN client to work.";

/// Run the selected mode.
pub async fn run<F, W, D>(
    mode: &Mode,
    fetcher: &F,
    config: &ProviderConfig,
    out: &mut W,
    diag: &mut D,
) -> Result<()>
where
    F: Fetcher + ?Sized,
    W: Write,
    D: Write,
{
    match mode {
        Mode::ShowCountries => handle_show_countries(fetcher, config, out).await,
        Mode::GetConf {
            server_id,
            transport,
        } => handle_get_conf(fetcher, config, server_id, transport.as_deref(), out, diag)
            .await
            .map(|_| ()),
        Mode::ListServers(options) => handle_list_servers(fetcher, config, options, out, diag).await,
    }
}

/// Handle `--show-countries`
pub async fn handle_show_countries<F, W>(fetcher: &F, config: &ProviderConfig, out: &mut W) -> Result<()>
where
    F: Fetcher + ?Sized,
    W: Write,
{
    let servers = fetch_servers(fetcher, config).await?;

    for country in countries(&servers)? {
        writeln!(out, "{}", country).context("Failed to write country list")?;
    }
    out.flush().context("Failed to write country list")?;

    Ok(())
}

/// Handle `--get-conf`
///
/// The obfuscation warning is written to `diag` directly so log filtering
/// can never hide it.
pub async fn handle_get_conf<F, W, D>(
    fetcher: &F,
    config: &ProviderConfig,
    server_id: &str,
    transport: Option<&str>,
    out: &mut W,
    diag: &mut D,
) -> Result<ConfigDownload>
where
    F: Fetcher + ?Sized,
    W: Write,
    D: Write,
{
    let servers = fetch_servers(fetcher, config).await?;
    let download = resolve_download(&servers, server_id, transport, config)?;

    info!("Fetching {} config: {} ...", download.directory(), download.url);
    let body = fetcher.fetch_text(&download.url).await?;

    writeln!(out, "{}", body).context("Failed to write config file")?;
    out.flush().context("Failed to write config file")?;

    if download.obfuscated {
        writeln!(diag, "{}", OBFUSCATION_WARNING).context("Failed to write warning")?;
        diag.flush().context("Failed to write warning")?;
    }

    Ok(download)
}

/// Handle the server listing
pub async fn handle_list_servers<F, W, D>(
    fetcher: &F,
    config: &ProviderConfig,
    options: &ListingOptions,
    out: &mut W,
    diag: &mut D,
) -> Result<()>
where
    F: Fetcher + ?Sized,
    W: Write,
    D: Write,
{
    let servers = fetch_servers(fetcher, config).await?;
    let rows = build_rows(&servers, options, config)?;
    let table = ServerTable::new(&rows);

    writeln!(diag, "{}", table.header()).context("Failed to write table header")?;
    writeln!(diag, "{}", table.separator()).context("Failed to write table header")?;
    diag.flush().context("Failed to write table header")?;

    for line in table.lines() {
        writeln!(out, "{}", line).context("Failed to write server table")?;
    }
    out.flush().context("Failed to write server table")?;

    Ok(())
}
