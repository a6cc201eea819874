//! OpenVPN configuration file lookup
//!
//! Every server publishes its configs under a directory named after the
//! transport. Servers that only speak the obfuscated ("xor") variant publish
//! under `ovpn_xor_<transport>` instead.

use crate::config::{ProviderConfig, Transport};
use crate::error::{NordError, Result};
use crate::types::ServerRecord;

/// Where to download a server's OpenVPN configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDownload {
    /// Lowercased short server ID
    pub server_id: String,
    pub transport: Transport,
    /// Whether the config uses the obfuscated ("scramble") transport
    pub obfuscated: bool,
    pub url: String,
}

impl ConfigDownload {
    /// Download directory, e.g. `ovpn_udp` or `ovpn_xor_tcp`.
    pub fn directory(&self) -> String {
        directory_for(self.transport, self.obfuscated)
    }
}

fn directory_for(transport: Transport, obfuscated: bool) -> String {
    if obfuscated {
        format!("ovpn_xor_{}", transport)
    } else {
        format!("ovpn_{}", transport)
    }
}

/// Resolve the config download for `server_id` over `transport`.
///
/// The server ID matches case-insensitively; a missing transport means TCP.
/// The transport keyword is validated before the server is looked up.
///
/// # Errors
///
/// Returns an error if:
/// - The transport is not exactly `tcp` or `udp` (`InvalidTransport`)
/// - No server has the hostname `<server_id>.<domain>` (`UnknownServer`)
/// - The server supports neither the plain nor the xor variant of the
///   transport (`UnsupportedTransport`)
pub fn resolve_download(
    servers: &[ServerRecord],
    server_id: &str,
    transport: Option<&str>,
    config: &ProviderConfig,
) -> Result<ConfigDownload> {
    let transport = match transport {
        Some(keyword) => keyword.parse::<Transport>()?,
        None => Transport::default(),
    };

    let server_id = server_id.to_lowercase();
    let hostname = config.hostname_for(&server_id);

    let server = servers
        .iter()
        .find(|server| server.hostname == hostname)
        .ok_or_else(|| NordError::UnknownServer(server_id.clone()))?;

    let obfuscated = if server.supports(&format!("openvpn_{}", transport)) {
        false
    } else if server.supports(&format!("openvpn_xor_{}", transport)) {
        true
    } else {
        return Err(NordError::UnsupportedTransport {
            server: server_id,
            transport: transport.to_string(),
        });
    };

    let url = format!(
        "{}/{}/servers/{}.{}.ovpn",
        config.download_base,
        directory_for(transport, obfuscated),
        hostname,
        transport
    );

    Ok(ConfigDownload {
        server_id,
        transport,
        obfuscated,
        url,
    })
}
