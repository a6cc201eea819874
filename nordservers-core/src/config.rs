//! Provider endpoints and transport selection
//!
//! There is no configuration file: the provider endpoints are compiled in and
//! read once per run. [`ProviderConfig`] exists so the endpoints can be pointed
//! at a local server in tests.

use crate::error::NordError;

/// Server-list endpoint, one page large enough to hold every server.
pub const SERVER_LIST_URL: &str = "https://api.nordvpn.com/v1/servers?limit=9999999";

/// Base URL for OpenVPN configuration file downloads.
pub const CONFIG_DOWNLOAD_BASE: &str = "https://downloads.nordcdn.com/configs/files";

/// Domain suffix shared by every server hostname.
pub const HOSTNAME_DOMAIN: &str = "nordvpn.com";

/// Placeholder used where the egress city or country cannot be derived.
pub const UNKNOWN_LOCATION: &str = "???";

/// Provider endpoints used by a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// URL returning the JSON array of server records
    pub server_list_url: String,
    /// Base URL that config file paths are appended to
    pub download_base: String,
    /// Domain suffix of server hostnames
    pub hostname_domain: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            server_list_url: SERVER_LIST_URL.to_string(),
            download_base: CONFIG_DOWNLOAD_BASE.to_string(),
            hostname_domain: HOSTNAME_DOMAIN.to_string(),
        }
    }
}

impl ProviderConfig {
    /// Point both endpoints at `base_url`, keeping the NordVPN hostname domain.
    ///
    /// The server list is served from `{base_url}/v1/servers` and config files
    /// from `{base_url}/configs/files`.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            server_list_url: format!("{}/v1/servers?limit=9999999", base),
            download_base: format!("{}/configs/files", base),
            ..Default::default()
        }
    }

    /// Full hostname for a short server ID (`us1` -> `us1.nordvpn.com`).
    pub fn hostname_for(&self, id: &str) -> String {
        format!("{}.{}", id, self.hostname_domain)
    }

    /// Short server ID for a full hostname. Hostnames outside the provider
    /// domain are returned unchanged.
    pub fn id_for<'a>(&self, hostname: &'a str) -> &'a str {
        hostname
            .strip_suffix(self.hostname_domain.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(hostname)
    }
}

/// OpenVPN transport protocol
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transport {
    #[default]
    Tcp,
    Udp,
}

impl Transport {
    /// Lowercase keyword as used in technology identifiers and file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Tcp => "tcp",
            Transport::Udp => "udp",
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Transport {
    type Err = NordError;

    /// Parse a transport keyword. Matching is exact: `TCP` is rejected.
    ///
    /// ```
    /// use std::str::FromStr;
    /// use nordservers_core::Transport;
    ///
    /// assert_eq!(Transport::from_str("udp").unwrap(), Transport::Udp);
    /// assert!(Transport::from_str("xyz").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Transport::Tcp),
            "udp" => Ok(Transport::Udp),
            _ => Err(NordError::InvalidTransport(s.to_string())),
        }
    }
}
