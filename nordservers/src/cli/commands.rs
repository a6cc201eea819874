//! CLI argument definitions and mode selection

use clap::Parser;
use nordservers_core::{ListingOptions, NordError};

/// Switch that lists every country with servers.
pub const SHOW_COUNTRIES_SWITCH: &str = "--show-countries";

/// Switch that disables per-group deduplication.
pub const ALL_SWITCH: &str = "--all";

/// List NordVPN servers by egress location
///
/// By default one server is shown per (egress country, egress city,
/// categories) combination: the one with the lowest current load. The table
/// header goes to stderr so the rows can be piped.
#[derive(Parser, Debug)]
#[command(name = "nordservers")]
#[command(version, about = "List NordVPN servers by egress location", long_about)]
pub struct Cli {
    /// Print every country that has servers, one per line
    #[arg(long)]
    pub show_countries: bool,

    /// Print the OpenVPN config of a server (transport: tcp or udp, default tcp)
    #[arg(long, num_args = 1..=2, value_names = ["ID", "TRANSPORT"])]
    pub get_conf: Option<Vec<String>>,

    /// Show every server instead of the least-loaded one per group
    #[arg(long)]
    pub all: bool,

    /// Include obfuscated servers in the listing
    #[arg(long)]
    pub include_obfuscated: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only list servers egressing in this country
    #[arg(value_name = "COUNTRY")]
    pub country: Vec<String>,
}

/// What a single run does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the sorted country list
    ShowCountries,
    /// Print one server's OpenVPN config
    GetConf {
        server_id: String,
        transport: Option<String>,
    },
    /// Print the server table
    ListServers(ListingOptions),
}

impl Cli {
    /// Select the mode. `--show-countries` wins over `--get-conf`, which wins
    /// over the listing.
    pub fn mode(&self) -> Mode {
        if self.show_countries {
            return Mode::ShowCountries;
        }

        if let Some((server_id, rest)) = self.get_conf.as_deref().and_then(<[String]>::split_first) {
            return Mode::GetConf {
                server_id: server_id.clone(),
                transport: rest.first().cloned(),
            };
        }

        let desired_country = if self.country.is_empty() {
            None
        } else {
            Some(self.country.join(" "))
        };

        Mode::ListServers(ListingOptions {
            show_all: self.all,
            include_obfuscated: self.include_obfuscated,
            desired_country,
        })
    }
}

/// Follow-up advice for errors caused by bad arguments.
pub fn discovery_hint(err: &NordError) -> Option<String> {
    match err {
        NordError::UnknownServer(_) | NordError::UnsupportedTransport { .. } => {
            Some(format!("Use {} to get a list of valid options.", ALL_SWITCH))
        }
        NordError::UnknownCountry(_) => Some(format!(
            "Use {} to get a list of valid options.",
            SHOW_COUNTRIES_SWITCH
        )),
        _ => None,
    }
}
