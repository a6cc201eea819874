//! Server listing: filtering, egress derivation, sorting, and deduplication
//!
//! The listing shows where traffic leaves the VPN, which is not always where
//! the server sits. Onion servers hide their egress entirely; double-hop
//! servers only reveal the exit country, and only through their display name.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::category::{categories_of, join_tags, Category};
use crate::config::{ProviderConfig, UNKNOWN_LOCATION};
use crate::error::{NordError, Result};
use crate::types::ServerRecord;

/// Exit country of a double-hop server, e.g. `Canada - United States #3`.
static DOUBLE_HOP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.+ - (.+) #\d+").expect("double-hop name pattern is a valid regex")
});

/// Options for the server listing, parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Show every server instead of the least-loaded one per group
    pub show_all: bool,
    /// Keep obfuscated servers in the listing
    pub include_obfuscated: bool,
    /// Only list servers egressing in this country (case-insensitive)
    pub desired_country: Option<String>,
}

impl ListingOptions {
    /// Whether only the least-loaded server per (country, city, categories)
    /// is shown. A country filter always shows every match.
    pub fn deduplicates(&self) -> bool {
        !self.show_all && self.desired_country.is_none()
    }
}

/// One row of the server table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Hostname without the provider domain
    pub id: String,
    pub name: String,
    pub egress_country: String,
    pub egress_city: String,
    /// Sorted, comma-joined category tags
    pub categories: String,
    pub load: u32,
}

/// Distinct primary-location country names, sorted by byte order.
///
/// # Errors
///
/// Returns `MalformedResponse` if a record has no location.
pub fn countries(servers: &[ServerRecord]) -> Result<Vec<String>> {
    let mut names = BTreeSet::new();
    for server in servers {
        names.insert(server.primary_location()?.name.clone());
    }
    Ok(names.into_iter().collect())
}

/// Build the sorted (and, unless disabled, deduplicated) server table.
///
/// # Errors
///
/// Returns an error if:
/// - The desired country matches no known country (`UnknownCountry`)
/// - A record has no location (`MalformedResponse`)
/// - A double-hop server's name does not name a known exit country (`Internal`)
pub fn build_rows(
    servers: &[ServerRecord],
    options: &ListingOptions,
    config: &ProviderConfig,
) -> Result<Vec<DisplayRow>> {
    let known_countries = countries(servers)?;

    let desired = options.desired_country.as_deref().map(str::to_lowercase);
    if let Some(desired) = &desired {
        if !known_countries.iter().any(|c| c.to_lowercase() == *desired) {
            return Err(NordError::UnknownCountry(
                options.desired_country.clone().unwrap_or_default(),
            ));
        }
    }

    let mut rows = Vec::new();
    for server in servers {
        let categories = categories_of(server);

        if categories.is_empty() || categories.contains(&Category::Dedicated) {
            continue;
        }
        if categories.contains(&Category::Obfuscated) && !options.include_obfuscated {
            continue;
        }

        let (egress_country, egress_city) = egress_of(server, &categories, &known_countries)?;

        if let Some(desired) = &desired {
            if egress_country.to_lowercase() != *desired {
                continue;
            }
        }

        rows.push(DisplayRow {
            id: config.id_for(&server.hostname).to_string(),
            name: server.name.clone(),
            egress_country,
            egress_city,
            categories: join_tags(&categories),
            load: server.load,
        });
    }

    rows.sort_by(|a, b| {
        (&a.egress_country, &a.egress_city, a.load, &a.name)
            .cmp(&(&b.egress_country, &b.egress_city, b.load, &b.name))
    });

    if options.deduplicates() {
        let mut seen = HashSet::new();
        rows.retain(|row| {
            seen.insert((
                row.egress_country.clone(),
                row.egress_city.clone(),
                row.categories.clone(),
            ))
        });
    }

    Ok(rows)
}

/// Egress (country, city) of a server.
fn egress_of(
    server: &ServerRecord,
    categories: &[Category],
    known_countries: &[String],
) -> Result<(String, String)> {
    if categories.contains(&Category::Tor) {
        return Ok((UNKNOWN_LOCATION.to_string(), UNKNOWN_LOCATION.to_string()));
    }

    if categories.contains(&Category::Double) {
        let country = DOUBLE_HOP_NAME
            .captures(&server.name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| {
                NordError::Internal(format!(
                    "cannot find exit country in double VPN server name '{}'",
                    server.name
                ))
            })?;

        if !known_countries.iter().any(|c| c == country) {
            return Err(NordError::Internal(format!(
                "double VPN server '{}' exits in unknown country '{}'",
                server.name, country
            )));
        }

        return Ok((country.to_string(), UNKNOWN_LOCATION.to_string()));
    }

    let location = server.primary_location()?;
    Ok((location.name.clone(), location.city.name.clone()))
}
