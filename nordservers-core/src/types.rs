//! Server records as returned by the provider's server-list API
//!
//! Only the fields the listing and config lookup need are modelled; serde
//! ignores everything else in the payload.

use serde::{Deserialize, Serialize};

use crate::error::{NordError, Result};

/// One server entry from the provider API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Fully-qualified hostname, unique per server (e.g. `us1.nordvpn.com`)
    pub hostname: String,
    /// Display name, e.g. `United States #1` or `Canada - United States #3`
    pub name: String,
    /// Current utilization, 0-100
    pub load: u32,
    /// Physical locations; the first one is the server's own location
    #[serde(default)]
    pub locations: Vec<Location>,
    /// Provider groups: category labels and geographic regions
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Supported protocols
    #[serde(default)]
    pub technologies: Vec<Technology>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub country: Country,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub city: City,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
}

/// Provider group attached to a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<GroupType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupType {
    pub identifier: String,
}

/// Group type identifier of geographic region groups ("Europe", "The Americas").
pub const REGION_GROUP_TYPE: &str = "regions";

impl Group {
    /// Whether this group describes a geographic region rather than a
    /// server category.
    pub fn is_region(&self) -> bool {
        self.kind
            .as_ref()
            .is_some_and(|kind| kind.identifier == REGION_GROUP_TYPE)
    }
}

/// Supported protocol, e.g. `openvpn_tcp` or `openvpn_xor_udp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub identifier: String,
}

impl ServerRecord {
    /// The server's own location (`locations[0]`).
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` if the record carries no location.
    pub fn primary_location(&self) -> Result<&Country> {
        self.locations
            .first()
            .map(|location| &location.country)
            .ok_or_else(|| {
                NordError::MalformedResponse(format!("server {} has no location", self.hostname))
            })
    }

    /// Whether the server lists the given technology identifier.
    pub fn supports(&self, identifier: &str) -> bool {
        self.technologies.iter().any(|t| t.identifier == identifier)
    }
}

/// Decode the server-list response body.
///
/// # Errors
///
/// Returns `MalformedResponse` if the body is not a JSON array of server
/// records.
pub fn parse_server_list(body: &str) -> Result<Vec<ServerRecord>> {
    Ok(serde_json::from_str(body)?)
}
