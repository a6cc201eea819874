//! Server categories
//!
//! The provider labels its server groups with long titles ("Onion Over VPN").
//! These map onto short tags through a fixed table; labels outside the table
//! are kept verbatim.

use crate::types::ServerRecord;

/// Server category derived from a provider group title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Dedicated,
    Double,
    Obfuscated,
    Tor,
    P2p,
    Standard,
    /// Label not in the mapping table, carried unchanged
    Other(String),
}

impl Category {
    /// Map a provider group title to a category.
    ///
    /// ```
    /// use nordservers_core::Category;
    ///
    /// assert_eq!(Category::from_label("Double VPN"), Category::Double);
    /// assert_eq!(Category::from_label("Anycast"), Category::Other("Anycast".to_string()));
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label {
            "Dedicated IP" => Category::Dedicated,
            "Double VPN" => Category::Double,
            "Obfuscated Servers" => Category::Obfuscated,
            "Onion Over VPN" => Category::Tor,
            "P2P" => Category::P2p,
            "Standard VPN servers" => Category::Standard,
            other => Category::Other(other.to_string()),
        }
    }

    /// Short tag shown in the listing.
    pub fn tag(&self) -> &str {
        match self {
            Category::Dedicated => "dedicated",
            Category::Double => "double",
            Category::Obfuscated => "obfuscated",
            Category::Tor => "tor",
            Category::P2p => "p2p",
            Category::Standard => "standard",
            Category::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Categories of a server, sorted by tag. Region groups are not categories
/// and are skipped.
pub fn categories_of(server: &ServerRecord) -> Vec<Category> {
    let mut categories: Vec<Category> = server
        .groups
        .iter()
        .filter(|group| !group.is_region())
        .map(|group| Category::from_label(&group.title))
        .collect();
    categories.sort_by(|a, b| a.tag().cmp(b.tag()));
    categories
}

/// Comma-joined tags, in the order given.
pub fn join_tags(categories: &[Category]) -> String {
    categories
        .iter()
        .map(Category::tag)
        .collect::<Vec<_>>()
        .join(",")
}
