//! Error types for nordservers

use thiserror::Error;

/// Core error type for nordservers operations
#[derive(Error, Debug)]
pub enum NordError {
    /// Any transport or HTTP failure while talking to the provider
    #[error("Network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// The server list could not be decoded or has an unexpected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// No server with the given ID exists
    #[error("Nord does not know about server '{0}'.")]
    UnknownServer(String),

    /// The desired country has no egress servers
    #[error("Nord does not have an egress in '{0}'.")]
    UnknownCountry(String),

    /// The transport keyword is neither `tcp` nor `udp`
    #[error(
        "Nord does not know about transport protocol '{0}'. Please specify 'tcp' or 'udp', \
         or do not specify a transport protocol to use the default ('tcp')."
    )]
    InvalidTransport(String),

    /// The server exists but offers no config for the transport
    #[error("The Nord server '{server}' does not support the {transport} transport protocol.")]
    UnsupportedTransport { server: String, transport: String },

    /// Upstream data no longer matches the shape the listing relies on
    #[error("Internal inconsistency: {0}")]
    Internal(String),
}

/// Result type alias for nordservers operations
pub type Result<T> = std::result::Result<T, NordError>;

impl NordError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the error was caused by the user's arguments rather than by
    /// the network or the provider's data.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            NordError::UnknownServer(_)
                | NordError::UnknownCountry(_)
                | NordError::InvalidTransport(_)
                | NordError::UnsupportedTransport { .. }
        )
    }
}

impl From<serde_json::Error> for NordError {
    fn from(err: serde_json::Error) -> Self {
        NordError::MalformedResponse(err.to_string())
    }
}
