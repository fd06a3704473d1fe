//! Transport schemes accepted by the push gateway client.

use std::str::FromStr;

/// Scheme used to reach the push gateway.
///
/// This is a closed set: anything other than `http` or `https` is rejected
/// when parsing, so a constructed client can never hold an invalid scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportScheme {
    #[default]
    Http,
    Https,
}

impl TransportScheme {
    /// All allowed schemes.
    pub const ALL: [TransportScheme; 2] = [TransportScheme::Http, TransportScheme::Https];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportScheme::Http => "http",
            TransportScheme::Https => "https",
        }
    }
}

impl std::fmt::Display for TransportScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a transport string is not one of the allowed schemes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid transport \"{0}\"")]
pub struct ParseTransportError(pub String);

impl FromStr for TransportScheme {
    type Err = ParseTransportError;

    /// Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| ParseTransportError(s.to_string()))
    }
}
