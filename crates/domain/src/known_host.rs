use crate::DomainError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Address keying a known-hosts entry. Only strict dotted-quad IPv4 is accepted,
/// so the value is safe to hand to external tools and to match against file lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnownHostAddress(Ipv4Addr);

impl KnownHostAddress {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Ipv4Addr::from_str(raw)
            .map(Self)
            .map_err(|_| DomainError::InvalidIpAddress(raw.to_string()))
    }

    /// True when the first whitespace-delimited field of `line` is this address.
    pub fn keys_line(&self, line: &str) -> bool {
        let key = self.0.to_string();
        line.strip_prefix(key.as_str())
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
    }
}

impl fmt::Display for KnownHostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
