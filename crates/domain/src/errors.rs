use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Failed to spawn {program}: {reason}")]
    CommandSpawn { program: String, reason: String },

    #[error("{program} exited with {status}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to decode tool output: {0}")]
    Decode(String),

    #[error("IP address for MAC address {0} not found")]
    IpAddressNotFound(String),

    #[error("MAC address for IP address {0} not found")]
    MacAddressNotFound(String),

    #[error("No local subnet found on this host")]
    NoLocalSubnet,

    #[error("Ambiguous local subnet: candidates {0:?}")]
    AmbiguousLocalSubnet(Vec<String>),

    #[error("Interface {0} has no IPv4 address")]
    InterfaceWithoutAddress(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),

    #[error("No {key_type} host key returned for {address}")]
    HostKeyUnavailable { address: String, key_type: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl DomainError {
    /// Lookup found nothing; callers answer with a not-found response.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::IpAddressNotFound(_) | DomainError::MacAddressNotFound(_)
        )
    }

    pub fn is_ambiguous_topology(&self) -> bool {
        matches!(
            self,
            DomainError::NoLocalSubnet | DomainError::AmbiguousLocalSubnet(_)
        )
    }

    /// Malformed caller input. `InvalidCidr` is excluded: it only arises from
    /// prefixes reported by the host itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidIpAddress(_))
    }
}
