use fancy_regex::{escape, Regex};
use lanscout_domain::{normalize_mac, DomainError};

const IPV4: &str = r"(?:\d{1,3}\.){3}\d{1,3}";
const MAC: &str = r"(?:[0-9a-f]{2}:){5}[0-9a-f]{2}";

/// IP of the `ether` row carrying `mac` in `arp -ne` output.
pub fn find_ip_for_mac(table: &str, mac: &str) -> Result<Option<String>, DomainError> {
    let pattern = format!(
        r"(?im)^({})\s+ether\s+{}(?:\s|$)",
        IPV4,
        escape(&mac.to_lowercase())
    );

    capture_first(&pattern, table)
}

/// MAC of the `ether` row for `ip` in `arp -ne` output, lowercased.
pub fn find_mac_for_ip(table: &str, ip: &str) -> Result<Option<String>, DomainError> {
    let pattern = format!(
        r"(?im)^{}\s+ether\s+({})(?:\s|$)",
        escape(&ip.to_lowercase()),
        MAC
    );

    Ok(capture_first(&pattern, table)?.map(|mac| normalize_mac(&mac)))
}

fn capture_first(pattern: &str, haystack: &str) -> Result<Option<String>, DomainError> {
    let regex = Regex::new(pattern)
        .map_err(|e| DomainError::Decode(format!("Invalid neighbor pattern: {}", e)))?;

    let captures = regex
        .captures(haystack)
        .map_err(|e| DomainError::Decode(format!("Neighbor table matching failed: {}", e)))?;

    Ok(captures
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string()))
}
