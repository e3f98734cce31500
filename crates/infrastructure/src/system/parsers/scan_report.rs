use fancy_regex::Regex;
use lanscout_domain::{DomainError, HostRecord};
use std::net::Ipv4Addr;
use std::sync::LazyLock;
use tracing::{debug, trace};

const REPORT_MARKER: &str = "Nmap scan report for ";

// First IPv4 of the block, then (anywhere later) the link-layer line. The
// vendor runs to the last `)` of that line, so it may contain parentheses.
static HOST_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?sm)((?:\d{1,3}\.){3}\d{1,3}).*?MAC Address: ((?:[0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2})[ \t]+\(([^\n]*)\)[ \t]*\r?$",
    )
    .expect("host block pattern is valid")
});

/// Extract hosts with a resolvable MAC from an nmap text report.
///
/// Blocks without a `MAC Address:` line (the scanning host itself, routed
/// peers) are skipped.
pub fn parse_scan_report(report: &str) -> Result<Vec<HostRecord>, DomainError> {
    let mut hosts = Vec::new();

    for block in report.split(REPORT_MARKER).skip(1) {
        trace!(block, "Scan report block");

        let captures = HOST_BLOCK
            .captures(block)
            .map_err(|e| DomainError::Decode(format!("Scan report matching failed: {}", e)))?;

        let Some(captures) = captures else {
            debug!(
                host = block.lines().next().unwrap_or_default(),
                "Skipping host without link-layer address"
            );
            continue;
        };

        let (Some(ip), Some(mac), Some(vendor)) = (captures.get(1), captures.get(2), captures.get(3))
        else {
            continue;
        };

        match ip.as_str().parse::<Ipv4Addr>() {
            Ok(ip) => hosts.push(HostRecord::new(ip, mac.as_str(), vendor.as_str())),
            Err(_) => debug!(ip = ip.as_str(), "Skipping host with malformed address"),
        }
    }

    Ok(hosts)
}
