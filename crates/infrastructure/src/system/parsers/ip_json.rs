use lanscout_domain::{DomainError, NetworkInterface, Route};
use serde::de::DeserializeOwned;

/// Decode `ip -j route list default`.
pub fn decode_routes(output: &str) -> Result<Vec<Route>, DomainError> {
    decode_list(output, "route")
}

/// Decode `ip -j -family inet addr show`.
///
/// iproute2 4.x prints `{}` for every link without an address in the requested
/// family; those entries carry no name and are dropped.
pub fn decode_interfaces(output: &str) -> Result<Vec<NetworkInterface>, DomainError> {
    let interfaces: Vec<NetworkInterface> = decode_list(output, "interface")?;
    Ok(interfaces
        .into_iter()
        .filter(|iface| !iface.name.is_empty())
        .collect())
}

// Older iproute2 releases print nothing at all instead of `[]` for an empty table.
fn decode_list<T: DeserializeOwned>(output: &str, what: &str) -> Result<Vec<T>, DomainError> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(trimmed)
        .map_err(|e| DomainError::Decode(format!("Invalid {} table: {}", what, e)))
}
