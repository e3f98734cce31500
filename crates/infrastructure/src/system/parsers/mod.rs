//! Decoders for the output of the external tools.
//!
//! Each parser is pinned by tests to literal samples of the tool output, so a
//! format change in a tool shows up here and not in the adapters.
pub mod ip_json;
pub mod neighbor_table;
pub mod scan_report;

pub use ip_json::{decode_interfaces, decode_routes};
pub use neighbor_table::{find_ip_for_mac, find_mac_for_ip};
pub use scan_report::parse_scan_report;
