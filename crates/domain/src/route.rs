use serde::Deserialize;

/// One row of the kernel routing table as reported by `ip -j route`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    #[serde(rename = "dst", default)]
    pub destination: String,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(rename = "dev")]
    pub interface: String,
    #[serde(default)]
    pub metric: Option<u32>,
    #[serde(default)]
    pub flags: Vec<String>,
}

/// Interface names referenced by `routes`, deduplicated in first-seen order.
pub fn route_interface_names(routes: &[Route]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(routes.len());
    for route in routes {
        if !names.iter().any(|name| name == &route.interface) {
            names.push(route.interface.clone());
        }
    }
    names
}
