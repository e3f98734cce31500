pub mod discover_local_hosts;
pub mod get_primary_address;
pub mod get_topology;
pub mod resolve_address;

pub use discover_local_hosts::DiscoverLocalHostsUseCase;
pub use get_primary_address::GetPrimaryAddressUseCase;
pub use get_topology::GetTopologyUseCase;
pub use resolve_address::ResolveAddressUseCase;

use crate::ports::TopologyReader;
use lanscout_domain::{DomainError, InterfaceClassification};
use tracing::debug;

async fn read_classification(
    topology: &dyn TopologyReader,
) -> Result<InterfaceClassification, DomainError> {
    let default_route_interfaces = topology.list_default_route_interfaces().await?;
    let interfaces = topology.list_interfaces().await?;

    let classification = InterfaceClassification::classify(&default_route_interfaces, interfaces);

    debug!(
        external = ?classification.external_names(),
        local = ?classification.local_names(),
        "Interfaces classified"
    );

    Ok(classification)
}
