pub mod known_hosts;
pub mod network;

pub use known_hosts::ReconcileKnownHostUseCase;
pub use network::{
    DiscoverLocalHostsUseCase, GetPrimaryAddressUseCase, GetTopologyUseCase,
    ResolveAddressUseCase,
};
