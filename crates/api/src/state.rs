use lanscout_application::use_cases::{
    DiscoverLocalHostsUseCase, GetPrimaryAddressUseCase, GetTopologyUseCase,
    ReconcileKnownHostUseCase, ResolveAddressUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_topology: Arc<GetTopologyUseCase>,
    pub get_primary_address: Arc<GetPrimaryAddressUseCase>,
    pub discover_hosts: Arc<DiscoverLocalHostsUseCase>,
    pub resolve_address: Arc<ResolveAddressUseCase>,
    pub reconcile_known_host: Arc<ReconcileKnownHostUseCase>,
}
