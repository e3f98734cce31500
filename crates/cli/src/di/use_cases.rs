use super::Adapters;
use lanscout_api::AppState;
use lanscout_application::use_cases::{
    DiscoverLocalHostsUseCase, GetPrimaryAddressUseCase, GetTopologyUseCase,
    ReconcileKnownHostUseCase, ResolveAddressUseCase,
};
use lanscout_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub get_topology: Arc<GetTopologyUseCase>,
    pub get_primary_address: Arc<GetPrimaryAddressUseCase>,
    pub discover_hosts: Arc<DiscoverLocalHostsUseCase>,
    pub resolve_address: Arc<ResolveAddressUseCase>,
    pub reconcile_known_host: Arc<ReconcileKnownHostUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, adapters: &Adapters) -> Self {
        Self {
            get_topology: Arc::new(GetTopologyUseCase::new(adapters.topology.clone())),
            get_primary_address: Arc::new(GetPrimaryAddressUseCase::new(
                adapters.topology.clone(),
                config.discovery.primary_address_policy,
            )),
            discover_hosts: Arc::new(DiscoverLocalHostsUseCase::new(
                adapters.topology.clone(),
                adapters.scanner.clone(),
            )),
            resolve_address: Arc::new(ResolveAddressUseCase::new(adapters.resolver.clone())),
            reconcile_known_host: Arc::new(ReconcileKnownHostUseCase::new(
                adapters.known_hosts.clone(),
                adapters.key_scanner.clone(),
                config.known_hosts.key_type.clone(),
            )),
        }
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            get_topology: self.get_topology,
            get_primary_address: self.get_primary_address,
            discover_hosts: self.discover_hosts,
            resolve_address: self.resolve_address,
            reconcile_known_host: self.reconcile_known_host,
        }
    }
}
