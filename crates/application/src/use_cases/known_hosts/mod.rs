pub mod reconcile_known_host;

pub use reconcile_known_host::ReconcileKnownHostUseCase;
