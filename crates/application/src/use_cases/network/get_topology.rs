use crate::ports::TopologyReader;
use lanscout_domain::{DomainError, InterfaceClassification};
use std::sync::Arc;
use tracing::instrument;

pub struct GetTopologyUseCase {
    topology: Arc<dyn TopologyReader>,
}

impl GetTopologyUseCase {
    pub fn new(topology: Arc<dyn TopologyReader>) -> Self {
        Self { topology }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<InterfaceClassification, DomainError> {
        super::read_classification(self.topology.as_ref()).await
    }
}
