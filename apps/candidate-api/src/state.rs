use std::sync::Arc;

use candidate_index::IndexClient;
use candidate_service::{CandidateService, TracingAuditSink};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<CandidateService>,
}
impl AppState {
	pub fn new(config: &candidate_config::Config) -> color_eyre::Result<Self> {
		let client = IndexClient::new(&config.index)?;
		let service = CandidateService::new(Arc::new(client), Arc::new(TracingAuditSink));

		Ok(Self { service: Arc::new(service) })
	}
}
