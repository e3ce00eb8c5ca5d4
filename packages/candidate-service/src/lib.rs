pub mod access;
pub mod audit;
mod error;
pub mod filter;
pub mod lookup;
mod query;
mod retrieve;
pub mod search;

use std::{collections::HashSet, future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

pub use access::{Operation, Role, decide, parse_roles};
pub use audit::{AuditEvent, AuditSink, TracingAuditSink};
use candidate_index::{IndexClient, RawSearchResponse};
pub use error::{Error, Result};
pub use filter::FilterParameters;
pub use lookup::LookupRequest;
pub use query::{SEARCH_PROJECTION, SUMMARY_PROJECTION};
pub use retrieve::{EnvelopeHits, SearchEnvelope, TotalHits};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The index transport seam. The production implementation posts to the
/// `_search` endpoint; tests substitute an in-process fake.
pub trait SearchBackend
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		body: &'a Value,
	) -> BoxFuture<'a, candidate_index::Result<RawSearchResponse>>;
}

impl SearchBackend for IndexClient {
	fn search<'a>(
		&'a self,
		body: &'a Value,
	) -> BoxFuture<'a, candidate_index::Result<RawSearchResponse>> {
		Box::pin(IndexClient::search(self, body))
	}
}

/// Verified caller context for one request, supplied by the identity
/// collaborator in front of this service.
#[derive(Clone, Debug)]
pub struct Caller {
	pub ident: String,
	pub roles: HashSet<Role>,
}

pub struct CandidateService {
	pub backend: Arc<dyn SearchBackend>,
	pub audit: Arc<dyn AuditSink>,
}
impl CandidateService {
	pub fn new(backend: Arc<dyn SearchBackend>, audit: Arc<dyn AuditSink>) -> Self {
		Self { backend, audit }
	}

	/// Gate every operation before anything touches the index. A denial
	/// short-circuits with no query and no audit entry.
	pub(crate) fn authorize(&self, operation: Operation, caller: &Caller) -> Result<()> {
		if access::decide(operation, &caller.roles) {
			Ok(())
		} else {
			tracing::info!(
				operation = operation.as_str(),
				ident = %caller.ident,
				"Denied by access policy."
			);

			Err(Error::Forbidden { operation })
		}
	}
}
