use candidate_index::Projection;

use crate::{
	Caller, CandidateService, Result, SearchEnvelope, access::Operation, audit, query, retrieve,
};

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct LookupRequest {
	pub candidate_number: String,
}

impl CandidateService {
	/// Full-CV lookup by candidate number. A miss is a 200-equivalent empty
	/// envelope, not an error.
	pub async fn lookup_cv(&self, req: LookupRequest, caller: &Caller) -> Result<SearchEnvelope> {
		self.lookup(req, caller, Operation::CvLookup, Projection::Full).await
	}

	/// Contact/caseworker summary lookup, trimmed to the summary
	/// allow-list.
	pub async fn lookup_summary(
		&self,
		req: LookupRequest,
		caller: &Caller,
	) -> Result<SearchEnvelope> {
		self.lookup(
			req,
			caller,
			Operation::SummaryLookup,
			Projection::Fields(query::SUMMARY_PROJECTION),
		)
		.await
	}

	async fn lookup(
		&self,
		req: LookupRequest,
		caller: &Caller,
		operation: Operation,
		projection: Projection,
	) -> Result<SearchEnvelope> {
		self.authorize(operation, caller)?;

		let query = query::compose_lookup(&req.candidate_number, projection);
		let result = retrieve::execute(self.backend.as_ref(), &query).await?;

		audit::trigger(&result.hits, &caller.ident, operation, self.audit.as_ref());

		Ok(result.into_envelope())
	}
}
