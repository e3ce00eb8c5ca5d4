use crate::{
	Caller, CandidateService, Result, SearchEnvelope, access::Operation, audit,
	filter::FilterParameters, query, retrieve,
};

impl CandidateService {
	/// Filtered candidate search: baseline eligibility restriction AND all
	/// active filter clauses, newest first, one fixed-size page.
	pub async fn search(
		&self,
		params: FilterParameters,
		caller: &Caller,
	) -> Result<SearchEnvelope> {
		self.authorize(Operation::Search, caller)?;

		let query = query::compose_search(&params);
		let result = retrieve::execute(self.backend.as_ref(), &query).await?;

		audit::trigger(&result.hits, &caller.ident, Operation::Search, self.audit.as_ref());

		Ok(result.into_envelope())
	}
}
