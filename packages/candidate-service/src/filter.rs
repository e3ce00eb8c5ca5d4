use candidate_index::QueryClause;

pub(crate) const OCCUPATION_TITLE_FIELD: &str = "yrkeJobbonskerObj.styrkBeskrivelse";
pub(crate) const OCCUPATION_ALIAS_FIELD: &str = "yrkeJobbonskerObj.sokeTitler";
pub(crate) const LOCATION_CODE_FIELD: &str = "geografiJobbonsker.geografiKode";

/// Optional search criteria, built once per request and immutable after
/// construction. Missing or unusable values are dropped here, leaving the
/// matching filter inactive instead of failing the request.
#[derive(Clone, Debug, Default)]
pub struct FilterParameters {
	pub occupations: Vec<String>,
	pub location: Option<String>,
}
impl FilterParameters {
	pub fn sanitized(occupations: Vec<String>, location: Option<String>) -> Self {
		let occupations = occupations
			.into_iter()
			.map(|value| value.trim().to_string())
			.filter(|value| !value.is_empty())
			.collect();
		let location =
			location.map(|value| value.trim().to_string()).filter(|value| !value.is_empty());

		Self { occupations, location }
	}
}

/// One self-contained search rule. `absorb` is called exactly once, before
/// `is_active`; `clause` is only valid on an active filter.
pub(crate) trait Filter {
	fn absorb(&mut self, params: &FilterParameters);
	fn is_active(&self) -> bool;
	fn clause(&self) -> QueryClause;
}

/// Ordered filter registry, built fresh per request so no filter state
/// crosses request boundaries.
pub(crate) fn registered() -> Vec<Box<dyn Filter>> {
	vec![Box::new(OccupationFilter::default()), Box::new(LocationFilter::default())]
}

pub(crate) fn active_clauses(params: &FilterParameters) -> Vec<QueryClause> {
	let mut filters = registered();

	for filter in &mut filters {
		filter.absorb(params);
	}

	filters.iter().filter(|filter| filter.is_active()).map(|filter| filter.clause()).collect()
}

#[derive(Default)]
struct OccupationFilter {
	values: Vec<String>,
}
impl Filter for OccupationFilter {
	fn absorb(&mut self, params: &FilterParameters) {
		self.values = params.occupations.clone();
	}

	fn is_active(&self) -> bool {
		!self.values.is_empty()
	}

	fn clause(&self) -> QueryClause {
		debug_assert!(self.is_active());

		// OR over the requested occupations; each value may hit either the
		// occupation title or the free-text alias field.
		QueryClause::Or(
			self.values
				.iter()
				.map(|value| {
					QueryClause::Or(vec![
						QueryClause::Match {
							field: OCCUPATION_TITLE_FIELD,
							query: value.clone(),
						},
						QueryClause::Match {
							field: OCCUPATION_ALIAS_FIELD,
							query: value.clone(),
						},
					])
				})
				.collect(),
		)
	}
}

#[derive(Default)]
struct LocationFilter {
	code: Option<String>,
}
impl Filter for LocationFilter {
	fn absorb(&mut self, params: &FilterParameters) {
		self.code = params.location.clone();
	}

	fn is_active(&self) -> bool {
		self.code.is_some()
	}

	fn clause(&self) -> QueryClause {
		debug_assert!(self.is_active());

		QueryClause::Term {
			field: LOCATION_CODE_FIELD,
			value: self.code.clone().unwrap_or_default(),
		}
	}
}
