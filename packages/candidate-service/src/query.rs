use candidate_index::{ComposedQuery, Projection, QueryClause};

use crate::filter::{self, FilterParameters};

pub(crate) const CANDIDATE_NUMBER_FIELD: &str = "kandidatnr";
pub(crate) const PERSONAL_ID_FIELD: &str = "fodselsnummer";
const ELIGIBILITY_FIELD: &str = "kvalifiseringsgruppekode";
// Only candidates in one of these eligibility groups are ever searchable.
const ELIGIBLE_GROUP_CODES: [&str; 4] = ["BATT", "BFORM", "IKVAL", "VARIG"];
const RECENCY_SORT_FIELD: &str = "tidsstempel";
const SEARCH_PAGE_SIZE: u32 = 25;

/// Field allow-list for search hits.
pub const SEARCH_PROJECTION: &[&str] = &[
	"fodselsnummer",
	"fornavn",
	"etternavn",
	"arenaKandidatnr",
	"kvalifiseringsgruppekode",
	"yrkeJobbonskerObj",
	"geografiJobbonsker",
	"kommuneNavn",
	"postnummer",
];

/// Field allow-list for the contact/caseworker summary lookup.
pub const SUMMARY_PROJECTION: &[&str] = &[
	"fornavn",
	"etternavn",
	"arenaKandidatnr",
	"fodselsdato",
	"fodselsnummer",
	"adresselinje1",
	"postnummer",
	"poststed",
	"epostadresse",
	"telefon",
	"veilederIdent",
	"veilederVisningsnavn",
	"veilederEpost",
];

fn eligibility_clause() -> QueryClause {
	QueryClause::Terms {
		field: ELIGIBILITY_FIELD,
		values: ELIGIBLE_GROUP_CODES.iter().map(|code| (*code).to_string()).collect(),
	}
}

/// Baseline eligibility clause AND every active filter clause, with the
/// fixed projection, recency sort and pagination bounds attached.
pub(crate) fn compose_search(params: &FilterParameters) -> ComposedQuery {
	let mut clauses = vec![eligibility_clause()];

	clauses.extend(filter::active_clauses(params));

	ComposedQuery {
		query: QueryClause::And(clauses),
		projection: Projection::Fields(SEARCH_PROJECTION),
		sort_descending_by: Some(RECENCY_SORT_FIELD),
		size: SEARCH_PAGE_SIZE,
		from: Some(0),
		track_total_hits: true,
	}
}

pub(crate) fn compose_lookup(candidate_number: &str, projection: Projection) -> ComposedQuery {
	ComposedQuery {
		query: QueryClause::Term {
			field: CANDIDATE_NUMBER_FIELD,
			value: candidate_number.to_string(),
		},
		projection,
		sort_descending_by: None,
		size: 1,
		from: None,
		track_total_hits: false,
	}
}
