use serde_json::{Map, Value};

use candidate_index::{ComposedQuery, Projection};

use crate::{Result, SearchBackend};

/// Normalized retrieval outcome: shaped hits plus the engine-reported
/// total, which is independent of the page size that came back.
#[derive(Clone, Debug)]
pub(crate) struct RetrievalResult {
	pub(crate) total: u64,
	pub(crate) hits: Vec<Map<String, Value>>,
}
impl RetrievalResult {
	pub(crate) fn into_envelope(self) -> SearchEnvelope {
		SearchEnvelope {
			hits: EnvelopeHits { total: TotalHits { value: self.total }, hits: self.hits },
		}
	}
}

/// Stable response shape shared by search and both lookups. A miss is the
/// same envelope with zero hits.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SearchEnvelope {
	pub hits: EnvelopeHits,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnvelopeHits {
	pub total: TotalHits,
	pub hits: Vec<Map<String, Value>>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TotalHits {
	pub value: u64,
}

pub(crate) async fn execute(
	backend: &dyn SearchBackend,
	query: &ComposedQuery,
) -> Result<RetrievalResult> {
	let body = query.to_body();
	let raw = backend.search(&body).await?;
	let hits = raw.hits.into_iter().map(|hit| shape(hit, query.projection)).collect();

	Ok(RetrievalResult { total: raw.total, hits })
}

/// The projection allow-list is enforced again on the way out, so fields
/// outside it never reach a response even if the store returns them.
fn shape(hit: Map<String, Value>, projection: Projection) -> Map<String, Value> {
	match projection {
		Projection::Full => hit,
		Projection::Fields(_) =>
			hit.into_iter().filter(|(field, _)| projection.allows(field)).collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shaping_strips_fields_outside_the_allow_list() {
		let mut hit = Map::new();

		hit.insert("fornavn".to_string(), Value::String("Ola".to_string()));
		hit.insert("fodselsnummer".to_string(), Value::String("12345678910".to_string()));

		let shaped = shape(hit, Projection::Fields(&["fornavn"]));

		assert_eq!(shaped.len(), 1);
		assert_eq!(shaped["fornavn"], "Ola");
	}

	#[test]
	fn full_projection_passes_the_document_through() {
		let mut hit = Map::new();

		hit.insert("fornavn".to_string(), Value::String("Ola".to_string()));
		hit.insert("sprak".to_string(), Value::Array(vec![]));

		let shaped = shape(hit.clone(), Projection::Full);

		assert_eq!(shaped, hit);
	}

	#[test]
	fn envelope_serializes_total_before_hits() {
		let result = RetrievalResult { total: 42, hits: vec![Map::new()] };
		let json = serde_json::to_value(result.into_envelope()).expect("serialize failed");

		assert_eq!(json, serde_json::json!({ "hits": { "total": { "value": 42 }, "hits": [{}] } }));
	}
}
