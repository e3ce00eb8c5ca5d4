use serde_json::{Map, Value};

/// A composable predicate fragment rendered to the index's bool/term/match
/// query JSON. Clauses are plain values so the composer can be built and
/// asserted on without touching the transport.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryClause {
	And(Vec<QueryClause>),
	Or(Vec<QueryClause>),
	Term { field: &'static str, value: String },
	Terms { field: &'static str, values: Vec<String> },
	Match { field: &'static str, query: String },
}
impl QueryClause {
	pub fn to_value(&self) -> Value {
		match self {
			Self::And(clauses) => serde_json::json!({
				"bool": { "must": clauses.iter().map(Self::to_value).collect::<Vec<_>>() }
			}),
			Self::Or(clauses) => serde_json::json!({
				"bool": { "should": clauses.iter().map(Self::to_value).collect::<Vec<_>>() }
			}),
			Self::Term { field, value } => wrap("term", field, serde_json::json!({ "value": value })),
			Self::Terms { field, values } => {
				let mut terms = Map::new();

				terms.insert((*field).to_string(), serde_json::json!(values));

				Value::Object(Map::from_iter([("terms".to_string(), Value::Object(terms))]))
			},
			// Exact-token matching: every term of a multi-word query must hit
			// within the field.
			Self::Match { field, query } => wrap(
				"match",
				field,
				serde_json::json!({ "query": query, "operator": "and", "fuzziness": "0" }),
			),
		}
	}
}

fn wrap(kind: &str, field: &str, inner: Value) -> Value {
	let mut by_field = Map::new();

	by_field.insert(field.to_string(), inner);

	Value::Object(Map::from_iter([(kind.to_string(), Value::Object(by_field))]))
}

/// The fields a hit is allowed to carry out of the index. `Fields` is the
/// allow-list contract: enumerated per operation, never derived from caller
/// input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
	Full,
	Fields(&'static [&'static str]),
}
impl Projection {
	pub fn allows(&self, field: &str) -> bool {
		match self {
			Self::Full => true,
			Self::Fields(fields) => fields.contains(&field),
		}
	}
}

#[derive(Clone, Debug)]
pub struct ComposedQuery {
	pub query: QueryClause,
	pub projection: Projection,
	/// Sort key, always most-recent-first when present.
	pub sort_descending_by: Option<&'static str>,
	pub size: u32,
	pub from: Option<u32>,
	pub track_total_hits: bool,
}
impl ComposedQuery {
	pub fn to_body(&self) -> Value {
		let mut body = Map::new();

		if let Projection::Fields(fields) = self.projection {
			body.insert("_source".to_string(), serde_json::json!({ "includes": fields }));
		}

		body.insert("query".to_string(), self.query.to_value());

		if self.track_total_hits {
			body.insert("track_total_hits".to_string(), Value::Bool(true));
		}
		if let Some(field) = self.sort_descending_by {
			let mut key = Map::new();

			key.insert(field.to_string(), serde_json::json!({ "order": "desc" }));

			body.insert("sort".to_string(), Value::Array(vec![Value::Object(key)]));
		}

		body.insert("size".to_string(), serde_json::json!(self.size));

		if let Some(from) = self.from {
			body.insert("from".to_string(), serde_json::json!(from));
		}

		Value::Object(body)
	}
}
