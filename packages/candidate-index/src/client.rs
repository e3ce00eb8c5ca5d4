use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Hits and the engine-reported total, before any shaping. The total always
/// reflects what the engine counted, not the page that came back.
#[derive(Clone, Debug)]
pub struct RawSearchResponse {
	pub total: u64,
	pub hits: Vec<Map<String, Value>>,
}

/// `_search` client for the candidate document index.
pub struct IndexClient {
	client: Client,
	search_url: String,
	username: Option<String>,
	password: Option<String>,
}
impl IndexClient {
	pub fn new(cfg: &candidate_config::Index) -> Result<Self> {
		let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;

		Ok(Self {
			client,
			search_url: format!("{}/{}/_search", cfg.url, cfg.index),
			username: cfg.username.clone(),
			password: cfg.password.clone(),
		})
	}

	pub async fn search(&self, body: &Value) -> Result<RawSearchResponse> {
		let mut request = self.client.post(&self.search_url).json(body);

		if let Some(username) = self.username.as_deref() {
			request = request.basic_auth(username, self.password.as_deref());
		}

		let response = request.send().await?;
		let status = response.status();

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();

			return Err(Error::Status { status: status.as_u16(), body });
		}

		let json: Value = response.json().await?;

		parse_search_response(json)
	}
}

pub fn parse_search_response(json: Value) -> Result<RawSearchResponse> {
	let total = json
		.pointer("/hits/total/value")
		.and_then(Value::as_u64)
		.ok_or_else(|| Error::InvalidResponse {
			message: "Search response is missing hits.total.value.".to_string(),
		})?;
	let raw_hits = json
		.pointer("/hits/hits")
		.and_then(Value::as_array)
		.ok_or_else(|| Error::InvalidResponse {
			message: "Search response is missing hits.hits.".to_string(),
		})?;
	let mut hits = Vec::with_capacity(raw_hits.len());

	for hit in raw_hits {
		// Hits without a source document carry nothing worth returning.
		let Some(source) = hit.get("_source").and_then(Value::as_object) else {
			continue;
		};

		hits.push(source.clone());
	}

	Ok(RawSearchResponse { total, hits })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_total_and_sources() {
		let json = serde_json::json!({
			"took": 3,
			"hits": {
				"total": { "value": 2, "relation": "eq" },
				"hits": [
					{ "_id": "1", "_source": { "fornavn": "Ola" } },
					{ "_id": "2", "_source": { "fornavn": "Kari" } }
				]
			}
		});
		let parsed = parse_search_response(json).expect("parse failed");

		assert_eq!(parsed.total, 2);
		assert_eq!(parsed.hits.len(), 2);
		assert_eq!(parsed.hits[0]["fornavn"], "Ola");
	}

	#[test]
	fn skips_hits_without_source() {
		let json = serde_json::json!({
			"hits": {
				"total": { "value": 2 },
				"hits": [
					{ "_id": "1" },
					{ "_id": "2", "_source": { "fornavn": "Kari" } }
				]
			}
		});
		let parsed = parse_search_response(json).expect("parse failed");

		assert_eq!(parsed.total, 2);
		assert_eq!(parsed.hits.len(), 1);
	}

	#[test]
	fn rejects_response_without_total() {
		let json = serde_json::json!({ "hits": { "hits": [] } });

		assert!(parse_search_response(json).is_err());
	}

	#[test]
	fn zero_hits_is_a_normal_response() {
		let json = serde_json::json!({ "hits": { "total": { "value": 0 }, "hits": [] } });
		let parsed = parse_search_response(json).expect("parse failed");

		assert_eq!(parsed.total, 0);
		assert!(parsed.hits.is_empty());
	}
}
