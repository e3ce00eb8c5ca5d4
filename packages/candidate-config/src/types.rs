use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub index: Index,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

/// Connection settings for the candidate document index.
#[derive(Debug, Deserialize)]
pub struct Index {
	pub url: String,
	/// Index (or alias) name the `_search` endpoint is issued against.
	pub index: String,
	pub username: Option<String>,
	pub password: Option<String>,
	pub timeout_ms: u64,
}
