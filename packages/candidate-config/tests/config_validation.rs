use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use candidate_config::Error;

const SAMPLE_CONFIG_TOML: &str = r#"
[service]
http_bind = "127.0.0.1:8080"
log_level = "info"

[index]
url        = "http://127.0.0.1:9200"
index      = "veilederkandidat_current"
username   = "reader"
password   = "secret"
timeout_ms = 5000
"#;

fn sample_with<F>(mutate: F) -> String
where
	F: FnOnce(&mut toml::map::Map<String, Value>),
{
	let mut value: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample.");
	let root = value.as_table_mut().expect("Sample config must be a table.");

	mutate(root);

	toml::to_string(&value).expect("Failed to render sample config.")
}

fn write_temp_config(contents: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("Clock went backwards.");
	let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
	let path = env::temp_dir()
		.join(format!("candidate-config-{}-{unique}.toml", nanos.as_nanos()));

	fs::write(&path, contents).expect("Failed to write temp config.");

	path
}

fn load(contents: &str) -> candidate_config::Result<candidate_config::Config> {
	let path = write_temp_config(contents);
	let result = candidate_config::load(&path);

	let _ = fs::remove_file(&path);

	result
}

#[test]
fn loads_valid_config() {
	let cfg = load(SAMPLE_CONFIG_TOML).expect("Sample config should load.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8080");
	assert_eq!(cfg.index.index, "veilederkandidat_current");
	assert_eq!(cfg.index.username.as_deref(), Some("reader"));
}

#[test]
fn rejects_zero_timeout() {
	let contents = sample_with(|root| {
		let index = root.get_mut("index").and_then(Value::as_table_mut).expect("index table");

		index.insert("timeout_ms".to_string(), Value::Integer(0));
	});
	let err = load(&contents).expect_err("Zero timeout must be rejected.");

	assert!(matches!(err, Error::Validation { .. }));
	assert!(err.to_string().contains("index.timeout_ms"));
}

#[test]
fn rejects_username_without_password() {
	let contents = sample_with(|root| {
		let index = root.get_mut("index").and_then(Value::as_table_mut).expect("index table");

		index.remove("password");
	});
	let err = load(&contents).expect_err("Username without password must be rejected.");

	assert!(err.to_string().contains("set together"));
}

#[test]
fn normalizes_blank_credentials_to_none() {
	let contents = sample_with(|root| {
		let index = root.get_mut("index").and_then(Value::as_table_mut).expect("index table");

		index.insert("username".to_string(), Value::String("  ".to_string()));
		index.insert("password".to_string(), Value::String("".to_string()));
	});
	let cfg = load(&contents).expect("Blank credentials should normalize away.");

	assert!(cfg.index.username.is_none());
	assert!(cfg.index.password.is_none());
}

#[test]
fn strips_trailing_slash_from_index_url() {
	let contents = sample_with(|root| {
		let index = root.get_mut("index").and_then(Value::as_table_mut).expect("index table");

		index.insert("url".to_string(), Value::String("http://127.0.0.1:9200/".to_string()));
	});
	let cfg = load(&contents).expect("Trailing slash should be tolerated.");

	assert_eq!(cfg.index.url, "http://127.0.0.1:9200");
}
