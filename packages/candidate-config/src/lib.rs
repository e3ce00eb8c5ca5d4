mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Index, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.index.url.trim().is_empty() {
		return Err(Error::Validation { message: "index.url must be non-empty.".to_string() });
	}
	if cfg.index.index.trim().is_empty() {
		return Err(Error::Validation { message: "index.index must be non-empty.".to_string() });
	}
	if cfg.index.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "index.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.index.username.is_some() != cfg.index.password.is_some() {
		return Err(Error::Validation {
			message: "index.username and index.password must be set together.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.index.username.as_deref().map(|name| name.trim().is_empty()).unwrap_or(false) {
		cfg.index.username = None;
	}
	if cfg.index.password.as_deref().map(|secret| secret.trim().is_empty()).unwrap_or(false) {
		cfg.index.password = None;
	}
	if cfg.index.url.ends_with('/') {
		cfg.index.url.truncate(cfg.index.url.trim_end_matches('/').len());
	}
}
