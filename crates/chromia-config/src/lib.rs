//! Configuration loading for the adapter service.
//!
//! Configuration comes from an optional TOML, JSON or YAML file, with
//! `${VAR}` placeholders substituted from the environment, followed by
//! `CHROMIA_`-prefixed environment overrides. Without a file the built-in
//! network defaults are used.

pub mod types;

pub use types::*;

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
	Toml,
	Json,
	Yaml,
}

impl ConfigFormat {
	/// Picks the format from a file extension. Unknown extensions are an error.
	pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
		match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Ok(ConfigFormat::Toml),
			Some("json") => Ok(ConfigFormat::Json),
			Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
			_ => Err(ConfigError::ParseError(format!(
				"Unsupported config format: {:?}",
				path
			))),
		}
	}
}

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
	file_path: Option<PathBuf>,
	env_prefix: String,
}

impl Default for ConfigLoader {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "CHROMIA_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_path_buf());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	/// Loads, overrides and validates the configuration.
	pub async fn load(&self) -> Result<AdapterConfig, ConfigError> {
		self.load_with(|name| env::var(name).ok()).await
	}

	/// Same as [`ConfigLoader::load`] with an explicit variable lookup.
	pub async fn load_with<F>(&self, lookup: F) -> Result<AdapterConfig, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = match &self.file_path {
			Some(path) => self.load_from_file(path, &lookup).await?,
			None => {
				info!("No configuration file given, using built-in network defaults");
				AdapterConfig::default()
			}
		};

		self.apply_env_overrides(&mut config, &lookup)?;
		validate_config(&config)?;

		Ok(config)
	}

	async fn load_from_file<F>(&self, path: &Path, lookup: &F) -> Result<AdapterConfig, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		info!("Loading configuration from {:?}", path);

		if !path.exists() {
			return Err(ConfigError::FileNotFound(path.display().to_string()));
		}

		let format = ConfigFormat::from_path(path)?;
		let content = tokio::fs::read_to_string(path).await?;
		let substituted = substitute_env_vars(&content, lookup)?;

		parse_config(&substituted, format)
	}

	fn apply_env_overrides<F>(&self, config: &mut AdapterConfig, lookup: &F) -> Result<(), ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let var = |suffix: &str| lookup(&format!("{}{}", self.env_prefix, suffix));

		if let Some(log_level) = var("LOG_LEVEL") {
			debug!("Overriding log level from environment");
			config.service.log_level = log_level;
		}

		if let Some(http_port) = var("HTTP_PORT") {
			config.service.http_port = http_port
				.parse()
				.map_err(|e| ConfigError::ValidationError(format!("Invalid HTTP port: {}", e)))?;
		}

		if let Some(url) = var("MAINNET_RPC_URL") {
			debug!("Overriding mainnet RPC URL from environment");
			config.networks.main.rpc_url = url;
		}

		if let Some(url) = var("TESTNET_RPC_URL") {
			debug!("Overriding testnet RPC URL from environment");
			config.networks.testnet.rpc_url = url;
		}

		if let Some(rid) = var("MAINNET_BLOCKCHAIN_RID") {
			config.networks.main.blockchain_rid = Some(rid);
		}

		if let Some(rid) = var("TESTNET_BLOCKCHAIN_RID") {
			config.networks.testnet.blockchain_rid = Some(rid);
		}

		if let Some(encoding) = var("ACCOUNT_ID_ENCODING") {
			config.ledger.account_id_encoding = encoding
				.parse()
				.map_err(|e: chromia_types::AdapterError| {
					ConfigError::ValidationError(e.to_string())
				})?;
		}

		Ok(())
	}
}

/// Parses configuration text in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<AdapterConfig, ConfigError> {
	match format {
		ConfigFormat::Toml => toml::from_str(content)
			.map_err(|e| ConfigError::ParseError(format!("Failed to parse TOML: {}", e))),
		ConfigFormat::Json => serde_json::from_str(content)
			.map_err(|e| ConfigError::ParseError(format!("Failed to parse JSON: {}", e))),
		ConfigFormat::Yaml => serde_yaml::from_str(content)
			.map_err(|e| ConfigError::ParseError(format!("Failed to parse YAML: {}", e))),
	}
}

/// Replaces `${VAR_NAME}` placeholders. A missing variable is an error.
fn substitute_env_vars<F>(content: &str, lookup: &F) -> Result<String, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let re = regex::Regex::new(r"\$\{([^}]+)\}")
		.map_err(|e| ConfigError::ParseError(e.to_string()))?;

	let mut result = content.to_string();
	for cap in re.captures_iter(content) {
		let full_match = &cap[0];
		let var_name = &cap[1];

		let value = lookup(var_name).ok_or_else(|| ConfigError::EnvVarNotFound(var_name.to_string()))?;
		result = result.replace(full_match, &value);
	}

	Ok(result)
}

/// Checks endpoint URLs and blockchain RIDs.
pub fn validate_config(config: &AdapterConfig) -> Result<(), ConfigError> {
	for (key, network) in [
		("main", &config.networks.main),
		("testnet", &config.networks.testnet),
	] {
		for (field, url) in [
			("rpc_url", &network.rpc_url),
			("explorer_url", &network.explorer_url),
		] {
			if !(url.starts_with("http://") || url.starts_with("https://")) {
				return Err(ConfigError::ValidationError(format!(
					"networks.{}.{} must start with http:// or https://",
					key, field
				)));
			}
		}

		if let Some(rid) = &network.blockchain_rid {
			if rid.len() != 64 || hex::decode(rid).is_err() {
				return Err(ConfigError::ValidationError(format!(
					"networks.{}.blockchain_rid must be 64 hex characters",
					key
				)));
			}
		}
	}

	Ok(())
}
