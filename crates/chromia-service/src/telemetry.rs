//! Tracing setup.
//!
//! The subscriber is installed before configuration is loaded so the loader's
//! own logs are kept. Its filter sits behind a reload handle, letting the
//! configured log level take over once the file has been read.

use anyhow::Result;
use tracing_subscriber::{
	layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Installs the global subscriber. `RUST_LOG` wins over `log_level`.
pub fn setup_tracing(log_level: &str, json: bool) -> Result<FilterHandle> {
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
	let (filter, handle) = reload::Layer::new(env_filter);

	let registry = tracing_subscriber::registry().with(filter);
	if json {
		registry
			.with(tracing_subscriber::fmt::layer().json())
			.try_init()?;
	} else {
		registry.with(tracing_subscriber::fmt::layer()).try_init()?;
	}

	Ok(handle)
}

/// Switches to the configured level unless the command line or `RUST_LOG`
/// already chose one.
pub fn apply_configured_level(
	handle: &FilterHandle,
	cli_level: Option<&str>,
	configured: &str,
) -> Result<()> {
	if cli_level.is_some() || std::env::var_os("RUST_LOG").is_some() {
		return Ok(());
	}

	handle.reload(EnvFilter::new(configured))?;
	Ok(())
}
