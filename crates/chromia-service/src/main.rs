use anyhow::{Context, Result};
use chromia_adapter::ChromiaAdapter;
use chromia_config::{AdapterConfig, ConfigLoader};
use chromia_service::api::ApiServer;
use chromia_service::cli::{Args, Command, LinkKind};
use chromia_service::service;
use chromia_service::telemetry;
use chromia_types::TransferRequest;
use clap::Parser;
use serde::Serialize;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	// Initialize tracing, then narrow it to the configured level
	let filter = telemetry::setup_tracing(
		args.log_level.as_deref().unwrap_or("info"),
		args.json_logs,
	)?;
	let config = load_config(&args).await?;
	telemetry::apply_configured_level(
		&filter,
		args.log_level.as_deref(),
		&config.service.log_level,
	)?;

	let adapter = service::build_adapter(&config);

	match args.command.unwrap_or(Command::Serve { port: None }) {
		Command::Serve { port } => serve(config, adapter, port).await,
		Command::Validate => validate_config(&config, &adapter),
		Command::Balance {
			network,
			account_id,
			asset_id,
			blockchain_rid,
		} => {
			let balance = adapter
				.get_balance(&network, &account_id, &asset_id, &blockchain_rid)
				.await
				.context("Failed to fetch balance")?;
			print_json(&serde_json::json!({ "balance": balance }))
		}
		Command::Transaction {
			tx_id,
			network,
			blockchain_rid,
		} => match adapter.get_transaction(&tx_id, &network, &blockchain_rid).await {
			Some(record) => print_json(&record),
			None => anyhow::bail!("Transaction {} not found", tx_id),
		},
		Command::Send {
			to,
			amount,
			decimals,
			token_address,
			public_key,
			blockchain_rid,
			network,
			private_key,
		} => {
			let result = adapter
				.send_transaction(TransferRequest {
					to,
					amount,
					network,
					private_key,
					decimals,
					token_address,
					public_key,
					blockchain_rid,
				})
				.await
				.context("Failed to send transaction")?;
			print_json(&result)
		}
		Command::ValidateAddress { address } => {
			let valid = adapter.is_valid_wallet_address(&address).await;
			print_json(&serde_json::json!({ "address": address, "valid": valid }))
		}
		Command::Fees {
			network,
			account_id,
		} => {
			let fees = adapter.get_fee_stats(&network, &account_id).await?;
			print_json(&fees)
		}
		Command::Link {
			kind,
			value,
			network,
		} => {
			let link = match kind {
				LinkKind::Transaction => adapter.get_transaction_link(&value, &network),
				LinkKind::Wallet => adapter.get_wallet_link(&value, &network),
			};
			println!("{}", link);
			Ok(())
		}
	}
}

async fn load_config(args: &Args) -> Result<AdapterConfig> {
	let mut loader = ConfigLoader::new();
	if let Some(path) = &args.config {
		loader = loader.with_file(path);
	}

	loader.load().await.context("Failed to load configuration")
}

async fn serve(config: AdapterConfig, adapter: ChromiaAdapter, port: Option<u16>) -> Result<()> {
	info!("Starting {}", config.service.name);

	let port = port.unwrap_or(config.service.http_port);
	let server = ApiServer::new(config.service.host.clone(), port, Arc::new(adapter));

	server
		.run(setup_shutdown_signal())
		.await
		.context("HTTP server failed")?;

	info!("{} stopped", config.service.name);
	Ok(())
}

fn validate_config(config: &AdapterConfig, adapter: &ChromiaAdapter) -> Result<()> {
	info!("Configuration is valid");
	info!("Service name: {}", config.service.name);
	info!("HTTP: {}:{}", config.service.host, config.service.http_port);
	info!(
		"Mainnet: {} (explorer {})",
		config.networks.main.rpc_url, config.networks.main.explorer_url
	);
	info!(
		"Testnet: {} (explorer {})",
		config.networks.testnet.rpc_url, config.networks.testnet.explorer_url
	);
	info!(
		"Account id encoding: {:?}",
		config.ledger.account_id_encoding
	);
	if adapter.transfers_enabled() {
		info!("Transfers: enabled");
	} else {
		warn!("Transfers: disabled (no keystore interactor)");
	}

	Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

async fn setup_shutdown_signal() {
	let ctrl_c = async {
		signal::ctrl_c()
			.await
			.expect("failed to install Ctrl+C handler");
	};

	#[cfg(unix)]
	let terminate = async {
		signal::unix::signal(signal::unix::SignalKind::terminate())
			.expect("failed to install signal handler")
			.recv()
			.await;
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}

	info!("Shutdown signal received");
}
