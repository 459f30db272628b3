//! Command-line interface definitions.

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chromia-adapter")]
#[command(about = "Chromia blockchain integration adapter", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// Path to configuration file (TOML, JSON or YAML)
	#[arg(short, long, env = "CHROMIA_CONFIG_FILE")]
	pub config: Option<PathBuf>,

	/// Log level override (trace, debug, info, warn, error)
	#[arg(short, long)]
	pub log_level: Option<String>,

	/// Emit logs as JSON lines
	#[arg(long)]
	pub json_logs: bool,

	/// Subcommand to execute
	#[command(subcommand)]
	pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
	/// Start the HTTP API (default)
	Serve {
		/// Port override
		#[arg(short, long)]
		port: Option<u16>,
	},

	/// Validate the configuration and print a summary
	Validate,

	/// Print an account balance
	Balance {
		#[arg(long, default_value = "testnet")]
		network: String,
		#[arg(long)]
		account_id: String,
		#[arg(long)]
		asset_id: String,
		#[arg(long)]
		blockchain_rid: String,
	},

	/// Print a transaction record
	Transaction {
		tx_id: String,
		#[arg(long, default_value = "testnet")]
		network: String,
		#[arg(long)]
		blockchain_rid: String,
	},

	/// Submit a token transfer
	Send {
		/// Recipient account id
		#[arg(long)]
		to: String,
		/// Human-scaled amount, e.g. 0.5
		#[arg(long)]
		amount: Decimal,
		#[arg(long)]
		decimals: u8,
		/// Asset id of the token
		#[arg(long)]
		token_address: String,
		/// Sender account id
		#[arg(long)]
		public_key: String,
		#[arg(long)]
		blockchain_rid: String,
		#[arg(long, default_value = "testnet")]
		network: String,
		/// Sender private key
		#[arg(long, env = "CHROMIA_PRIVATE_KEY", hide_env_values = true)]
		private_key: String,
	},

	/// Check whether an address is a valid Chromia address
	ValidateAddress { address: String },

	/// Print the fee estimate
	Fees {
		#[arg(long, default_value = "testnet")]
		network: String,
		#[arg(long, default_value = "")]
		account_id: String,
	},

	/// Print an explorer link
	Link {
		#[arg(value_enum)]
		kind: LinkKind,
		/// Transaction hash or wallet address
		value: String,
		#[arg(long, default_value = "testnet")]
		network: String,
	},
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
	Transaction,
	Wallet,
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn test_cli_definition() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_no_subcommand_means_serve() {
		let args = Args::try_parse_from(["chromia-adapter"]).unwrap();
		assert!(args.command.is_none());
		assert!(!args.json_logs);
	}

	#[test]
	fn test_balance_command() {
		let args = Args::try_parse_from([
			"chromia-adapter",
			"--log-level",
			"debug",
			"balance",
			"--network",
			"main",
			"--account-id",
			"F897",
			"--asset-id",
			"2af2",
			"--blockchain-rid",
			"C7D5",
		])
		.unwrap();

		assert_eq!(args.log_level.as_deref(), Some("debug"));
		assert_eq!(
			args.command,
			Some(Command::Balance {
				network: "main".to_string(),
				account_id: "F897".to_string(),
				asset_id: "2af2".to_string(),
				blockchain_rid: "C7D5".to_string(),
			})
		);
	}

	#[test]
	fn test_send_command() {
		let args = Args::try_parse_from([
			"chromia-adapter",
			"send",
			"--to",
			"F897",
			"--amount",
			"0.5",
			"--decimals",
			"6",
			"--token-address",
			"2af2",
			"--public-key",
			"F897",
			"--blockchain-rid",
			"C7D5",
			"--private-key",
			"01",
		])
		.unwrap();

		match args.command {
			Some(Command::Send {
				amount,
				decimals,
				network,
				..
			}) => {
				assert_eq!(amount, "0.5".parse::<Decimal>().unwrap());
				assert_eq!(decimals, 6);
				assert_eq!(network, "testnet");
			}
			other => panic!("unexpected command: {:?}", other),
		}
	}

	#[test]
	fn test_link_command() {
		let args =
			Args::try_parse_from(["chromia-adapter", "link", "wallet", "F897", "--network", "main"])
				.unwrap();
		assert_eq!(
			args.command,
			Some(Command::Link {
				kind: LinkKind::Wallet,
				value: "F897".to_string(),
				network: "main".to_string(),
			})
		);
	}
}
