//! Ledger access for the Chromia adapter.
//!
//! This crate resolves network configuration and opens client handles against
//! Chromia nodes.
//!
//! # Architecture
//!
//! - `registry`: immutable mainnet/testnet configuration with the
//!   fallback-to-testnet lookup rule
//! - `factory`: opens a fresh ledger client handle per operation
//! - `keys`: secp256k1 key pair derivation
//! - `implementations`: concrete ledger clients (Postchain REST)

pub mod factory;
pub mod keys;
pub mod registry;

pub mod implementations;

pub use factory::ClientFactory;
pub use implementations::postchain::{PostchainClient, PostchainConnector};
pub use registry::NetworkRegistry;
