//! Postchain node client.
//!
//! Transaction status and detail, account lookup and asset balances are read
//! from the node's REST API. Building and signing FT4 transfers is not done
//! here: the connector hands sessions out through a [`KeyStoreInteractor`]
//! when one is configured.
//!
//! [`KeyStoreInteractor`]: chromia_types::KeyStoreInteractor

mod client;
mod connector;

pub use client::PostchainClient;
pub use connector::PostchainConnector;
