//! Shared types for the Chromia integration adapter.
//!
//! - `errors`: the adapter-wide error type
//! - `network`: network configuration and explorer link building
//! - `ledger`: the interface of the external ledger client
//! - `records`: request and response records handed to callers

pub mod errors;
pub mod ledger;
pub mod network;
pub mod records;
pub mod serde_helpers;

pub use errors::*;
pub use ledger::*;
pub use network::*;
pub use records::*;
