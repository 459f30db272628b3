//! Ledger client implementations.
//!
//! Available implementations:
//! - `postchain`: reads through the Postchain node REST API, transfers through
//!   an injected keystore interactor

pub mod postchain;
