//! Service entry points for the Chromia adapter.
//!
//! # Components
//!
//! - `api`: HTTP routes over the adapter operations
//! - `cli`: command-line interface definitions
//! - `service`: builds an adapter from loaded configuration
//! - `telemetry`: tracing subscriber setup

pub mod api;
pub mod cli;
pub mod service;
pub mod telemetry;
