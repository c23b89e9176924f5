//! Moonbase balance reporter.
//!
//! Queries one account's balance over both interfaces of a Moonbeam-style
//! network, the Substrate runtime storage and the EVM JSON-RPC, and makes an
//! exploratory call to the Identity precompile.
//!
//! # Architecture
//! - Models: addresses, balances and the reporter configuration
//! - Services: blockchain clients and the reporting run
//! - Bootstrap: wiring of configuration, clients and output
//! - Utils: logging and shared constants

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
