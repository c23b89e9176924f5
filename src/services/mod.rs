//! Core services of the balance reporter.
//!
//! - `blockchain`: Substrate and EVM clients, transports and the client pool
//! - `reporter`: The sequential reporting run and its transcript

pub mod blockchain;
pub mod reporter;
