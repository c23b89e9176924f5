//! Mock implementations for testing purposes.
//!
//! - `clients`: mocked balance clients and client pool
//! - `transports`: mocked JSON-RPC and storage transports
//! - `servers`: helpers for mocked JSON-RPC HTTP endpoints

#![allow(dead_code)]

mod transports;

pub use clients::*;
pub use servers::*;
pub use transports::*;
