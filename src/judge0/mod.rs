//! Judge0 sandbox integration
//!
//! This module contains the HTTP client for the external Judge0 code
//! execution service and the types describing its wire contract.

pub mod client;
pub mod types;

pub use client::*;
pub use types::*;
