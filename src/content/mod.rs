//! Content API integration
//!
//! Read-only client for the platform's content service, which owns
//! exercises and their test cases.

pub mod client;

pub use client::*;
