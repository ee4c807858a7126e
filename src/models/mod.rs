//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod draft;
pub mod exercise;
pub mod submission;

pub use draft::*;
pub use exercise::*;
pub use submission::*;
