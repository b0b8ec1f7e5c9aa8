//! Error types for the setup tool.
//!
//! This module provides a unified error type for all setup operations.

mod setup_error;

pub use setup_error::SetupError;
