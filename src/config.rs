//! Configuration module for podcrab
//!
//! This module provides configuration constants, default values, and configuration types
//! for the podcrab aggregator toolkit.

mod constants;
mod types;

// Re-export all constants and types
pub use constants::*;
pub use types::*;
