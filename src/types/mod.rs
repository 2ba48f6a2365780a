//! Core types, identifiers, and configuration
//!
//! This module groups the synthetic hotel identifier and the session
//! configuration structures used by the interactive menu binary.

pub mod config;
pub mod identifiers;

pub use config::{CliArgs, HotelSeed, MenuConfig};
pub use identifiers::HotelId;
