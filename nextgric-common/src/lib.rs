//! Common types and utilities for nextgric
//!
//! This crate provides the shared error type, configuration structures,
//! logging setup and the `OctetString` byte-sequence type used across the
//! nextgric crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod octet_string;

pub use config::{
    load_xapp_config, E2NodeConfig, RicConfig, SliceRatioConfig, XappConfig,
    DEFAULT_SLICE1_RATIO, DEFAULT_SLICE2_RATIO, SLICE1_RATIO_ENV, SLICE2_RATIO_ENV,
};
pub use error::Error;
pub use logging::{init_logging, LogLevel};
pub use octet_string::OctetString;
