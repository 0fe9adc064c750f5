//! Foundation types for CoalOS.
//!
//! Shared by every CoalOS crate: the error type, the TOML configuration and
//! the two policy switches that decide how faithfully legacy behaviour is
//! reproduced (credential matching and command dispatch).

pub mod config;
pub mod error;
