//! Shared vocabulary for `geupsik`: configuration, errors, domain models and
//! the ports the lookup pipeline is built on.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
