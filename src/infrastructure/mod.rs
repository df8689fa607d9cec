//! # Infrastructure Layer
//!
//! Network transport, carrier clients, configuration and telemetry.

pub mod carriers;
pub mod config;
pub mod telemetry;
