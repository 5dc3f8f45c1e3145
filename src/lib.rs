//! Merchant server for the Zota payment gateway.
//!
//! Turns merchant deposit and order-status requests into signed Zota API
//! calls and normalizes the replies into gateway-agnostic responses.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod telemetry;
