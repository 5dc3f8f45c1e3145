//! Gateway-agnostic request and response shapes, and the ports through which
//! the application reaches a payment gateway.

pub mod deposit;
pub mod ports;
pub mod status;
