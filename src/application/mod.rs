//! Application layer containing the merchant use cases.
//!
//! `MerchantService` owns the gateway ports and applies the business rules
//! that sit in front of them.

pub mod service;
