//! Inbound HTTP surface of the merchant server.
//!
//! Decodes and validates client input, calls [`MerchantService`], and maps
//! failures onto status codes: 400 for anything the client can fix, 500 for
//! everything else.
//!
//! [`MerchantService`]: crate::application::service::MerchantService

pub mod error;
pub mod handlers;
pub mod router;

pub use router::{AppState, create_router};
