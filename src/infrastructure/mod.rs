//! Outbound adapters: the HTTP transport and the Zota gateway clients.

pub mod http_client;
pub mod zota;
