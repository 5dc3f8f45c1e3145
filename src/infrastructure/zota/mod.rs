//! Zota payment gateway adapters.
//!
//! Each pipeline builds a signed wire request, sends it once over
//! [`HttpTransport`](crate::infrastructure::http_client::HttpTransport), and
//! translates the reply into the domain response. A reply without a `data`
//! block is always an error, whatever its `code`.

pub mod deposit;
pub mod signature;
pub mod status;

pub use deposit::ZotaDepositGateway;
pub use status::ZotaStatusGateway;

use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` as the type's default value. Used on reply
/// fields that are passed through but never mapped.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
