//! Data transfer objects shared by the server API and the web client.

pub mod api;
pub mod auth;
pub mod message;
pub mod payout;
pub mod stats;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the field's default, the same as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
