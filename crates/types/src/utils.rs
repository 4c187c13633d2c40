use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the default value of the target type.
///
/// Documents produced by other tooling write empty collections as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
