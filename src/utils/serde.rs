use serde::{Deserialize, Deserializer};

/// Deserializes an optional boolean from a query-string value.
///
/// Query parameters always arrive as strings, so `?active=true` would
/// otherwise fail to deserialize into `Option<bool>`. Empty values are
/// treated as absent.
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s
            .parse::<bool>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
