//! Serde helpers for Cow<'static, str> deserialization
//!
//! These helpers allow description types to use `Cow<'static, str>` while
//! still being deserializable from JSON (where strings become `Cow::Owned`).

use serde::{Deserialize, Deserializer};

/// Deserialize a String into Cow<'static, str>
pub fn cow_from_string<'de, D>(deserializer: D) -> Result<std::borrow::Cow<'static, str>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(std::borrow::Cow::Owned(s))
}

/// Deserialize an Option<String> into Option<Cow<'static, str>>
pub fn cow_option_from_string<'de, D>(
    deserializer: D,
) -> Result<Option<std::borrow::Cow<'static, str>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.map(std::borrow::Cow::Owned))
}
