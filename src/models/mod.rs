pub mod auth;
pub mod car;
pub mod dealer;
pub mod review;
pub mod session;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The backend is loose about field types: zips and years arrive as numbers or
/// strings, names can be null. Everything is read back as text.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Flags arrive as booleans, `null`, or the strings `"true"`/`"false"`.
/// Anything unrecognised reads as `false`.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    })
}
