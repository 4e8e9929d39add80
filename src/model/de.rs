//! Lenient deserializers for backend fields whose JSON type is not stable.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<N> {
    Number(N),
    Text(String),
}

/// Accepts a number, a numeric string or `null`; anything unparseable becomes `None`.
pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<NumberOrText<f64>>::deserialize(deserializer)? {
            Some(NumberOrText::Number(n)) => Some(n),
            Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
            None => None,
        },
    )
}

/// Accepts an integer, an integer string or `null`; anything unparseable becomes `None`.
pub fn optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<NumberOrText<i64>>::deserialize(deserializer)? {
            Some(NumberOrText::Number(n)) => Some(n),
            Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
            None => None,
        },
    )
}
