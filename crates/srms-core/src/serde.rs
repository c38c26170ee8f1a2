use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accepts a JSON string or number and yields its string form.
///
/// Token claims such as `sub` are emitted as integers by some issuers and as
/// strings by others.
pub fn deserialize_optional_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(opt.map(|value| match value {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Integer(n) => n.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    }))
}

/// Treats an empty or whitespace-only string as absent.
pub fn deserialize_optional_non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}
