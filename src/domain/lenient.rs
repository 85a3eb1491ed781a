use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Any JSON value, keeping its text only when it is a string.
pub struct Label(pub Option<String>);

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Label(match Option::<RawValue>::deserialize(deserializer)? {
            Some(RawValue::Text(text)) => Some(text),
            _ => None,
        }))
    }
}

/// Resolves a free-form severity label. An exact match wins; otherwise the
/// most severe word in a compound label such as `Medium-High` is used.
pub fn resolve_label<T, F>(label: &str, exact: F) -> Option<T>
where
    T: Ord,
    F: Fn(&str) -> Option<T>,
{
    let normalized = label.trim().to_lowercase();
    exact(&normalized).or_else(|| {
        normalized
            .split(|c: char| !c.is_alphabetic())
            .filter_map(&exact)
            .max()
    })
}

/// Accepts `3`, `3.0` or `"3"`; anything else, `"Section 4"` included, reads as 0.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<RawValue>::deserialize(deserializer)? {
        Some(RawValue::Number(n)) => Some(n),
        Some(RawValue::Text(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(number
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round().min(f64::from(u32::MAX)) as u32)
        .unwrap_or_default())
}
