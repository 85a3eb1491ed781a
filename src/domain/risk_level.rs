use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::lenient::{Label, resolve_label};

pub const MAX_SCORE: u8 = 100;

const HIGH_RISK_ABOVE: u8 = 70;
const MEDIUM_RISK_ABOVE: u8 = 40;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Maps a 0-100 score onto the coarse level: above 70 is high, above 40 medium.
    pub fn from_score(score: u8) -> Self {
        if score > HIGH_RISK_ABOVE {
            RiskLevel::High
        } else if score > MEDIUM_RISK_ABOVE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Reads a model-provided label: `critical` counts as high, `moderate` as
    /// medium, and `Medium-High` as its most severe part.
    pub fn from_label(label: &str) -> Option<Self> {
        resolve_label(label, |word| match word {
            "low" | "minimal" | "none" => Some(RiskLevel::Low),
            "medium" | "moderate" => Some(RiskLevel::Medium),
            "high" | "critical" | "severe" => Some(RiskLevel::High),
            _ => None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::from_label(s).ok_or_else(|| format!("Invalid risk level: {}", s.trim()))
    }
}

impl TryFrom<String> for RiskLevel {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clamps an arbitrary model-provided number into the 0-100 score range.
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

/// Accepts `72`, `72.4` or `"72"` and yields a clamped score; `null` and
/// unparsable strings become `None`.
pub fn deserialize_optional_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScore>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawScore::Number(n)) => Some(clamp_score(n)),
        Some(RawScore::Text(s)) => s.trim().parse::<f64>().ok().map(clamp_score),
        None => None,
    })
}

/// Any value; unrecognised or missing labels become `None`.
pub fn deserialize_optional_level<'de, D>(deserializer: D) -> Result<Option<RiskLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let Label(text) = Label::deserialize(deserializer)?;
    Ok(text.as_deref().and_then(RiskLevel::from_label))
}

/// Any value; unrecognised or missing labels become the default level.
pub fn deserialize_lenient_level<'de, D>(deserializer: D) -> Result<RiskLevel, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_level(deserializer)?.unwrap_or_default())
}
