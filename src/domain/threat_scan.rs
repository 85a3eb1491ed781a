use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient::{Label, null_as_default, resolve_label};
use super::{ScanId, UserId};

#[derive(Debug, Clone)]
pub struct ThreatScan {
    pub id: ScanId,
    pub user_id: UserId,
    pub scan_type: ScanType,
    pub content: String,
    pub verdict: ThreatVerdict,
    pub processing_time_ms: u64,
    pub created_at: DateTime<Utc>,
}

impl ThreatScan {
    pub fn new(
        user_id: UserId,
        scan_type: ScanType,
        content: String,
        verdict: ThreatVerdict,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            id: ScanId::new(),
            user_id,
            scan_type,
            content,
            verdict,
            processing_time_ms,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanType {
    FakeProfile,
    Phishing,
    ScamMessage,
    UrlAnalysis,
}

impl ScanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanType::FakeProfile => "fake_profile",
            ScanType::Phishing => "phishing",
            ScanType::ScamMessage => "scam_message",
            ScanType::UrlAnalysis => "url_analysis",
        }
    }
}

impl FromStr for ScanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fake_profile" => Ok(ScanType::FakeProfile),
            "phishing" => Ok(ScanType::Phishing),
            "scam_message" => Ok(ScanType::ScamMessage),
            "url_analysis" => Ok(ScanType::UrlAnalysis),
            _ => Err(format!("Invalid scan type: {}", s)),
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Deserializes from any value: case is ignored and unknown labels read as low.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "Label")]
pub enum ThreatLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    pub fn from_label(label: &str) -> Option<Self> {
        resolve_label(label, |word| match word {
            "low" | "minimal" | "none" | "safe" => Some(ThreatLevel::Low),
            "medium" | "moderate" => Some(ThreatLevel::Medium),
            "high" | "severe" => Some(ThreatLevel::High),
            "critical" => Some(ThreatLevel::Critical),
            _ => None,
        })
    }
}

impl From<Label> for ThreatLevel {
    fn from(Label(text): Label) -> Self {
        text.as_deref()
            .and_then(ThreatLevel::from_label)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskIndicator {
    #[serde(default, deserialize_with = "null_as_default")]
    pub indicator: String,
    #[serde(default)]
    pub severity: ThreatLevel,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
}

/// The model's classification of a scanned sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatVerdict {
    pub is_threat: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub threat_level: ThreatLevel,
    #[serde(default, deserialize_with = "super::risk_level::deserialize_optional_score")]
    pub threat_score: Option<u8>,
    #[serde(default)]
    pub threat_category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detected_patterns: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub risk_indicators: Vec<RiskIndicator>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub recommended_action: Option<String>,
    #[serde(default)]
    pub degraded: bool,
}

impl ThreatVerdict {
    /// Fail-open verdict used when the model reply cannot be parsed.
    pub fn parse_failure() -> Self {
        Self {
            is_threat: false,
            threat_level: ThreatLevel::Low,
            threat_score: Some(0),
            threat_category: Some("safe".to_string()),
            detected_patterns: Vec::new(),
            risk_indicators: Vec::new(),
            explanation: Some("Unable to parse analysis results".to_string()),
            recommended_action: Some("Review the content manually".to_string()),
            degraded: true,
        }
    }
}
