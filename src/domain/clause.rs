use serde::{Deserialize, Serialize};

use super::RiskLevel;
use super::lenient::{lenient_u32, null_as_default};
use super::risk_level::deserialize_lenient_level;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub clause_type: ClauseType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_lenient_level")]
    pub risk_level: RiskLevel,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub position: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseType {
    Risk,
    Payment,
    Obligation,
    Expiry,
    Liability,
    Termination,
    Confidentiality,
    Indemnification,
    Warranty,
    DisputeResolution,
    #[default]
    #[serde(other)]
    Other,
}
