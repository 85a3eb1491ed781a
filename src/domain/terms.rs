use serde::{Deserialize, Serialize};

const NOT_SPECIFIED: &str = "Not specified";
const NOT_ANALYZED: &str = "Not analyzed";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerms {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub penalties: Option<String>,
}

impl PaymentTerms {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.schedule.is_none() && self.penalties.is_none()
    }

    pub fn not_specified() -> Self {
        Self::filled_with(NOT_SPECIFIED)
    }

    pub fn not_analyzed() -> Self {
        Self::filled_with(NOT_ANALYZED)
    }

    fn filled_with(placeholder: &str) -> Self {
        Self {
            amount: Some(placeholder.to_string()),
            schedule: Some(placeholder.to_string()),
            penalties: Some(placeholder.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryTerms {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub notice_period: Option<String>,
    #[serde(default)]
    pub auto_renewal: Option<bool>,
}

impl ExpiryTerms {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.notice_period.is_none() && self.auto_renewal.is_none()
    }

    pub fn not_specified() -> Self {
        Self::filled_with(NOT_SPECIFIED)
    }

    pub fn not_analyzed() -> Self {
        Self::filled_with(NOT_ANALYZED)
    }

    fn filled_with(placeholder: &str) -> Self {
        Self {
            date: Some(placeholder.to_string()),
            notice_period: Some(placeholder.to_string()),
            auto_renewal: None,
        }
    }
}
