use serde::{Deserialize, Serialize};

use super::{Clause, ExpiryTerms, PaymentTerms, RiskLevel};

pub const PARSE_FAILURE_SUMMARY: &str = "Error: Failed to parse AI analysis. The document may be in an unsupported format or the AI response was invalid.";
pub const PARSE_FAILURE_SCORE: u8 = 50;

/// The analysed content of a document, as stored on a completed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub plain_summary: String,
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub contract_type: ContractType,
    pub clauses: Vec<Clause>,
    pub compliance_issues: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub key_obligations: Vec<String>,
    pub payment_terms: PaymentTerms,
    pub expiry_terms: ExpiryTerms,
    /// Set when the model reply could not be parsed and this report is a placeholder.
    pub degraded: bool,
}

impl AnalysisReport {
    /// Medium-risk placeholder used when the model reply is unusable.
    pub fn parse_failure() -> Self {
        Self {
            plain_summary: PARSE_FAILURE_SUMMARY.to_string(),
            risk_level: RiskLevel::Medium,
            risk_score: PARSE_FAILURE_SCORE,
            contract_type: ContractType::Other,
            clauses: Vec::new(),
            compliance_issues: vec![
                "Analysis parsing failed - manual review recommended".to_string(),
            ],
            recommended_actions: vec![
                "Have document reviewed by a legal professional".to_string(),
            ],
            key_obligations: Vec::new(),
            payment_terms: PaymentTerms::not_analyzed(),
            expiry_terms: ExpiryTerms::not_analyzed(),
            degraded: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Employment,
    Rental,
    Nda,
    Business,
    ServiceAgreement,
    PurchaseAgreement,
    Lease,
    Partnership,
    Licensing,
    #[default]
    #[serde(other)]
    Other,
}
