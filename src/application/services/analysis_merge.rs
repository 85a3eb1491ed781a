//! Folding per-chunk model replies into one document report.
//!
//! Field strategy:
//! - `plain_summary`, `contract_type`: chunk 0 only, with fixed fallbacks.
//! - `risk_score`: maximum over parsed chunks; `risk_level` is re-derived from it.
//! - `clauses`: concatenated in chunk order, truncated to `max_clauses`.
//! - `key_obligations`, `recommended_actions`, `compliance_issues`: concatenated,
//!   first occurrence kept.
//! - `payment_terms`, `expiry_terms`: last non-empty value, else "Not specified".

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::lenient::null_as_default;
use crate::domain::risk_level::deserialize_optional_score;
use crate::domain::{
    AnalysisReport, Clause, ContractType, ExpiryTerms, PaymentTerms, RiskLevel,
};

pub const MULTI_SECTION_SUMMARY: &str = "Multi-section legal document analyzed successfully.";
pub const DEFAULT_MAX_CLAUSES: usize = 20;

/// What the model returns for a single chunk. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChunkReport {
    #[serde(default)]
    pub plain_summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_score")]
    pub risk_score: Option<u8>,
    #[serde(default)]
    pub contract_type: Option<ContractType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clauses: Vec<Clause>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_obligations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_actions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compliance_issues: Vec<String>,
    #[serde(default)]
    pub payment_terms: Option<PaymentTerms>,
    #[serde(default)]
    pub expiry_terms: Option<ExpiryTerms>,
}

#[derive(Default)]
struct UniqueList {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl UniqueList {
    fn extend(&mut self, values: Vec<String>) {
        for value in values {
            if self.seen.insert(value.clone()) {
                self.items.push(value);
            }
        }
    }
}

#[derive(Default)]
struct MergeState {
    summary: Option<String>,
    contract_type: Option<ContractType>,
    max_score: Option<u8>,
    clauses: Vec<Clause>,
    obligations: UniqueList,
    actions: UniqueList,
    compliance: UniqueList,
    payment_terms: Option<PaymentTerms>,
    expiry_terms: Option<ExpiryTerms>,
    parsed_chunks: usize,
}

impl MergeState {
    fn absorb(mut self, position: usize, report: Option<ChunkReport>, max_clauses: usize) -> Self {
        let Some(report) = report else {
            return self;
        };
        self.parsed_chunks += 1;

        if position == 0 {
            self.summary = report.plain_summary.filter(|s| !s.trim().is_empty());
            self.contract_type = report.contract_type;
        }

        if let Some(score) = report.risk_score {
            self.max_score = Some(self.max_score.map_or(score, |current| current.max(score)));
        }

        let room = max_clauses.saturating_sub(self.clauses.len());
        self.clauses.extend(report.clauses.into_iter().take(room));

        self.obligations.extend(report.key_obligations);
        self.actions.extend(report.recommended_actions);
        self.compliance.extend(report.compliance_issues);

        if let Some(terms) = report.payment_terms.filter(|t| !t.is_empty()) {
            self.payment_terms = Some(terms);
        }
        if let Some(terms) = report.expiry_terms.filter(|t| !t.is_empty()) {
            self.expiry_terms = Some(terms);
        }

        self
    }

    fn finish(self) -> AnalysisReport {
        let risk_score = self.max_score.unwrap_or(0);
        AnalysisReport {
            plain_summary: self
                .summary
                .unwrap_or_else(|| MULTI_SECTION_SUMMARY.to_string()),
            risk_level: RiskLevel::from_score(risk_score),
            risk_score,
            contract_type: self.contract_type.unwrap_or_default(),
            clauses: self.clauses,
            compliance_issues: self.compliance.items,
            recommended_actions: self.actions.items,
            key_obligations: self.obligations.items,
            payment_terms: self.payment_terms.unwrap_or_else(PaymentTerms::not_specified),
            expiry_terms: self.expiry_terms.unwrap_or_else(ExpiryTerms::not_specified),
            degraded: self.parsed_chunks == 0,
        }
    }
}

/// Merges chunk results in document order. `None` marks a chunk whose call or
/// reply failed; it contributes nothing but still occupies its position.
pub fn merge_chunk_reports<I>(reports: I, max_clauses: usize) -> AnalysisReport
where
    I: IntoIterator<Item = Option<ChunkReport>>,
{
    reports
        .into_iter()
        .enumerate()
        .fold(MergeState::default(), |state, (position, report)| {
            state.absorb(position, report, max_clauses)
        })
        .finish()
}
