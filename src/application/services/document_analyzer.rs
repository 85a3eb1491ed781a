use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::application::ports::{LlmClient, LlmClientError, TextSplitter, TextSplitterError};
use crate::domain::lenient::null_as_default;
use crate::domain::risk_level::{deserialize_optional_level, deserialize_optional_score};
use crate::domain::{
    AnalysisId, AnalysisReport, Clause, ContractType, ExpiryTerms, PaymentTerms, RiskLevel,
};

use super::analysis_merge::{ChunkReport, merge_chunk_reports};
use super::prompts;
use super::reply_parser::{ReplyParseError, parse_reply};

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub model: String,
    /// Texts longer than this many characters take the chunked path.
    pub max_chunk_chars: usize,
    pub chunk_delay: Duration,
    pub max_clauses: usize,
}

/// Turns extracted document text into an `AnalysisReport`, either with one
/// model call or with one call per paragraph-aligned chunk.
pub struct DocumentAnalyzer {
    llm_client: Arc<dyn LlmClient>,
    text_splitter: Arc<dyn TextSplitter>,
    config: AnalyzerConfig,
}

impl DocumentAnalyzer {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        text_splitter: Arc<dyn TextSplitter>,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            llm_client,
            text_splitter,
            config,
        }
    }

    #[tracing::instrument(skip(self, text), fields(analysis_id = %analysis_id.as_uuid()))]
    pub async fn analyze(
        &self,
        text: &str,
        analysis_id: AnalysisId,
    ) -> Result<AnalysisReport, DocumentAnalysisError> {
        let char_count = text.chars().count();
        tracing::info!(chars = char_count, "Analyzing extracted text");

        if char_count > self.config.max_chunk_chars {
            self.analyze_chunked(text, analysis_id).await
        } else {
            self.analyze_single(text).await
        }
    }

    async fn analyze_single(&self, text: &str) -> Result<AnalysisReport, DocumentAnalysisError> {
        let request = prompts::document_request(&self.config.model, text);
        let reply = self.llm_client.complete(&request).await?;

        match parse_document_reply(&reply) {
            Ok(report) => Ok(report),
            Err(e) => {
                tracing::warn!(error = %e, "Document reply unusable, storing fallback report");
                Ok(AnalysisReport::parse_failure())
            }
        }
    }

    async fn analyze_chunked(
        &self,
        text: &str,
        analysis_id: AnalysisId,
    ) -> Result<AnalysisReport, DocumentAnalysisError> {
        let chunks = self.text_splitter.split(text, analysis_id).await?;
        let total = chunks.len();
        tracing::info!(chunks = total, "Document split for chunked analysis");

        let mut reports = Vec::with_capacity(total);
        for chunk in &chunks {
            if chunk.index > 0 {
                tokio::time::sleep(self.config.chunk_delay).await;
            }

            let request =
                prompts::chunk_request(&self.config.model, chunk.index + 1, total, &chunk.text);
            let report = match self.llm_client.complete(&request).await {
                Ok(reply) => match parse_reply::<ChunkReport>(&reply) {
                    Ok(report) => Some(report),
                    Err(e) => {
                        tracing::warn!(chunk = chunk.index, error = %e, "Skipping chunk with unparsable reply");
                        None
                    }
                },
                Err(e) => {
                    tracing::warn!(chunk = chunk.index, error = %e, "Skipping chunk after model error");
                    None
                }
            };
            reports.push(report);
        }

        Ok(merge_chunk_reports(reports, self.config.max_clauses))
    }
}

#[derive(Deserialize)]
struct DocumentReply {
    #[serde(default)]
    plain_summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_level")]
    risk_level: Option<RiskLevel>,
    #[serde(default, deserialize_with = "deserialize_optional_score")]
    risk_score: Option<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    contract_type: ContractType,
    #[serde(default, deserialize_with = "null_as_default")]
    clauses: Vec<Clause>,
    #[serde(default, deserialize_with = "null_as_default")]
    compliance_issues: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    recommended_actions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    key_obligations: Vec<String>,
    #[serde(default)]
    payment_terms: Option<PaymentTerms>,
    #[serde(default)]
    expiry_terms: Option<ExpiryTerms>,
}

/// Parses a single-shot reply. A summary and either a recognisable risk level
/// or a score are required; a missing score falls back to the lowest score of
/// the stated level, and an unreadable level is derived from the score.
pub fn parse_document_reply(reply: &str) -> Result<AnalysisReport, ReplyParseError> {
    let parsed: DocumentReply = parse_reply(reply)?;

    let plain_summary = parsed
        .plain_summary
        .filter(|s| !s.trim().is_empty())
        .ok_or(ReplyParseError::MissingField("plain_summary"))?;
    let risk_level = parsed
        .risk_level
        .or(parsed.risk_score.map(RiskLevel::from_score))
        .ok_or(ReplyParseError::MissingField("risk_level"))?;

    let risk_score = parsed.risk_score.unwrap_or(match risk_level {
        RiskLevel::Low => 0,
        RiskLevel::Medium => 41,
        RiskLevel::High => 71,
    });

    Ok(AnalysisReport {
        plain_summary,
        risk_level,
        risk_score,
        contract_type: parsed.contract_type,
        clauses: parsed.clauses,
        compliance_issues: parsed.compliance_issues,
        recommended_actions: parsed.recommended_actions,
        key_obligations: parsed.key_obligations,
        payment_terms: parsed
            .payment_terms
            .unwrap_or_else(PaymentTerms::not_specified),
        expiry_terms: parsed
            .expiry_terms
            .unwrap_or_else(ExpiryTerms::not_specified),
        degraded: false,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentAnalysisError {
    #[error("model call failed: {0}")]
    Llm(#[from] LlmClientError),
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
}
