use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{AnalysisId, ScanType, UploadPolicy, UploadRejection, UserId};

use super::{AnalysisSnapshot, ScanSnapshot, StatusSource, UploadAccepted};

const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(#[from] UploadRejection),
    #[error("[Code: {status}] {body}")]
    Http { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Typed HTTP client for the analysis API, acting on behalf of one user.
pub struct ApiClient {
    client: Client,
    base_url: String,
    user_id: UserId,
    policy: UploadPolicy,
}

#[derive(Serialize)]
struct ThreatScanBody<'a> {
    scan_type: ScanType,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ThreatScanEnvelope {
    scan: ScanSnapshot,
}

#[derive(Serialize)]
struct AssistantBody<'a> {
    query: &'a str,
    analysis_id: String,
    analysis_data: &'a serde_json::Value,
}

#[derive(serde::Deserialize)]
struct AssistantReply {
    response: String,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        user_id: UserId,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_id,
            policy: UploadPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: UploadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Uploads a document. Type and size are checked locally first; a rejected
    /// file never reaches the network.
    pub async fn upload(
        &self,
        filename: &str,
        mime: &str,
        data: Vec<u8>,
    ) -> Result<UploadAccepted, ClientError> {
        self.policy.validate(mime, data.len() as u64)?;

        let part = Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(mime)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/api/v1/analyses"))
            .header(USER_ID_HEADER, self.user_id.as_str())
            .multipart(form)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn get_analysis(
        &self,
        analysis_id: AnalysisId,
    ) -> Result<AnalysisSnapshot, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/v1/analyses/{}", analysis_id.as_uuid())))
            .header(USER_ID_HEADER, self.user_id.as_str())
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn list_analyses(&self) -> Result<Vec<AnalysisSnapshot>, ClientError> {
        let response = self
            .client
            .get(self.url("/api/v1/analyses"))
            .header(USER_ID_HEADER, self.user_id.as_str())
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn scan_threat(
        &self,
        scan_type: ScanType,
        content: &str,
    ) -> Result<ScanSnapshot, ClientError> {
        let response = self
            .client
            .post(self.url("/api/v1/threat-scans"))
            .header(USER_ID_HEADER, self.user_id.as_str())
            .json(&ThreatScanBody { scan_type, content })
            .send()
            .await?;

        let envelope: ThreatScanEnvelope = Self::decode(response).await?;
        Ok(envelope.scan)
    }

    pub async fn ask_assistant(
        &self,
        analysis_id: AnalysisId,
        query: &str,
        analysis_data: &serde_json::Value,
    ) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.url("/api/v1/voice-assistant"))
            .header(USER_ID_HEADER, self.user_id.as_str())
            .json(&AssistantBody {
                query,
                analysis_id: analysis_id.as_uuid().to_string(),
                analysis_data,
            })
            .send()
            .await?;

        let reply: AssistantReply = Self::decode(response).await?;
        Ok(reply.response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Non-success responses become `Http`, preferring the server's `{error}` message.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(text);
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl StatusSource for ApiClient {
    async fn fetch_analysis(
        &self,
        analysis_id: AnalysisId,
    ) -> Result<AnalysisSnapshot, ClientError> {
        self.get_analysis(analysis_id).await
    }
}
