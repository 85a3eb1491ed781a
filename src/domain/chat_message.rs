use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::{AnalysisId, MessageId, UserId};

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: MessageId,
    pub user_id: UserId,
    pub analysis_id: AnalysisId,
    pub role: MessageRole,
    pub content: String,
    pub is_voice: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(
        user_id: UserId,
        analysis_id: AnalysisId,
        role: MessageRole,
        content: String,
        is_voice: bool,
    ) -> Self {
        Self {
            id: MessageId::new(),
            user_id,
            analysis_id,
            role,
            content,
            is_voice,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            _ => Err(format!("Invalid message role: {}", s)),
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
