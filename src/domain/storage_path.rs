use std::fmt;

use chrono::Utc;

use super::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// `{user_id}/{unix_millis}_{filename}`, with separators in the filename flattened.
    pub fn new(user_id: &UserId, filename: &str) -> Self {
        let safe_name: String = filename
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        Self(format!(
            "{}/{}_{}",
            user_id.as_str(),
            Utc::now().timestamp_millis(),
            safe_name
        ))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.0
            .split_once('/')
            .is_some_and(|(owner, _)| owner == user_id.as_str())
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
