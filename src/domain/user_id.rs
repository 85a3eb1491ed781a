use std::fmt;

/// Identity of the caller as asserted by the fronting auth gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Accepts an externally supplied id. It becomes the first segment of
    /// staged file paths, so separators, control characters and dot segments
    /// are refused.
    pub fn parse(raw: &str) -> Option<Self> {
        let id = raw.trim();
        let valid = !id.is_empty()
            && id != "."
            && id != ".."
            && !id.chars().any(|c| c == '/' || c == '\\' || c.is_control());
        valid.then(|| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
