use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ReplyParseError {
    #[error("reply contains no JSON object")]
    NoJsonObject,
    #[error("reply does not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),
    #[error("reply is missing required field: {0}")]
    MissingField(&'static str),
}

/// Returns the first balanced `{...}` in a model reply, skipping braces that
/// appear inside JSON strings. Models often wrap the object in prose or code fences.
pub fn extract_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in reply[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&reply[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, ReplyParseError> {
    let object = extract_json_object(reply).ok_or(ReplyParseError::NoJsonObject)?;
    Ok(serde_json::from_str(object)?)
}
