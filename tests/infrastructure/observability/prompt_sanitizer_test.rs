use clausewise::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_prompt_when_sanitizing_then_placeholder_is_returned() {
    assert_eq!(sanitize_prompt("   \n"), "[EMPTY]");
}

#[test]
fn given_long_multibyte_prompt_when_sanitizing_then_it_is_truncated_on_char_boundary() {
    let prompt = "é".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_every_occurrence_is_redacted() {
    let sanitized =
        sanitize_prompt("Bearer abc123 then token=xyz&token=uvw and password=hunter2");

    assert_eq!(
        sanitized,
        "Bearer [REDACTED] then token=[REDACTED]&token=[REDACTED] and password=[REDACTED]"
    );
}
