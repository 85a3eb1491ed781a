use clausewise::domain::{ContentType, DEFAULT_MAX_UPLOAD_BYTES, UploadPolicy, UploadRejection};

const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[test]
fn given_supported_types_when_validating_then_content_type_is_returned() {
    let policy = UploadPolicy::default();

    assert_eq!(policy.validate("application/pdf", 1), Ok(ContentType::Pdf));
    assert_eq!(policy.validate("application/msword", 1), Ok(ContentType::Doc));
    assert_eq!(policy.validate(DOCX, 1), Ok(ContentType::Docx));
    assert_eq!(policy.validate("text/plain", 1), Ok(ContentType::Text));
}

#[test]
fn given_file_at_limit_when_validating_then_it_is_accepted() {
    let policy = UploadPolicy::default();

    assert!(policy.validate("application/pdf", DEFAULT_MAX_UPLOAD_BYTES).is_ok());
    assert_eq!(
        policy.validate("application/pdf", DEFAULT_MAX_UPLOAD_BYTES + 1),
        Err(UploadRejection::TooLarge {
            size_bytes: DEFAULT_MAX_UPLOAD_BYTES + 1,
            max_size_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        })
    );
}

#[test]
fn given_unsupported_or_empty_file_when_validating_then_it_is_rejected() {
    let policy = UploadPolicy::default();

    assert_eq!(
        policy.validate("image/png", 10),
        Err(UploadRejection::UnsupportedType("image/png".to_string()))
    );
    assert_eq!(policy.validate("text/plain", 0), Err(UploadRejection::Empty));
}
