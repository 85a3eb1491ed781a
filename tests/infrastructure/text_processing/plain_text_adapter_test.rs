use clausewise::application::ports::{FileLoader, FileLoaderError};
use clausewise::domain::{ContentType, DocumentAnalysis};
use clausewise::infrastructure::text_processing::PlainTextAdapter;

use crate::helpers::{text_analysis, user};

#[tokio::test]
async fn given_utf8_text_when_extracting_then_it_is_returned_verbatim() {
    let analysis = text_analysis(&user("alice"));

    let text = PlainTextAdapter
        .extract_text("Clause 1.\n\nClause 2.".as_bytes(), &analysis)
        .await
        .unwrap();

    assert_eq!(text, "Clause 1.\n\nClause 2.");
}

#[tokio::test]
async fn given_whitespace_only_file_when_extracting_then_no_text_found() {
    let analysis = text_analysis(&user("alice"));

    let result = PlainTextAdapter.extract_text(b" \n\t ", &analysis).await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_invalid_utf8_or_binary_type_when_extracting_then_it_fails() {
    let text = text_analysis(&user("alice"));
    let pdf = DocumentAnalysis::new(user("alice"), "a.pdf".to_string(), ContentType::Pdf, 3);

    let invalid = PlainTextAdapter.extract_text(&[0xff, 0xfe, 0x00], &text).await;
    let wrong_type = PlainTextAdapter.extract_text(b"abc", &pdf).await;

    assert!(matches!(invalid, Err(FileLoaderError::ExtractionFailed(_))));
    assert!(matches!(
        wrong_type,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
