use clausewise::domain::{
    AnalysisReport, ContractType, ExpiryTerms, PaymentTerms, RiskLevel,
};

#[test]
fn given_parse_failure_report_then_it_is_medium_risk_and_degraded() {
    let report = AnalysisReport::parse_failure();

    assert_eq!(report.risk_level, RiskLevel::Medium);
    assert_eq!(report.risk_score, 50);
    assert_eq!(report.contract_type, ContractType::Other);
    assert!(report.degraded);
    assert!(report.plain_summary.starts_with("Error: Failed to parse AI analysis."));
    assert_eq!(report.payment_terms.amount.as_deref(), Some("Not analyzed"));
    assert_eq!(report.expiry_terms.notice_period.as_deref(), Some("Not analyzed"));
}

#[test]
fn given_unknown_contract_type_when_deserializing_then_other_is_used() {
    let known: ContractType = serde_json::from_str(r#""service_agreement""#).unwrap();
    let unknown: ContractType = serde_json::from_str(r#""franchise""#).unwrap();

    assert_eq!(known, ContractType::ServiceAgreement);
    assert_eq!(unknown, ContractType::Other);
}

#[test]
fn given_terms_placeholders_then_emptiness_is_reported_correctly() {
    assert!(PaymentTerms::default().is_empty());
    assert!(!PaymentTerms::not_specified().is_empty());
    assert!(ExpiryTerms::default().is_empty());
    assert_eq!(
        ExpiryTerms::not_specified().date.as_deref(),
        Some("Not specified")
    );
}

#[test]
fn given_report_when_serialized_then_wire_names_are_snake_case() {
    let json = serde_json::to_value(AnalysisReport::parse_failure()).unwrap();

    assert_eq!(json["risk_level"], "medium");
    assert_eq!(json["contract_type"], "other");
    assert_eq!(json["degraded"], true);
    assert!(json["clauses"].as_array().unwrap().is_empty());
}
