use clausewise::domain::{ScanType, ThreatLevel, ThreatVerdict};

#[test]
fn given_sparse_verdict_when_deserializing_then_defaults_fill_the_gaps() {
    let verdict: ThreatVerdict = serde_json::from_str(
        r#"{"is_threat": true, "threat_level": null, "threat_score": "91.7", "detected_patterns": null}"#,
    )
    .unwrap();

    assert!(verdict.is_threat);
    assert_eq!(verdict.threat_level, ThreatLevel::Low);
    assert_eq!(verdict.threat_score, Some(92));
    assert!(verdict.detected_patterns.is_empty());
    assert!(verdict.risk_indicators.is_empty());
    assert!(!verdict.degraded);
}

#[test]
fn given_loosely_typed_verdict_when_deserializing_then_threat_is_kept() {
    let verdict: ThreatVerdict = serde_json::from_str(
        r#"{
            "is_threat": true,
            "threat_level": "High",
            "threat_score": 88,
            "risk_indicators": [
                {"severity": "moderate", "explanation": "Lookalike domain"},
                {"indicator": "Gift card request", "severity": "CRITICAL", "explanation": null},
                {"indicator": "Odd wording", "severity": "unknown"}
            ]
        }"#,
    )
    .unwrap();

    assert!(verdict.is_threat);
    assert_eq!(verdict.threat_level, ThreatLevel::High);
    assert_eq!(verdict.risk_indicators.len(), 3);
    assert_eq!(verdict.risk_indicators[0].indicator, "");
    assert_eq!(verdict.risk_indicators[0].severity, ThreatLevel::Medium);
    assert_eq!(verdict.risk_indicators[1].severity, ThreatLevel::Critical);
    assert_eq!(verdict.risk_indicators[1].explanation, "");
    assert_eq!(verdict.risk_indicators[2].severity, ThreatLevel::Low);
    assert_eq!(
        serde_json::to_string(&ThreatLevel::Critical).unwrap(),
        r#""critical""#
    );
}

#[test]
fn given_fail_open_verdict_then_it_is_safe_and_degraded() {
    let verdict = ThreatVerdict::parse_failure();

    assert!(!verdict.is_threat);
    assert_eq!(verdict.threat_score, Some(0));
    assert_eq!(verdict.threat_category.as_deref(), Some("safe"));
    assert!(verdict.degraded);
}

#[test]
fn given_scan_type_strings_when_parsing_then_known_types_round_trip() {
    for scan_type in [
        ScanType::FakeProfile,
        ScanType::Phishing,
        ScanType::ScamMessage,
        ScanType::UrlAnalysis,
    ] {
        assert_eq!(scan_type.as_str().parse::<ScanType>(), Ok(scan_type));
    }
    assert!("malware".parse::<ScanType>().is_err());
}
