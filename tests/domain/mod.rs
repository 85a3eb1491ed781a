mod analysis_report_test;
mod storage_path_test;
mod threat_verdict_test;
mod upload_policy_test;
