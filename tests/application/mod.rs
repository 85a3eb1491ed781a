mod stale_analysis_reaper_test;
