mod object_staging_store_test;
