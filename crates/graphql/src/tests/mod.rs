mod log_level_tests;
