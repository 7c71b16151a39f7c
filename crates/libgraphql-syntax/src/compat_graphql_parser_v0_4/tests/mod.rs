mod from_query_tests;
mod from_schema_tests;
mod parse_tests;
