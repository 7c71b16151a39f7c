mod source_location_tests;
mod syntax_kind_tests;
mod syntax_navigator_proptest_tests;
mod syntax_navigator_tests;
mod syntax_walker_tests;
pub(crate) mod utils;
