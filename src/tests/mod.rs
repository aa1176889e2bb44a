mod fake_api;

mod commands_tests;
mod controller_tests;
mod error_tests;
