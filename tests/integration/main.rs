//! Integration tests for winfree.

mod util;

mod arg_tests;
mod report_tests;
