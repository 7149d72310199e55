//! Property-based tests for `ConnView` core library

mod filter_tests;
mod sort_tests;
mod view_state_tests;
