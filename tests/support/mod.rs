// tests/support/mod.rs
// Shared support code for the integration test binaries. Individual test
// crates use different subsets of it, so allow the resulting dead_code
// warnings at the module level.
#[allow(dead_code)]
pub mod helpers;

#[allow(dead_code)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
