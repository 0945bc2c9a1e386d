// Shared helpers for the integration tests. Each test file pulls this in
// with `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]


/// Install env_logger once so `RUST_LOG=debug cargo test` shows the
/// service logs. Safe to call from every test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
