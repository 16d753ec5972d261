//! Fixture-driven validation tests.
//!
//! Every directory under `fixtures/` is a suite: a `schema.graphql` (and/or
//! any number of `*.schema.graphql` files), a `valid_operations/` directory
//! of documents that must validate without errors, and an
//! `invalid_operations/` directory of documents that must not. An invalid
//! document lists the errors it must produce as
//! `# EXPECTED_ERROR_CONTAINS: <text>` comments; each one has to match (as a
//! case-sensitive substring) at least one reported error message.
//!
//! Files ending in `.disabled` are ignored.

mod snapshot_test_case;
mod test_runner;

use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

fn fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src/tests/snapshot_tests/fixtures")
    })
}

#[test]
fn verify_operation_snapshot_tests() {
    let results = test_runner::run_operation_tests(fixtures_dir());

    if !results.all_passed() {
        eprintln!("{}", results.failure_report());
        eprintln!("\n{}", results.summary());
    } else {
        println!("{}", results.summary());
    }

    assert!(!results.results.is_empty(), "No snapshot fixtures were discovered");
    assert!(
        results.all_passed(),
        "Operation snapshot tests failed:\n{}",
        results.failure_report(),
    );
}
