use crate::validate;
use graphql_core::ast;
use graphql_core::schema::Schema;
use graphql_core::schema::SchemaBuilder;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use super::snapshot_test_case::OperationSnapshotTestCase;
use super::snapshot_test_case::SnapshotTestCase;

/// Result of a single snapshot test
#[derive(Debug)]
pub struct SnapshotTestResult {
    pub error_message: Option<String>,
    pub file_path: PathBuf,
    pub passed: bool,
    pub test_name: String,
}
impl SnapshotTestResult {
    fn pass(test_name: String, file_path: &Path) -> Self {
        Self {
            error_message: None,
            file_path: file_path.to_path_buf(),
            passed: true,
            test_name,
        }
    }

    fn fail(test_name: String, file_path: &Path, error_message: String) -> Self {
        Self {
            error_message: Some(error_message),
            file_path: file_path.to_path_buf(),
            passed: false,
            test_name,
        }
    }
}

/// Collection of snapshot test results
#[derive(Debug, Default)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}
impl SnapshotTestResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| format_detailed_failure(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} snapshot tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let all_passed = self.all_passed();
        let emoji = if all_passed { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");
        let header = format!("{emoji} VALIDATION SNAPSHOT SUMMARY");
        let total = self.results.len();

        if all_passed {
            format!("{banner}\n{header}\n{banner}\nTotal tests: {total}\nPassed: {total}\nFailed: 0\n{banner}")
        } else {
            let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
            let failures_len = failures.len();
            let passed = total - failures_len;
            let failed_list = failures
                .iter()
                .map(|r| format!("  - {}", r.test_name))
                .collect::<Vec<_>>()
                .join("\n");

            format!("{banner}\n{header}\n{banner}\nTotal tests: {total}\nPassed: {passed}\nFailed: {failures_len}\n\nFailed snapshot tests:\n{failed_list}\n{banner}")
        }
    }
}

fn format_detailed_failure(result: &SnapshotTestResult) -> String {
    let test_name = &result.test_name;
    let file_path = result.file_path.display();
    let mut output = format!("❌ {test_name}\n   File: {file_path}\n");
    if let Some(msg) = &result.error_message {
        output.push_str(&format!("   {msg}\n"));
    }
    output
}

/// Validates every discovered operation against its suite's schema.
pub fn run_operation_tests(fixtures_dir: &Path) -> SnapshotTestResults {
    let mut results = SnapshotTestResults::default();

    for test_case in SnapshotTestCase::discover_all(fixtures_dir) {
        let name = &test_case.name;
        let schema = match build_schema(&test_case) {
            Ok(schema) => schema,
            Err(err) => {
                results.results.push(SnapshotTestResult::fail(
                    format!("{name}/schema"),
                    &test_case.schema_paths[0],
                    format!("Expected: Valid schema\nGot: {err}"),
                ));
                continue;
            },
        };

        results.results.extend(
            test_case.valid_operations
                .par_iter()
                .map(|op| test_operation(name, &schema, op, true))
                .collect::<Vec<_>>(),
        );
        results.results.extend(
            test_case.invalid_operations
                .par_iter()
                .map(|op| test_operation(name, &schema, op, false))
                .collect::<Vec<_>>(),
        );
    }

    results
}

fn build_schema(test_case: &SnapshotTestCase) -> Result<Schema, String> {
    SchemaBuilder::new()
        .load_files(test_case.schema_paths.clone())
        .and_then(|builder| builder.build())
        .map_err(|err| format!("{err:?}"))
}

fn test_operation(
    suite_name: &str,
    schema: &Schema,
    op: &OperationSnapshotTestCase,
    expect_valid: bool,
) -> SnapshotTestResult {
    let file_name = op.path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let category = if expect_valid { "valid_operations" } else { "invalid_operations" };
    let test_name = format!("{suite_name}/{category}/{file_name}");

    let content = match fs::read_to_string(&op.path) {
        Ok(content) => content,
        Err(err) => return SnapshotTestResult::fail(
            test_name,
            &op.path,
            format!("Failed to read file: {err}"),
        ),
    };
    let doc = match ast::query::parse(&content) {
        Ok(doc) => doc,
        Err(err) => return SnapshotTestResult::fail(
            test_name,
            &op.path,
            format!("Failed to parse document: {err}"),
        ),
    };

    let actual_errors: Vec<String> = validate(schema, &doc)
        .iter()
        .map(|error| {
            let locations = error.locations()
                .iter()
                .map(|pos| format!("{}:{}", pos.line, pos.column))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} ({locations})", error.message())
        })
        .collect();

    if expect_valid {
        return if actual_errors.is_empty() {
            SnapshotTestResult::pass(test_name, &op.path)
        } else {
            SnapshotTestResult::fail(
                test_name,
                &op.path,
                format!("Expected: Valid operation\nGot:\n  {}", actual_errors.join("\n  ")),
            )
        };
    }

    if actual_errors.is_empty() {
        return SnapshotTestResult::fail(
            test_name,
            &op.path,
            "Expected: Validation errors\nGot: No errors (false negative!)".to_string(),
        );
    }

    let unmatched = op.unmatched_patterns(&actual_errors);
    if unmatched.is_empty() {
        SnapshotTestResult::pass(test_name, &op.path)
    } else {
        let unmatched_list = unmatched
            .iter()
            .map(|pattern| format!("  ✗ {pattern}"))
            .collect::<Vec<_>>()
            .join("\n");
        SnapshotTestResult::fail(
            test_name,
            &op.path,
            format!(
                "Expected: All error patterns must match\n\nUnmatched patterns:\n{unmatched_list}\n\nActual errors:\n  {}",
                actual_errors.join("\n  "),
            ),
        )
    }
}
