use crate::commands::validate;
use crate::commands::validate::ErrorLocation;
use crate::commands::validate::ErrorReport;
use crate::commands::validate::FileReport;
use graphql_core::schema::Schema;
use graphql_core::schema::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;

fn starwars_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../graphql-validation/src/tests/snapshot_tests/fixtures/starwars")
}

fn starwars_schema() -> Schema {
    SchemaBuilder::new()
        .load_file(starwars_dir().join("schema.graphql"))
        .and_then(|builder| builder.build())
        .expect("starwars schema builds")
}

fn default_exts() -> std::collections::HashSet<String> {
    validate::normalize_file_exts(&["graphql".to_string(), ".gql".to_string()])
}

#[test]
fn normalize_file_exts_adds_leading_dot() {
    let exts = default_exts();
    assert_eq!(exts.len(), 2);
    assert!(exts.contains(".graphql"));
    assert!(exts.contains(".gql"));
}

#[test]
fn collect_graphql_files_walks_directories_in_sorted_order() {
    let found = validate::collect_graphql_files(
        &[starwars_dir().join("valid_operations")],
        &default_exts(),
    );

    assert!(found.walk_errors.is_empty());
    assert_eq!(found.num_skipped_files, 0);
    let file_names = found.file_paths.iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect::<Vec<_>>();
    assert_eq!(file_names, vec![
        "hero_with_friends.graphql".to_string(),
        "introspection_on_custom_root.graphql".to_string(),
    ]);
}

#[test]
fn collect_graphql_files_skips_other_extensions_in_directories() {
    let found = validate::collect_graphql_files(
        &[starwars_dir().join("valid_operations")],
        &validate::normalize_file_exts(&["gql".to_string()]),
    );

    assert!(found.file_paths.is_empty());
    assert_eq!(found.num_skipped_files, 2);
}

#[test]
fn collect_graphql_files_keeps_a_single_explicit_file() {
    let cargo_toml = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let found = validate::collect_graphql_files(
        &[cargo_toml.clone()],
        &default_exts(),
    );

    assert_eq!(found.file_paths, vec![cargo_toml]);
    assert_eq!(found.num_skipped_files, 0);
}

#[test]
fn collect_graphql_files_reports_missing_paths() {
    let missing = starwars_dir().join("does_not_exist");
    let found = validate::collect_graphql_files(&[missing], &default_exts());

    assert!(found.file_paths.is_empty());
    assert_eq!(found.walk_errors.len(), 1);
    assert!(format!("{:#}", found.walk_errors[0]).contains("does_not_exist"));
}

#[test]
fn validate_document_reports_located_errors() {
    let schema = starwars_schema();
    let report = validate::validate_document(
        &schema,
        Path::new("op.graphql"),
        "{\n  hero {\n    homePlanet\n  }\n}\n",
    );

    assert_eq!(report, FileReport {
        errors: vec![ErrorReport {
            locations: vec![ErrorLocation { column: 5, line: 3 }],
            message: "Cannot query field \"homePlanet\" on \"Character\".".to_string(),
        }],
        path: PathBuf::from("op.graphql"),
    });
}

#[test]
fn validate_document_accepts_valid_operations() {
    let schema = starwars_schema();
    let report = validate::validate_document(
        &schema,
        Path::new("op.graphql"),
        "query Hero($ep: Episode) { hero(episode: $ep) { name } }",
    );

    assert!(report.errors.is_empty());
}

#[test]
fn validate_document_reports_parse_failures_without_locations() {
    let schema = starwars_schema();
    let report = validate::validate_document(
        &schema,
        Path::new("broken.graphql"),
        "query {",
    );

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].locations.is_empty());
    assert!(report.errors[0].message.starts_with("parsing broken.graphql"));
}

#[test]
fn render_text_report_prefixes_path_and_location() {
    let reports = vec![
        FileReport {
            errors: vec![
                ErrorReport {
                    locations: vec![ErrorLocation { column: 9, line: 2 }],
                    message: "Unknown type \"Foo\".".to_string(),
                },
                ErrorReport {
                    locations: vec![],
                    message: "Failed to read file".to_string(),
                },
            ],
            path: PathBuf::from("a.graphql"),
        },
        FileReport {
            errors: vec![],
            path: PathBuf::from("b.graphql"),
        },
    ];

    assert_eq!(
        validate::render_text_report(&reports),
        "a.graphql:2:9: Unknown type \"Foo\".\na.graphql: Failed to read file",
    );
}

#[test]
fn file_reports_serialize_as_json() {
    let report = FileReport {
        errors: vec![ErrorReport {
            locations: vec![ErrorLocation { column: 3, line: 1 }],
            message: "Unknown fragment \"F\".".to_string(),
        }],
        path: PathBuf::from("ops/a.graphql"),
    };

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json, serde_json::json!({
        "errors": [{
            "locations": [{ "column": 3, "line": 1 }],
            "message": "Unknown fragment \"F\".",
        }],
        "path": "ops/a.graphql",
    }));
}
