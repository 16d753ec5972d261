use std::fs;
use std::path::Path;
use std::path::PathBuf;

const EXPECTED_ERROR_PREFIX: &str = "# EXPECTED_ERROR_CONTAINS:";

/// A single operation document to validate.
#[derive(Clone, Debug)]
pub struct OperationSnapshotTestCase {
    pub expected_errors: Vec<String>,
    pub path: PathBuf,
}
impl OperationSnapshotTestCase {
    /// Reads the `# EXPECTED_ERROR_CONTAINS:` patterns from a document.
    pub fn parse_expected_errors(content: &str) -> Vec<String> {
        content
            .lines()
            .filter_map(|line| {
                line.trim_start()
                    .strip_prefix(EXPECTED_ERROR_PREFIX)
                    .map(|pattern| pattern.trim().to_string())
            })
            .collect()
    }

    /// The expected patterns that no actual error message contains (empty
    /// when every pattern matched).
    pub fn unmatched_patterns<'p>(&'p self, actual_errors: &[String]) -> Vec<&'p str> {
        self.expected_errors
            .iter()
            .filter(|pattern| {
                !actual_errors.iter().any(|actual| actual.contains(pattern.as_str()))
            })
            .map(String::as_str)
            .collect()
    }
}

/// A schema plus the operations to validate against it.
#[derive(Clone, Debug)]
pub struct SnapshotTestCase {
    pub invalid_operations: Vec<OperationSnapshotTestCase>,
    pub name: String,
    pub schema_paths: Vec<PathBuf>,
    pub valid_operations: Vec<OperationSnapshotTestCase>,
}
impl SnapshotTestCase {
    /// Discovers every suite directory under `fixtures_dir`.
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(fixtures_dir) else {
            return vec![];
        };

        let mut cases: Vec<Self> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_dir() {
                    eprintln!("ERROR: Unexpected file in fixtures/: {}", path.display());
                    eprintln!("       Each suite must be a directory.");
                    return None;
                }

                let name = path.file_name()?.to_str()?.to_string();
                let Some(schema_paths) = Self::discover_schema_files(&path) else {
                    eprintln!("ERROR: Suite `{name}` has no schema files");
                    return None;
                };

                Some(Self {
                    invalid_operations: Self::discover_operations(&path.join("invalid_operations")),
                    name,
                    schema_paths,
                    valid_operations: Self::discover_operations(&path.join("valid_operations")),
                })
            })
            .collect();
        cases.sort_by(|a, b| a.name.cmp(&b.name));
        cases
    }

    /// `schema.graphql` and any `*.schema.graphql` files in `dir`.
    fn discover_schema_files(dir: &Path) -> Option<Vec<PathBuf>> {
        let mut schema_files: Vec<PathBuf> = fs::read_dir(dir).ok()?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.file_name()
                        .and_then(|name| name.to_str())
                        .map(|name| {
                            let name = name.to_ascii_lowercase();
                            name == "schema.graphql" || name.ends_with(".schema.graphql")
                        })
                        .unwrap_or(false)
            })
            .collect();
        schema_files.sort();

        if schema_files.is_empty() {
            None
        } else {
            Some(schema_files)
        }
    }

    fn discover_operations(dir: &Path) -> Vec<OperationSnapshotTestCase> {
        let Ok(entries) = fs::read_dir(dir) else {
            return vec![];
        };

        let mut operations: Vec<_> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_file() {
                    return None;
                }

                let ext = path.extension().and_then(|ext| ext.to_str());
                match ext.map(|ext| ext.to_ascii_lowercase()).as_deref() {
                    Some("graphql") => (),
                    Some("disabled") => return None,
                    _ => {
                        eprintln!(
                            "ERROR: Unexpected file in operations directory: {}",
                            path.display(),
                        );
                        eprintln!("       Only .graphql and .disabled files are allowed.");
                        return None;
                    },
                }

                let content = fs::read_to_string(&path).ok()?;
                Some(OperationSnapshotTestCase {
                    expected_errors: OperationSnapshotTestCase::parse_expected_errors(&content),
                    path,
                })
            })
            .collect();
        operations.sort_by(|a, b| a.path.cmp(&b.path));
        operations
    }
}
