use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_core::ast;
use graphql_core::schema::Schema;
use graphql_core::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Print the validation report as JSON.",
        long,
    )]
    json: bool,

    #[arg(
        help="Path to a schema file. Repeat to load several files into \
             a single schema.",
        long="schema",
        required=true,
    )]
    schema_paths: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL operation files or directories \
             containing GraphQL operation files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match SchemaBuilder::new()
            .load_files(self.schema_paths.clone())
            .and_then(|builder| builder.build()) {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors building schema: {e:#?}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Built schema with {} types from {} files.",
            schema.all_types().len(),
            self.schema_paths.len(),
        );

        let graphql_file_exts = normalize_file_exts(&self.graphql_file_exts);
        let found = collect_graphql_files(&self.file_or_dir_paths, &graphql_file_exts);
        if !found.walk_errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors scanning input paths: {:#?}",
                output_utils::RED_X,
                found.walk_errors,
            ));
        }
        log::debug!(
            "Found {} GraphQL files to be validated.",
            found.file_paths.len(),
        );

        let mut reports = vec![];
        for file_path in &found.file_paths {
            let report = match tokio::fs::read_to_string(file_path).await {
                Ok(content) => validate_document(&schema, file_path, &content),
                Err(e) => FileReport::failed(
                    file_path,
                    format!("Failed to read file: {e}"),
                ),
            };
            reports.push(report);
        }

        let num_errors: usize = reports.iter().map(|report| report.errors.len()).sum();
        let output = if self.json {
            match serde_json::to_string_pretty(&reports) {
                Ok(json) => json,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Failed to serialize report: {e}",
                    output_utils::RED_X,
                )),
            }
        } else if num_errors == 0 {
            format!(
                concat!(
                    "{} All GraphQL operations validated successfully:\n",
                    "  * Validated {} files.\n",
                    "  * Skipped {} non-graphql files.",
                ),
                output_utils::GREEN_CHECK,
                found.file_paths.len(),
                found.num_skipped_files,
            )
        } else {
            format!(
                "{}\n{} {num_errors} validation errors in {} files.",
                render_text_report(&reports),
                output_utils::RED_X,
                reports.iter().filter(|report| !report.errors.is_empty()).count(),
            )
        };

        if num_errors == 0 {
            CommandResult::stdout(format_args!("{output}"))
        } else {
            CommandResult::stdout_failure(format_args!("{output}"))
        }
    }
}

#[derive(Debug, PartialEq, serde::Serialize)]
pub(crate) struct ErrorLocation {
    pub column: usize,
    pub line: usize,
}

#[derive(Debug, PartialEq, serde::Serialize)]
pub(crate) struct ErrorReport {
    pub locations: Vec<ErrorLocation>,
    pub message: String,
}

/// Everything wrong with one operation file. A file that fails to parse has
/// a single, unlocated error.
#[derive(Debug, PartialEq, serde::Serialize)]
pub(crate) struct FileReport {
    pub errors: Vec<ErrorReport>,
    pub path: PathBuf,
}
impl FileReport {
    fn failed(path: &Path, message: String) -> Self {
        Self {
            errors: vec![ErrorReport {
                locations: vec![],
                message,
            }],
            path: path.to_path_buf(),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
    pub walk_errors: Vec<anyhow::Error>,
}

/// Finds all GraphQL files at or under each of `paths` whose extension is in
/// `graphql_file_exts`.
///
/// If exactly one path is given, it is a file, and it doesn't match any of the
/// extensions, it is validated anyway: naming a single file is taken as
/// explicitly asking for it.
pub(crate) fn collect_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
) -> FoundFiles {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = FoundFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.walk_errors.push(
                        anyhow::Error::new(e)
                            .context(format!("scanning {}", path.display())),
                    );
                    continue;
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let ext_matches = entry_path.extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .is_some_and(|ext| graphql_file_exts.contains(&ext));
            if ext_matches {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                found.file_paths.push(entry_path.to_path_buf());
            } else {
                found.num_skipped_files += 1;
            }
        }
    }

    if found.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to validate {first_arg_path:#?} even though it doesn't \
            match any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.file_paths.push(first_arg_path.clone());
        found.num_skipped_files = found.num_skipped_files.saturating_sub(1);
    }

    found.file_paths.sort();
    found
}

pub(crate) fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

pub(crate) fn render_text_report(reports: &[FileReport]) -> String {
    let mut lines = vec![];
    for report in reports {
        let path = report.path.display();
        for error in &report.errors {
            match error.locations.first() {
                Some(loc) => lines.push(format!(
                    "{path}:{}:{}: {}",
                    loc.line,
                    loc.column,
                    error.message,
                )),
                None => lines.push(format!("{path}: {}", error.message)),
            }
        }
    }
    lines.join("\n")
}

pub(crate) fn validate_document(
    schema: &Schema,
    path: &Path,
    content: &str,
) -> FileReport {
    let doc = match ast::query::parse(content)
        .with_context(|| format!("parsing {}", path.display())) {
        Ok(doc) => doc,
        Err(e) => return FileReport::failed(path, format!("{e:#}")),
    };

    let errors = graphql_validation::validate(schema, &doc)
        .into_iter()
        .map(|error| ErrorReport {
            locations: error.locations()
                .iter()
                .map(|pos| ErrorLocation {
                    column: pos.column,
                    line: pos.line,
                })
                .collect(),
            message: error.message().to_string(),
        })
        .collect::<Vec<_>>();
    log::debug!("{}: {} validation errors.", path.display(), errors.len());

    FileReport {
        errors,
        path: path.to_path_buf(),
    }
}
