use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files;
use crate::output_utils;
use crate::output_utils::OutputFormat;
use gqlcheck_core::FieldVisitorRegistry;
use gqlcheck_core::Schema;
use gqlcheck_core::SchemaLoadError;
use gqlcheck_core::SchemaLoader;
use gqlcheck_core::ValidationError;
use gqlcheck_core::file_reader;
use gqlcheck_core::validator::rules;
use gqlcheck_parser::GraphQLSyntaxError;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t=OutputFormat::Text,
        help="How to print validation results.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        help="Schema files, or directories containing schema files. May be \
             repeated; all schema sources are combined into one schema.",
        long="schema",
        required=true,
        value_delimiter = ',',
    )]
    schema_paths: Vec<PathBuf>,

    #[arg(
        help="Paths to query files or directories containing query files \
             which need to be validated against the schema.",
        name="QUERY_PATHS",
    )]
    query_paths: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
enum QueryOutcome {
    Valid,
    Invalid { errors: Vec<ValidationError> },
    SyntaxError { error: GraphQLSyntaxError },
    ReadError { message: String },
}

#[derive(Debug, Serialize)]
struct QueryReport {
    file: PathBuf,
    #[serde(flatten)]
    outcome: QueryOutcome,
}

impl QueryReport {
    fn is_valid(&self) -> bool {
        matches!(self.outcome, QueryOutcome::Valid)
    }

    fn text_lines(&self) -> Vec<String> {
        let file = self.file.display();
        match &self.outcome {
            QueryOutcome::Valid => vec![],
            QueryOutcome::Invalid { errors } => errors
                .iter()
                .map(|err| format!("{file}:{} [{}]", err.format_oneline(), err.rule))
                .collect(),
            QueryOutcome::SyntaxError { error } => {
                vec![format!("{file}:{}", error.format_oneline())]
            },
            QueryOutcome::ReadError { message } => vec![message.to_owned()],
        }
    }
}

/// Reads, parses, and validates one query file. Runs on a blocking worker
/// thread.
fn check_query_file(
    file: PathBuf,
    schema: &Schema,
    registry: &FieldVisitorRegistry,
) -> QueryReport {
    let outcome = match file_reader::read_content(&file) {
        Err(err) => QueryOutcome::ReadError { message: err.to_string() },
        Ok(content) => match gqlcheck_parser::parse_query(&content) {
            Err(error) => QueryOutcome::SyntaxError { error },
            Ok(document) => {
                let errors = gqlcheck_core::validate(schema, &document, registry);
                if errors.is_empty() {
                    QueryOutcome::Valid
                } else {
                    QueryOutcome::Invalid { errors }
                }
            },
        },
    };
    log::debug!("Checked {file:#?}: {outcome:?}");
    QueryReport { file, outcome }
}

fn format_schema_error(err: &SchemaLoadError) -> String {
    match err.location() {
        Some(location) if !matches!(err, SchemaLoadError::ParseError { .. }) => {
            format!("{} Errors validating schema: {location}: {err}", output_utils::RED_X)
        },
        _ => format!("{} Errors validating schema: {err}", output_utils::RED_X),
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let graphql_file_exts = graphql_files::normalize_exts(&self.graphql_file_exts);

        let schema_files =
            match graphql_files::find_graphql_files(&self.schema_paths, &graphql_file_exts) {
                Ok(files) => files,
                Err(err) => return CommandResult::stderr(format_args!(
                    "{} Failed to scan schema paths: {err}",
                    output_utils::RED_X,
                )),
            };
        let query_files =
            match graphql_files::find_graphql_files(&self.query_paths, &graphql_file_exts) {
                Ok(files) => files,
                Err(err) => return CommandResult::stderr(format_args!(
                    "{} Failed to scan query paths: {err}",
                    output_utils::RED_X,
                )),
            };

        let schema = match SchemaLoader::new()
            .load_files(&schema_files.paths)
            .and_then(SchemaLoader::build)
        {
            Ok(schema) => Arc::new(schema),
            Err(err) => return CommandResult::stderr(format_args!(
                "{}",
                format_schema_error(&err),
            )),
        };
        log::debug!(
            "Loaded schema with {} types and {} directives from {} files.",
            schema.types().len(),
            schema.directives().len(),
            schema_files.paths.len(),
        );

        let registry = Arc::new(
            rules::register_builtin_rules(FieldVisitorRegistry::builder()).build(),
        );

        let num_query_files = query_files.paths.len();
        let tasks: Vec<_> = query_files.paths
            .into_iter()
            .map(|file| {
                let schema = Arc::clone(&schema);
                let registry = Arc::clone(&registry);
                tokio::task::spawn_blocking(move || {
                    check_query_file(file, &schema, &registry)
                })
            })
            .collect();

        let mut reports = Vec::with_capacity(tasks.len());
        for task in tasks {
            match task.await {
                Ok(report) => reports.push(report),
                Err(err) => return CommandResult::stderr(format_args!(
                    "{} A validation task failed: {err}",
                    output_utils::RED_X,
                )),
            }
        }
        let num_invalid = reports.iter().filter(|report| !report.is_valid()).count();

        if self.format == OutputFormat::Json {
            return match output_utils::to_json(&reports) {
                Ok(json) if num_invalid == 0 => CommandResult::stdout(format_args!("{json}")),
                Ok(json) => CommandResult::failed_stdout(format_args!("{json}")),
                Err(message) => CommandResult::stderr(format_args!("{message}")),
            };
        }

        if num_invalid == 0 {
            return CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL validated successfully:\n",
                    "  * Loaded {} schema files.\n",
                    "  * Skipped {} non-graphql files.\n",
                    "  * Validated {} type definitions.\n",
                    "  * Validated {} directive definitions.\n",
                    "  * Validated {} query files.",
                ),
                output_utils::GREEN_CHECK,
                schema_files.paths.len(),
                schema_files.num_skipped + query_files.num_skipped,
                schema.types().len(),
                schema.directives().len(),
                num_query_files,
            ));
        }

        let lines = reports
            .iter()
            .flat_map(QueryReport::text_lines)
            .collect::<Vec<_>>()
            .join("\n");
        CommandResult::stderr(format_args!(
            "{lines}\n{} {} of {} failed validation.",
            output_utils::RED_X,
            num_invalid,
            output_utils::pluralize(num_query_files, "query file", "query files"),
        ))
    }
}
