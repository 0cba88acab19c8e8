use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use gqlcheck_core::file_reader;
use gqlcheck_parser::GraphQLSyntaxError;
use gqlcheck_parser::ast::QueryDocument;
use gqlcheck_parser::ast::SchemaDocument;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub(crate) enum DocumentKind {
    /// Schema definition language.
    Schema,
    /// Operations and fragments.
    Query,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        default_value_t=DocumentKind::Schema,
        help="Which grammar to parse the files with.",
        long,
        value_enum,
    )]
    kind: DocumentKind,

    #[arg(
        help="Print each parsed document (or its syntax error) as JSON.",
        long,
    )]
    json: bool,

    #[arg(
        help="Paths to one or more GraphQL files to parse.",
        name="FILE_PATHS",
        required=true,
    )]
    file_paths: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ParsedDocument {
    Schema(SchemaDocument),
    Query(QueryDocument),
}

impl ParsedDocument {
    fn summary(&self) -> String {
        match self {
            ParsedDocument::Schema(doc) => format!(
                "{}, {}, {}",
                output_utils::pluralize(doc.definitions.len(), "type", "types"),
                output_utils::pluralize(doc.extensions.len(), "extension", "extensions"),
                output_utils::pluralize(doc.directives.len(), "directive", "directives"),
            ),
            ParsedDocument::Query(doc) => format!(
                "{}, {}",
                output_utils::pluralize(doc.operations.len(), "operation", "operations"),
                output_utils::pluralize(doc.fragments.len(), "fragment", "fragments"),
            ),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum ParseOutcome {
    Document(ParsedDocument),
    SyntaxError(GraphQLSyntaxError),
    ReadError(String),
}

#[derive(Debug, Serialize)]
struct ParseReport {
    file: PathBuf,
    #[serde(flatten)]
    outcome: ParseOutcome,
}

impl ParseReport {
    fn is_ok(&self) -> bool {
        matches!(self.outcome, ParseOutcome::Document(_))
    }

    fn to_text(&self) -> String {
        let file = self.file.display();
        match &self.outcome {
            ParseOutcome::Document(doc) => {
                format!("{} {file}: {}", output_utils::GREEN_CHECK, doc.summary())
            },
            ParseOutcome::SyntaxError(err) => {
                format!("{} {file}:{}", output_utils::RED_X, err.format_oneline())
            },
            ParseOutcome::ReadError(message) => {
                format!("{} {message}", output_utils::RED_X)
            },
        }
    }
}

fn parse_file(kind: DocumentKind, file: PathBuf) -> ParseReport {
    let outcome = match file_reader::read_content(&file) {
        Err(err) => ParseOutcome::ReadError(err.to_string()),
        Ok(content) => {
            let parsed = match kind {
                DocumentKind::Schema => {
                    gqlcheck_parser::parse_schema(&content).map(ParsedDocument::Schema)
                },
                DocumentKind::Query => {
                    gqlcheck_parser::parse_query(&content).map(ParsedDocument::Query)
                },
            };
            match parsed {
                Ok(doc) => ParseOutcome::Document(doc),
                Err(err) => ParseOutcome::SyntaxError(err),
            }
        },
    };
    ParseReport { file, outcome }
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let kind = self.kind;
        let reports: Vec<ParseReport> = self.file_paths
            .into_iter()
            .map(|file| {
                log::debug!("Parsing {file:#?} as a {kind:?} document.");
                parse_file(kind, file)
            })
            .collect();
        let num_failed = reports.iter().filter(|report| !report.is_ok()).count();

        if self.json {
            return match output_utils::to_json(&reports) {
                Ok(json) if num_failed == 0 => CommandResult::stdout(format_args!("{json}")),
                Ok(json) => CommandResult::failed_stdout(format_args!("{json}")),
                Err(message) => CommandResult::stderr(format_args!("{message}")),
            };
        }

        let lines = reports
            .iter()
            .map(ParseReport::to_text)
            .collect::<Vec<_>>()
            .join("\n");
        if num_failed == 0 {
            CommandResult::stdout(format_args!("{lines}"))
        } else {
            CommandResult::stderr(format_args!(
                "{lines}\n{} {} of {} failed to parse.",
                output_utils::RED_X,
                num_failed,
                output_utils::pluralize(reports.len(), "file", "files"),
            ))
        }
    }
}
