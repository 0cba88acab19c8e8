use crate::file_reader::ReadContentError;
use gqlcheck_parser::GraphQLSyntaxError;
use gqlcheck_parser::Location;
use gqlcheck_parser::ast::DefinitionKind;
use gqlcheck_parser::ast::OperationType;
use std::path::PathBuf;

/// The first failure encountered while loading or assembling a [`Schema`].
///
/// Assembly is fail-fast: no partial schema is produced alongside any of
/// these.
///
/// [`Schema`]: crate::Schema
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SchemaLoadError {
    #[error("Cannot redeclare type {type_name}.")]
    DuplicateTypeDefinition {
        type_name: String,
        location: Location,
    },

    #[error("Cannot extend type {type_name} because it does not exist.")]
    ExtensionOfUndefinedType {
        type_name: String,
        location: Location,
    },

    #[error(
        "Cannot extend type {type_name} because the base type is a {base_kind}, \
        not {extension_kind}."
    )]
    InvalidExtensionKind {
        type_name: String,
        base_kind: DefinitionKind,
        extension_kind: DefinitionKind,
        location: Location,
    },

    #[error("Cannot redeclare directive {directive_name}.")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location: Location,
    },

    #[error("Cannot have multiple schema entry points, consider schema extensions instead.")]
    MultipleSchemaDefinitions {
        location: Location,
    },

    #[error("Schema root {operation} refers to a type {type_name} that does not exist.")]
    UndefinedRootOperationType {
        operation: OperationType,
        type_name: String,
        location: Location,
    },

    #[error("Error parsing {}: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: GraphQLSyntaxError,
    },

    #[error(transparent)]
    FileRead(#[from] ReadContentError),
}

impl SchemaLoadError {
    /// The source location the error points at, if it has one.
    pub fn location(&self) -> Option<Location> {
        match self {
            SchemaLoadError::DuplicateTypeDefinition { location, .. }
            | SchemaLoadError::ExtensionOfUndefinedType { location, .. }
            | SchemaLoadError::InvalidExtensionKind { location, .. }
            | SchemaLoadError::DuplicateDirectiveDefinition { location, .. }
            | SchemaLoadError::MultipleSchemaDefinitions { location }
            | SchemaLoadError::UndefinedRootOperationType { location, .. } => Some(*location),
            SchemaLoadError::ParseError { err, .. } => err.locations().first().copied(),
            SchemaLoadError::FileRead(_) => None,
        }
    }
}
