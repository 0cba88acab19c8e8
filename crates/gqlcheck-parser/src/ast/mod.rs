//! Owned AST types for schema (SDL) documents and query documents.
//!
//! Every node derives `Default` so the parser can hand back a zero-valued
//! node once it has recorded a syntax error. Nodes are immutable after
//! parsing, except that schema assembly appends extension contents onto base
//! [`Definition`]s.

mod definition_kind;
mod directive_location;
mod executable_defs;
mod type_annotation;
mod type_system_defs;
mod values;

pub use definition_kind::DefinitionKind;
pub use directive_location::DirectiveLocation;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationType;
pub use executable_defs::QueryDocument;
pub use executable_defs::Selection;
pub use executable_defs::VariableDefinition;
pub use type_annotation::TypeAnnotation;
pub use type_system_defs::Definition;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::OperationTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::SchemaDocument;
pub use values::Argument;
pub use values::Directive;
pub use values::Value;

#[cfg(test)]
mod tests;
