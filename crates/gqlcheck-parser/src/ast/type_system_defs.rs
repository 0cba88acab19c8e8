use crate::Location;
use crate::ast::DefinitionKind;
use crate::ast::Directive;
use crate::ast::DirectiveLocation;
use crate::ast::OperationType;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;

/// A parsed schema (SDL) document, with its top-level definitions sorted into
/// buckets by category while preserving source order within each bucket.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SchemaDocument {
    /// `scalar`, `type`, `interface`, `union`, `enum`, and `input`
    /// definitions.
    pub definitions: Vec<Definition>,
    /// `extend scalar|type|interface|union|enum|input` blocks.
    pub extensions: Vec<Definition>,
    /// `schema { ... }` blocks.
    pub schema: Vec<SchemaDefinition>,
    /// `extend schema { ... }` blocks.
    pub schema_extensions: Vec<SchemaDefinition>,
    /// `directive @name ... on ...` definitions.
    pub directives: Vec<DirectiveDefinition>,
}

impl SchemaDocument {
    /// Appends every bucket of `other` onto the matching bucket of `self`.
    pub fn merge(&mut self, other: SchemaDocument) {
        self.definitions.extend(other.definitions);
        self.extensions.extend(other.extensions);
        self.schema.extend(other.schema);
        self.schema_extensions.extend(other.schema_extensions);
        self.directives.extend(other.directives);
    }
}

/// One named type-system declaration (or extension of one).
///
/// Which list fields are populated depends on [`Definition::kind`]; the
/// others stay empty.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Definition {
    pub kind: DefinitionKind,
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<Directive>,
    /// Interfaces named in an `implements` clause (objects only).
    pub interfaces: Vec<String>,
    /// Fields of objects and interfaces, or input fields of input objects.
    pub fields: Vec<FieldDefinition>,
    /// Union member type names.
    pub types: Vec<String>,
    /// Enum values.
    pub values: Vec<EnumValueDefinition>,
    pub location: Location,
}

impl Definition {
    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Whether values of this type are leaves of a response (no selection
    /// set allowed).
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, DefinitionKind::Scalar | DefinitionKind::Enum)
    }
}

/// A field on an object/interface, an input field, or an argument.
///
/// Arguments and input fields reuse this shape with `arguments` left empty.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<FieldDefinition>,
    pub ty: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub location: Location,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EnumValueDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DirectiveDefinition {
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<FieldDefinition>,
    pub locations: Vec<DirectiveLocation>,
    pub location: Location,
}

/// A `schema { ... }` block or an `extend schema { ... }` block.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SchemaDefinition {
    pub description: Option<String>,
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub location: Location,
}

/// One `query: Query` entry of a schema block.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OperationTypeDefinition {
    pub operation: OperationType,
    pub type_name: String,
}
