use crate::schema::SchemaLoadError;
use crate::schema::SchemaLoader;
use gqlcheck_parser::ast::Definition;
use gqlcheck_parser::ast::DefinitionKind;
use gqlcheck_parser::ast::DirectiveDefinition;
use gqlcheck_parser::ast::OperationType;
use gqlcheck_parser::ast::SchemaDocument;
use indexmap::IndexMap;
use serde::Serialize;

/// An assembled, immutable GraphQL schema.
///
/// Every [`Definition`] is owned by the `types` table. Root operation types
/// and the possible-types index refer to entries of that table by name, so
/// there is exactly one copy of each definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Schema {
    pub(super) types: IndexMap<String, Definition>,
    pub(super) directives: IndexMap<String, DirectiveDefinition>,
    pub(super) query_type: Option<String>,
    pub(super) mutation_type: Option<String>,
    pub(super) subscription_type: Option<String>,
    pub(super) possible_types: IndexMap<String, Vec<String>>,
}

impl Schema {
    /// Parses and assembles a single schema source.
    pub fn load(source: &str) -> Result<Self, SchemaLoadError> {
        SchemaLoader::new().load_str(None, source)?.build()
    }

    /// Assembles an already-parsed schema document.
    pub fn from_document(document: SchemaDocument) -> Result<Self, SchemaLoadError> {
        SchemaLoader::new().load_document(document).build()
    }

    pub fn loader() -> SchemaLoader {
        SchemaLoader::new()
    }

    pub fn type_def(&self, name: &str) -> Option<&Definition> {
        self.types.get(name)
    }

    pub fn directive_def(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    /// All named types, in declaration order.
    pub fn types(&self) -> &IndexMap<String, Definition> {
        &self.types
    }

    /// All directive definitions, in declaration order.
    pub fn directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directives
    }

    pub fn query_type(&self) -> Option<&Definition> {
        self.root_type(OperationType::Query)
    }

    pub fn mutation_type(&self) -> Option<&Definition> {
        self.root_type(OperationType::Mutation)
    }

    pub fn subscription_type(&self) -> Option<&Definition> {
        self.root_type(OperationType::Subscription)
    }

    /// The root type for operations of the given kind. Roots are only set by
    /// `schema` blocks and `extend schema` blocks; a type named `Query` is
    /// not picked up implicitly.
    pub fn root_type(&self, operation: OperationType) -> Option<&Definition> {
        let name = match operation {
            OperationType::Query => self.query_type.as_deref(),
            OperationType::Mutation => self.mutation_type.as_deref(),
            OperationType::Subscription => self.subscription_type.as_deref(),
        }?;
        self.types.get(name)
    }

    /// The concrete types a value of type `def` may have at runtime.
    ///
    /// For a union this resolves the declared members on every call, in
    /// declaration order, omitting members that name no known type. For any
    /// other kind it returns the index built during assembly: every
    /// non-interface type that names `def` in an `implements` clause
    /// (including clauses added by extensions), plus `def` itself when it is
    /// not an interface.
    pub fn possible_types(&self, def: &Definition) -> Vec<&Definition> {
        if def.kind == DefinitionKind::Union {
            return def
                .types
                .iter()
                .filter_map(|member| self.types.get(member))
                .collect();
        }

        self.possible_types
            .get(&def.name)
            .map(|names| names.iter().filter_map(|name| self.types.get(name)).collect())
            .unwrap_or_default()
    }
}
