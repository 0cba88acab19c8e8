use crate::file_reader;
use crate::schema::Schema;
use crate::schema::SchemaLoadError;
use gqlcheck_parser::ast::Definition;
use gqlcheck_parser::ast::DefinitionKind;
use gqlcheck_parser::ast::OperationType;
use gqlcheck_parser::ast::SchemaDefinition;
use gqlcheck_parser::ast::SchemaDocument;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaLoadError>;

/// Accumulates schema sources and assembles them into a [`Schema`].
///
/// Every loaded source is parsed immediately (so syntax errors name the file
/// they came from) and appended onto one combined [`SchemaDocument`].
/// Assembly happens in [`SchemaLoader::build`], after all sources are in, so
/// an extension may live in a different file than the type it extends.
#[derive(Debug, Default)]
pub struct SchemaLoader {
    document: SchemaDocument,
    str_load_counter: u16,
}

impl SchemaLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Result<Schema> {
        assemble(self.document)
    }

    /// Appends an already-parsed document.
    pub fn load_document(mut self, document: SchemaDocument) -> Self {
        self.document.merge(document);
        self
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files([file_path])
    }

    pub fn load_files<P: AsRef<Path>>(
        mut self,
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = file_reader::read_content(file_path)?;
            self = self.load_str(Some(file_path.to_path_buf()), content.as_str())?;
        }
        Ok(self)
    }

    /// Parses `content` and appends it. Sources without a path are named
    /// `str://0`, `str://1`, ... in error reports.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let document = gqlcheck_parser::parse_schema(content)
            .map_err(|err| SchemaLoadError::ParseError {
                file: file_path.clone(),
                err,
            })?;

        tracing::debug!(
            "Loaded {} type definitions from {}",
            document.definitions.len(),
            file_path.display(),
        );
        self.document.merge(document);
        Ok(self)
    }
}

/// Turns a combined schema document into a [`Schema`], failing on the first
/// semantic error.
fn assemble(document: SchemaDocument) -> Result<Schema> {
    let SchemaDocument {
        definitions,
        extensions,
        schema: schema_blocks,
        schema_extensions,
        directives,
    } = document;

    let mut types = IndexMap::with_capacity(definitions.len());
    for def in definitions {
        match types.entry(def.name.clone()) {
            Entry::Occupied(_) => {
                return Err(SchemaLoadError::DuplicateTypeDefinition {
                    type_name: def.name,
                    location: def.location,
                });
            },
            Entry::Vacant(entry) => {
                entry.insert(def);
            },
        }
    }
    tracing::debug!("Indexed {} types", types.len());

    for ext in extensions {
        let Some(base) = types.get_mut(&ext.name) else {
            return Err(SchemaLoadError::ExtensionOfUndefinedType {
                type_name: ext.name,
                location: ext.location,
            });
        };
        if base.kind != ext.kind {
            return Err(SchemaLoadError::InvalidExtensionKind {
                type_name: ext.name,
                base_kind: base.kind,
                extension_kind: ext.kind,
                location: ext.location,
            });
        }

        base.directives.extend(ext.directives);
        base.interfaces.extend(ext.interfaces);
        base.fields.extend(ext.fields);
        base.types.extend(ext.types);
        base.values.extend(ext.values);
        tracing::debug!("Merged extension of {} {}", ext.kind.keyword(), ext.name);
    }

    let mut directive_defs = IndexMap::with_capacity(directives.len());
    for directive in directives {
        match directive_defs.entry(directive.name.clone()) {
            Entry::Occupied(_) => {
                return Err(SchemaLoadError::DuplicateDirectiveDefinition {
                    directive_name: directive.name,
                    location: directive.location,
                });
            },
            Entry::Vacant(entry) => {
                entry.insert(directive);
            },
        }
    }

    if let [_, second, ..] = schema_blocks.as_slice() {
        return Err(SchemaLoadError::MultipleSchemaDefinitions {
            location: second.location,
        });
    }

    let possible_types = index_possible_types(&types);
    let mut schema = Schema {
        types,
        directives: directive_defs,
        possible_types,
        ..Schema::default()
    };

    for block in &schema_blocks {
        assign_roots(&mut schema, block)?;
    }
    for block in &schema_extensions {
        assign_roots(&mut schema, block)?;
    }
    tracing::debug!(
        "Resolved root types: query={:?} mutation={:?} subscription={:?}",
        schema.query_type,
        schema.mutation_type,
        schema.subscription_type,
    );

    Ok(schema)
}

/// Maps each type name to the non-interface types that are possible for it:
/// every non-interface type is possible for itself and for each interface it
/// implements. Runs after extensions are merged, so `implements` clauses
/// added by `extend type` count.
fn index_possible_types(
    types: &IndexMap<String, Definition>,
) -> IndexMap<String, Vec<String>> {
    let mut index: IndexMap<String, Vec<String>> = IndexMap::new();
    for def in types.values() {
        if def.kind == DefinitionKind::Interface {
            continue;
        }
        for name in def.interfaces.iter().chain(std::iter::once(&def.name)) {
            let possible = index.entry(name.clone()).or_default();
            if !possible.contains(&def.name) {
                possible.push(def.name.clone());
            }
        }
    }
    index
}

/// Points each operation root named by `block` at its type. A later block
/// overwrites roots assigned by an earlier one.
fn assign_roots(schema: &mut Schema, block: &SchemaDefinition) -> Result<()> {
    for entry in &block.operation_types {
        if !schema.types.contains_key(&entry.type_name) {
            return Err(SchemaLoadError::UndefinedRootOperationType {
                operation: entry.operation,
                type_name: entry.type_name.clone(),
                location: block.location,
            });
        }

        let root = match entry.operation {
            OperationType::Query => &mut schema.query_type,
            OperationType::Mutation => &mut schema.mutation_type,
            OperationType::Subscription => &mut schema.subscription_type,
        };
        if let Some(previous) = root.replace(entry.type_name.clone())
            && previous != entry.type_name
        {
            tracing::debug!(
                "Root {} type {} replaced by {}",
                entry.operation,
                previous,
                entry.type_name,
            );
        }
    }
    Ok(())
}
