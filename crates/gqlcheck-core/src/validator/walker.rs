use crate::Schema;
use crate::validator::FieldVisitorRegistry;
use crate::validator::ValidationContext;
use crate::validator::ValidationError;
use gqlcheck_parser::ast::Definition;
use gqlcheck_parser::ast::FieldDefinition;
use gqlcheck_parser::ast::QueryDocument;
use gqlcheck_parser::ast::Selection;
use gqlcheck_parser::ast::TypeAnnotation;
use std::collections::HashSet;
use std::sync::OnceLock;

/// The definition every `__typename` selection resolves to, whatever its
/// parent type.
fn typename_field() -> &'static FieldDefinition {
    static TYPENAME: OnceLock<FieldDefinition> = OnceLock::new();
    TYPENAME.get_or_init(|| FieldDefinition {
        name: "__typename".to_string(),
        ty: TypeAnnotation::named("String"),
        ..Default::default()
    })
}

/// Depth-first traversal of a query document that resolves the static type
/// context of each field and hands it to every registered field visitor.
///
/// Each fragment is expanded at most once per walk, whether it is reached
/// through a spread or as a top-level definition. A fragment's parent is
/// always its own type condition, so later expansions would only repeat the
/// same visits.
pub(crate) struct Walker<'a> {
    context: ValidationContext<'a>,
    registry: &'a FieldVisitorRegistry,
    expanded_fragments: HashSet<&'a str>,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(
        schema: &'a Schema,
        document: &'a QueryDocument,
        registry: &'a FieldVisitorRegistry,
    ) -> Self {
        Self {
            context: ValidationContext::new(schema, document),
            registry,
            expanded_fragments: HashSet::new(),
        }
    }

    pub(crate) fn walk(mut self) -> Vec<ValidationError> {
        let schema = self.context.schema();
        let document = self.context.document();

        for op in &document.operations {
            tracing::trace!(
                "Walking {} {}",
                op.operation,
                op.name.as_deref().unwrap_or("<anonymous>"),
            );
            let root = schema.root_type(op.operation);
            self.walk_selection_set(root, &op.selection_set);
        }

        for fragment in &document.fragments {
            let Some(type_condition) = schema.type_def(&fragment.type_condition) else {
                tracing::trace!(
                    "Skipping fragment {} on unknown type {}",
                    fragment.name,
                    fragment.type_condition,
                );
                continue;
            };
            if !self.expanded_fragments.insert(&fragment.name) {
                tracing::trace!("Fragment {} already expanded", fragment.name);
                continue;
            }
            tracing::trace!("Walking fragment {}", fragment.name);
            self.walk_selection_set(Some(type_condition), &fragment.selection_set);
        }

        self.context.into_errors()
    }

    fn walk_selection_set(
        &mut self,
        parent: Option<&'a Definition>,
        selections: &'a [Selection],
    ) {
        for selection in selections {
            self.walk_selection(parent, selection);
        }
    }

    fn walk_selection(&mut self, parent: Option<&'a Definition>, selection: &'a Selection) {
        let schema = self.context.schema();

        match selection {
            Selection::Field(field) => {
                let def =
                    if field.name == "__typename" {
                        Some(typename_field())
                    } else {
                        parent.and_then(|parent| parent.field(&field.name))
                    };

                let registry = self.registry;
                for visitor in registry.visitors() {
                    self.context.set_rule(&visitor.rule);
                    (visitor.visit)(&mut self.context, parent, def, field);
                }

                let field_type = def.and_then(|def| schema.type_def(def.ty.name()));
                self.walk_selection_set(field_type, &field.selection_set);
            },

            Selection::InlineFragment(inline) => {
                let parent = match &inline.type_condition {
                    Some(type_name) => schema.type_def(type_name),
                    None => parent,
                };
                self.walk_selection_set(parent, &inline.selection_set);
            },

            Selection::FragmentSpread(spread) => {
                let Some(fragment) = self.context.document().fragment(&spread.name) else {
                    return;
                };
                // Also cuts spread cycles.
                if !self.expanded_fragments.insert(&fragment.name) {
                    return;
                }

                let parent = schema.type_def(&fragment.type_condition);
                self.walk_selection_set(parent, &fragment.selection_set);
            },
        }
    }
}
