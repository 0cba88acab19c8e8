use crate::validator::FieldVisitorRegistryBuilder;
use crate::validator::ValidationContext;
use gqlcheck_parser::ast::Definition;
use gqlcheck_parser::ast::Field;
use gqlcheck_parser::ast::FieldDefinition;

pub const RULE_NAME: &str = "FieldsOnCorrectType";

pub fn register(builder: FieldVisitorRegistryBuilder) -> FieldVisitorRegistryBuilder {
    builder.add_field_visitor(RULE_NAME, visit_field)
}

/// A field selected on a known composite type must be defined by that type.
/// Fields under an unresolved or leaf parent are left to other rules.
fn visit_field(
    ctx: &mut ValidationContext<'_>,
    parent: Option<&Definition>,
    def: Option<&FieldDefinition>,
    field: &Field,
) {
    let (Some(parent), None) = (parent, def) else {
        return;
    };
    if parent.is_leaf() {
        return;
    }
    ctx.report(
        format!("Cannot query field \"{}\" on type \"{}\".", field.name, parent.name),
        field.location,
    );
}
