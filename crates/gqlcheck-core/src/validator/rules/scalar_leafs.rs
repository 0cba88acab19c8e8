use crate::validator::FieldVisitorRegistryBuilder;
use crate::validator::ValidationContext;
use gqlcheck_parser::ast::Definition;
use gqlcheck_parser::ast::Field;
use gqlcheck_parser::ast::FieldDefinition;

pub const RULE_NAME: &str = "ScalarLeafs";

pub fn register(builder: FieldVisitorRegistryBuilder) -> FieldVisitorRegistryBuilder {
    builder.add_field_visitor(RULE_NAME, visit_field)
}

/// Scalar and enum fields must not have a selection set; fields of any other
/// kind must have one.
fn visit_field(
    ctx: &mut ValidationContext<'_>,
    _parent: Option<&Definition>,
    def: Option<&FieldDefinition>,
    field: &Field,
) {
    let Some(def) = def else {
        return;
    };
    let Some(field_type) = ctx.schema().type_def(def.ty.name()) else {
        return;
    };

    if field_type.is_leaf() && !field.selection_set.is_empty() {
        ctx.report(
            format!(
                "Field \"{}\" must not have a selection since type \"{}\" has no subfields.",
                field.name, def.ty,
            ),
            field.location,
        );
    } else if !field_type.is_leaf() && field.selection_set.is_empty() {
        ctx.report(
            format!(
                "Field \"{}\" of type \"{}\" must have a selection of subfields. \
                Did you mean \"{} {{ ... }}\"?",
                field.name, def.ty, field.name,
            ),
            field.location,
        );
    }
}
