//! Reference validation rules. Each exposes its rule name and a `register`
//! function that adds its visitor to a registry builder.

pub mod fields_on_correct_type;
pub mod scalar_leafs;

use crate::validator::FieldVisitorRegistryBuilder;

/// Registers every rule in this module.
pub fn register_builtin_rules(builder: FieldVisitorRegistryBuilder) -> FieldVisitorRegistryBuilder {
    let builder = fields_on_correct_type::register(builder);
    scalar_leafs::register(builder)
}
