//! Query validation: a walker that visits every field of a query document
//! with its statically resolved type context, dispatching to a registry of
//! field visitors.
//!
//! ```
//! use gqlcheck_core::Schema;
//! use gqlcheck_core::validator::FieldVisitorRegistry;
//! use gqlcheck_core::validator::rules;
//!
//! let schema = Schema::load("type Query { hello: String }\nschema { query: Query }").unwrap();
//! let registry = rules::register_builtin_rules(FieldVisitorRegistry::builder()).build();
//! let document = gqlcheck_parser::parse_query("{ hello goodbye }").unwrap();
//!
//! let errors = gqlcheck_core::validate(&schema, &document, &registry);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].message, "Cannot query field \"goodbye\" on type \"Query\".");
//! ```

mod field_visitor_registry;
pub mod rules;
mod validation_context;
mod validation_error;
mod walker;

pub use field_visitor_registry::FieldVisitor;
pub use field_visitor_registry::FieldVisitorRegistry;
pub use field_visitor_registry::FieldVisitorRegistryBuilder;
pub use validation_context::ValidationContext;
pub use validation_error::ValidationError;

use crate::Schema;
use gqlcheck_parser::ast::QueryDocument;
use walker::Walker;

/// Walks `document` against `schema`, running every visitor in `registry`,
/// and returns all the errors they reported in traversal order.
///
/// Operations are walked first, then top-level fragments not already reached
/// through a spread. Each fragment is expanded once. Validation never
/// stops early: every field is visited even after errors are reported.
pub fn validate(
    schema: &Schema,
    document: &QueryDocument,
    registry: &FieldVisitorRegistry,
) -> Vec<ValidationError> {
    Walker::new(schema, document, registry).walk()
}

#[cfg(test)]
mod tests;
