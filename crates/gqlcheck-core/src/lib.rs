//! Schema assembly and query validation for GraphQL documents parsed by
//! [`gqlcheck_parser`].
//!
//! A [`Schema`](schema::Schema) is assembled once from one or more schema
//! documents and is immutable afterwards, so any number of threads may
//! validate query documents against it concurrently via
//! [`validate`](validator::validate).

pub mod file_reader;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod tests;

pub use schema::Schema;
pub use schema::SchemaLoadError;
pub use schema::SchemaLoader;
pub use validator::FieldVisitorRegistry;
pub use validator::FieldVisitorRegistryBuilder;
pub use validator::ValidationContext;
pub use validator::ValidationError;
pub use validator::validate;
