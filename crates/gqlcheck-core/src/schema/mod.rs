mod schema;
mod schema_load_error;
mod schema_loader;

pub use schema::Schema;
pub use schema_load_error::SchemaLoadError;
pub use schema_loader::SchemaLoader;

#[cfg(test)]
mod tests;
