mod schema_loader_tests;
mod schema_lookup_tests;
